use crate::cli::ColorizeArgs;
use crate::config::builder::build_colorize_config;
use crate::error::{CliError, Result};
use nematic::core::color::misalignment::FrameAlignment;
use nematic::core::io::export;
use nematic::workflows;
use tracing::info;

pub fn run(args: ColorizeArgs) -> Result<()> {
    let app_config = build_colorize_config(&args)?;
    let trajectory = super::load_trajectory(&app_config.input_path)?;

    info!(
        "Coloring frame {} with the {} colormap...",
        app_config.core_config.frame_index, app_config.core_config.colormap
    );
    let map = workflows::colorize::run(&trajectory, &app_config.core_config)?;

    export::write_misalignment_map_to_path(&app_config.output_path, &map).map_err(|e| {
        CliError::Output {
            path: app_config.output_path.clone(),
            source: e.into(),
        }
    })?;

    let summary = match map.alignment() {
        FrameAlignment::Scaled {
            min_angle,
            max_angle,
        } => format!(
            "misalignment {:.2}° to {:.2}°",
            min_angle.to_degrees(),
            max_angle.to_degrees()
        ),
        FrameAlignment::Uniform { angle } => {
            format!("uniform misalignment {:.2}°", angle.to_degrees())
        }
        FrameAlignment::FullyAligned => "no bonds, fully aligned".to_string(),
    };
    println!(
        "✓ {} bond colors written to {} ({})",
        map.len(),
        app_config.output_path.display(),
        summary
    );
    Ok(())
}
