use crate::cli::OrderArgs;
use crate::config::builder::build_order_config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use nematic::core::io::export;
use nematic::engine::progress::ProgressReporter;
use nematic::workflows;
use tracing::{info, warn};

pub fn run(args: OrderArgs) -> Result<()> {
    let app_config = build_order_config(&args)?;
    let trajectory = super::load_trajectory(&app_config.input_path)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the order series workflow...");
    let series = workflows::order_series::run(&trajectory, &app_config.core_config, &reporter)?;

    if series.is_empty() {
        warn!("The selected frame range contains no frames.");
    }
    if series.num_undefined() > 0 {
        warn!(
            "{} of {} frames have no bonds; their order is left empty.",
            series.num_undefined(),
            series.len()
        );
    }

    match &app_config.output_path {
        Some(path) => {
            export::write_order_series_to_path(path, &series).map_err(|e| CliError::Output {
                path: path.clone(),
                source: e.into(),
            })?;
            match series.mean_order() {
                Some(mean) => println!(
                    "✓ Order of {} frames written to {} (mean S = {:.4})",
                    series.len(),
                    path.display(),
                    mean
                ),
                None => println!(
                    "✓ Order of {} frames written to {} (no defined order)",
                    series.len(),
                    path.display()
                ),
            }
        }
        None => {
            export::write_order_series(std::io::stdout().lock(), &series)
                .map_err(|e| CliError::Other(e.into()))?;
            if let Some(mean) = series.mean_order() {
                info!("Mean order parameter: {:.4}", mean);
            }
        }
    }
    Ok(())
}
