use crate::core::color::misalignment::{FrameAlignment, MisalignmentColorizer, MisalignmentMap};
use crate::core::io::traits::FrameSource;
use crate::core::order::vectors::extract_bond_segments;
use crate::engine::config::ColorizeConfig;
use crate::engine::error::EngineError;
use crate::engine::tasks::frame_order;
use nalgebra::Vector3;
use tracing::{info, instrument, warn};

/// Colors every bond of one frame by its misalignment with the frame's director.
///
/// A frame without bonds yields an empty map reported as fully aligned.
#[instrument(skip_all, name = "colorize_workflow", fields(frame_index = config.frame_index))]
pub fn run<S>(source: &S, config: &ColorizeConfig) -> Result<MisalignmentMap, EngineError>
where
    S: FrameSource + ?Sized,
{
    let frame_index = config.frame_index;
    let frame = frame_order::fetch_frame(source, frame_index)?;
    let segments =
        extract_bond_segments(&frame).map_err(|e| EngineError::in_frame(frame_index, e))?;
    let vectors: Vec<Vector3<f64>> = segments.iter().map(|s| s.vector).collect();

    let colorizer = MisalignmentColorizer::new(config.colormap, config.alpha);
    let map = match frame_order::measure(frame_index, &vectors)? {
        Some(measurement) => {
            info!(
                "Frame {} has order {:.4}; coloring {} bonds with {}.",
                frame_index,
                measurement.order,
                segments.len(),
                colorizer.colormap()
            );
            colorizer.colorize(&segments, &measurement.director)
        }
        None => colorizer.colorize(&segments, &Vector3::z_axis()),
    };

    if let FrameAlignment::Uniform { angle } = map.alignment() {
        warn!(
            "All {} bonds of frame {} share misalignment {:.6} rad; using a single color.",
            map.len(),
            frame_index,
            angle
        );
    }
    Ok(map)
}
