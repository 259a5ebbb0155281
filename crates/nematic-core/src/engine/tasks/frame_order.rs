use crate::core::io::traits::FrameSource;
use crate::core::models::frame::Frame;
use crate::core::models::series::OrderResult;
use crate::core::order::eigen::NematicOrder;
use crate::core::order::tensor::{OrderTensor, TensorError};
use crate::core::order::vectors::extract_bond_vectors;
use crate::engine::error::EngineError;
use nalgebra::Vector3;
use std::borrow::Cow;
use tracing::{debug, instrument, warn};

/// Reads one frame, attaching the frame index to any source failure.
pub fn fetch_frame<S>(source: &S, frame_index: usize) -> Result<Cow<'_, Frame>, EngineError>
where
    S: FrameSource + ?Sized,
{
    source
        .frame(frame_index)
        .map_err(|e| EngineError::unavailable(frame_index, e))
}

/// Order and director of one frame's bond vectors.
///
/// A frame without bonds yields `None` rather than an error.
pub fn measure(
    frame_index: usize,
    vectors: &[Vector3<f64>],
) -> Result<Option<NematicOrder>, EngineError> {
    match OrderTensor::from_vectors(vectors) {
        Ok(tensor) => Ok(Some(tensor.nematic_order())),
        Err(TensorError::Empty) => {
            warn!(
                "Frame {} has no bonds; its order parameter is undefined.",
                frame_index
            );
            Ok(None)
        }
        Err(TensorError::DegenerateVector { bond_index }) => {
            Err(EngineError::degenerate(frame_index, bond_index))
        }
    }
}

#[instrument(skip(frame), name = "frame_order_task")]
pub fn run(frame: &Frame, frame_index: usize) -> Result<OrderResult, EngineError> {
    let vectors =
        extract_bond_vectors(frame).map_err(|e| EngineError::in_frame(frame_index, e))?;

    let result = match measure(frame_index, &vectors)? {
        Some(measurement) => {
            debug!(
                order = measurement.order,
                num_bonds = vectors.len(),
                "Computed frame order."
            );
            OrderResult::defined(frame_index, measurement)
        }
        None => OrderResult::undefined(frame_index),
    };
    Ok(result)
}
