use thiserror::Error;

use super::config::{FrameRange, RangeError};
use crate::core::io::traits::SourceError;
use crate::core::order::vectors::FrameError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid frame range (start={start}, stop={stop:?}, stride={stride}): {reason}")]
    InvalidRange {
        start: usize,
        stop: Option<usize>,
        stride: usize,
        reason: String,
    },

    #[error(
        "Frame {frame_index}: bond {bond_index} references particle {particle_index}, but the frame has only {num_particles} particles"
    )]
    OutOfBounds {
        frame_index: usize,
        bond_index: usize,
        particle_index: usize,
        num_particles: usize,
    },

    #[error("Frame {frame_index}: bond {bond_index} has zero length or non-finite components")]
    DegenerateVector {
        frame_index: usize,
        bond_index: usize,
    },

    #[error("Frame source unavailable: {source}")]
    SourceUnavailable {
        frame_index: Option<usize>,
        #[source]
        source: SourceError,
    },
}

impl EngineError {
    pub(crate) fn invalid_range(range: &FrameRange, error: RangeError) -> Self {
        Self::InvalidRange {
            start: range.start,
            stop: range.stop,
            stride: range.stride,
            reason: error.to_string(),
        }
    }

    pub(crate) fn in_frame(frame_index: usize, error: FrameError) -> Self {
        match error {
            FrameError::OutOfBounds {
                bond_index,
                particle_index,
                num_particles,
            } => Self::OutOfBounds {
                frame_index,
                bond_index,
                particle_index,
                num_particles,
            },
        }
    }

    /// A bond of this frame had no usable direction for the order tensor.
    pub(crate) fn degenerate(frame_index: usize, bond_index: usize) -> Self {
        Self::DegenerateVector {
            frame_index,
            bond_index,
        }
    }

    pub(crate) fn unavailable(frame_index: usize, source: SourceError) -> Self {
        Self::SourceUnavailable {
            frame_index: Some(frame_index),
            source,
        }
    }

    /// Index of the frame the failure belongs to, when there is one.
    pub fn frame_index(&self) -> Option<usize> {
        match self {
            Self::OutOfBounds { frame_index, .. } | Self::DegenerateVector { frame_index, .. } => {
                Some(*frame_index)
            }
            Self::SourceUnavailable { frame_index, .. } => *frame_index,
            Self::InvalidRange { .. } => None,
        }
    }
}
