use super::frame::Frame;
use crate::core::io::traits::{FrameSource, SourceError};
use std::borrow::Cow;

/// An ordered, fully in-memory sequence of frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    frames: Vec<Frame>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_frames(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl FromIterator<Frame> for Trajectory {
    fn from_iter<T: IntoIterator<Item = Frame>>(iter: T) -> Self {
        Self {
            frames: iter.into_iter().collect(),
        }
    }
}

impl FrameSource for Trajectory {
    fn num_frames(&self) -> usize {
        self.frames.len()
    }

    fn frame(&self, index: usize) -> Result<Cow<'_, Frame>, SourceError> {
        self.frames
            .get(index)
            .map(Cow::Borrowed)
            .ok_or(SourceError::FrameNotFound {
                index,
                num_frames: self.frames.len(),
            })
    }
}
