//! Per-frame computational units.
//!
//! Tasks operate on a single frame and attach the frame index to every error
//! they raise; workflows compose them across a frame range.

pub mod frame_order;
