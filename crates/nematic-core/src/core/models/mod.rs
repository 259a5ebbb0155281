//! # Core Models Module
//!
//! Data structures describing trajectories and the per-frame results computed
//! from them.
//!
//! - [`frame`] - Particle positions and bond connectivity of one snapshot
//! - [`trajectory`] - An in-memory, ordered sequence of frames
//! - [`series`] - Per-frame order results and the time series that collects them

pub mod frame;
pub mod series;
pub mod trajectory;
