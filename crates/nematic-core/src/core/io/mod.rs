//! Provides input/output functionality for trajectories and analysis results.
//!
//! Trajectory formats implement [`traits::TrajectoryFile`] and load into an
//! in-memory [`crate::core::models::trajectory::Trajectory`], which the analysis
//! reads through the format-independent [`traits::FrameSource`] capability.
//! Results are exported as CSV for plotting and rendering tools.

pub mod bgf;
pub mod export;
pub mod traits;
