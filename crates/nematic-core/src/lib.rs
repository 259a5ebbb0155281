//! # Nematic Order Library
//!
//! Orientational order analysis of bonded particle trajectories: the nematic
//! order parameter and director of each frame, and per-bond misalignment
//! coloring for visualization.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Frame`, `Trajectory`,
//!   `OrderTimeSeries`), the pure order mathematics (bond vectors, the order
//!   tensor and its eigen-decomposition), colormaps, and I/O (the `FrameSource`
//!   abstraction, a multi-frame BGF adapter and CSV export).
//!
//! - **[`engine`]: The Logic Core.** Configuration builders, the error taxonomy,
//!   progress reporting, and the per-frame tasks, which run on the rayon pool
//!   when the `parallel` feature is enabled.
//!
//! - **[`workflows`]: The Public API.** Complete procedures such as computing
//!   the order time series of a trajectory or coloring one frame by
//!   misalignment.

pub mod core;
pub mod engine;
pub mod workflows;
