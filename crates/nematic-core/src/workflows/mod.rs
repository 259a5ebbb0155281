//! # Workflows Module
//!
//! High-level entry points that tie the [`crate::engine`] and [`crate::core`]
//! layers together into complete analyses of a trajectory.
//!
//! - **Order Series** ([`order_series`]) - nematic order parameter and director
//!   for every frame of a strided frame range
//! - **Colorize** ([`colorize`]) - per-bond misalignment of a single frame,
//!   mapped onto a colormap for rendering
//!
//! Both workflows read frames through [`crate::core::io::traits::FrameSource`]
//! and never depend on a trajectory file format.

pub mod colorize;
pub mod order_series;
