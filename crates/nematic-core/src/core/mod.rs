//! # Core Module
//!
//! The stateless foundation of the library: data models, the order-parameter
//! mathematics, misalignment colorization, and file I/O.
//!
//! ## Architecture
//!
//! - **Data Representation** ([`models`]) - Frames, trajectories, and order results
//! - **Order Analysis** ([`order`]) - Bond vector extraction, order tensor, eigen-analysis
//! - **Visualization Support** ([`color`]) - Misalignment angles mapped onto colormaps
//! - **File I/O** ([`io`]) - Frame sources, trajectory formats, and CSV export
//!
//! ## Scientific Foundation
//!
//! The nematic order parameter `S` of a population of directions is the largest
//! eigenvalue of the traceless tensor `Q = <(3/2) u ⊗ u - (1/2) I>`, averaged over
//! unit vectors `u`. Its eigenvector is the director `n`, defined up to sign.
//! `S = 1` for perfect alignment and `S ≈ 0` for an isotropic population.

pub mod color;
pub mod io;
pub mod models;
pub mod order;
