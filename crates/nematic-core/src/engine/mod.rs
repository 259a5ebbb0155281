//! # Engine Module
//!
//! Orchestration layer between the pure order mathematics in [`crate::core`]
//! and the public entry points in [`crate::workflows`].
//!
//! - **Configuration** ([`config`]) - frame ranges and per-workflow settings, built
//!   through validating builders
//! - **Progress Monitoring** ([`progress`]) - callback-based progress events
//! - **Error Handling** ([`error`]) - the error taxonomy shared by all workflows,
//!   with frame and bond indices attached
//! - **Tasks** (`tasks`) - per-frame computations, run sequentially or on the
//!   rayon pool when the `parallel` feature is enabled

pub mod config;
pub mod error;
pub mod progress;
pub(crate) mod tasks;
