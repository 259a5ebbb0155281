//! Presentation-only mapping of bond misalignment onto colors.
//!
//! Nothing here feeds back into the order analysis; the colorizer reads bond
//! segments and a director and produces a fresh [`misalignment::MisalignmentMap`].

pub mod colormap;
pub mod misalignment;
