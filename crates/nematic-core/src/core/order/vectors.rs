use crate::core::models::frame::{Bond, Frame};
use nalgebra::{Point3, Vector3};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error(
        "Bond {bond_index} references particle {particle_index}, but the frame has {num_particles} particles"
    )]
    OutOfBounds {
        bond_index: usize,
        particle_index: usize,
        num_particles: usize,
    },
}

/// A bond vector anchored at the position of its first particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondSegment {
    pub start: Point3<f64>,
    pub vector: Vector3<f64>,
}

fn resolve<'a>(
    frame: &'a Frame,
    bond_index: usize,
    bond: &Bond,
) -> Result<(&'a Point3<f64>, &'a Point3<f64>), FrameError> {
    let lookup = |particle_index: usize| {
        frame
            .position(particle_index)
            .ok_or(FrameError::OutOfBounds {
                bond_index,
                particle_index,
                num_particles: frame.num_particles(),
            })
    };
    Ok((lookup(bond.i)?, lookup(bond.j)?))
}

/// Computes `position[j] - position[i]` for every bond, in connectivity order.
///
/// A frame without bonds yields an empty vector.
///
/// # Errors
///
/// Returns [`FrameError::OutOfBounds`] for the first bond naming a particle
/// index the frame does not have.
pub fn extract_bond_vectors(frame: &Frame) -> Result<Vec<Vector3<f64>>, FrameError> {
    frame
        .bonds()
        .iter()
        .enumerate()
        .map(|(bond_index, bond)| {
            let (start, end) = resolve(frame, bond_index, bond)?;
            Ok(end - start)
        })
        .collect()
}

/// Like [`extract_bond_vectors`], but keeps the start position of each bond
/// so the vectors can be drawn in place.
///
/// # Errors
///
/// Returns [`FrameError::OutOfBounds`] under the same conditions as
/// [`extract_bond_vectors`].
pub fn extract_bond_segments(frame: &Frame) -> Result<Vec<BondSegment>, FrameError> {
    frame
        .bonds()
        .iter()
        .enumerate()
        .map(|(bond_index, bond)| {
            let (start, end) = resolve(frame, bond_index, bond)?;
            Ok(BondSegment {
                start: *start,
                vector: end - start,
            })
        })
        .collect()
}
