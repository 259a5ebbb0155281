use super::eigen::{self, Eigenpair, NematicOrder};
use nalgebra::{Matrix3, Vector3};
use thiserror::Error;

/// Vectors whose norm does not exceed this value have no usable direction.
pub const MIN_VECTOR_NORM: f64 = 1e-12;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TensorError {
    #[error("Order tensor is undefined for an empty set of vectors")]
    Empty,
    #[error("Vector {bond_index} has zero length or non-finite components; its direction is undefined")]
    DegenerateVector { bond_index: usize },
}

/// The symmetric, traceless nematic order tensor of a set of directions.
///
/// For unit vectors `u_k`, `k = 1..N`:
///
/// ```text
/// Q = (1/N) * Σ_k [ (3/2) (u_k ⊗ u_k) - (1/2) I ]
/// ```
///
/// Input vectors are normalized before use, so only their directions matter,
/// and `u` and `-u` contribute identically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderTensor {
    matrix: Matrix3<f64>,
    num_vectors: usize,
}

impl OrderTensor {
    /// Builds the order tensor of `vectors`.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::Empty`] when `vectors` is empty, and
    /// [`TensorError::DegenerateVector`] for the first vector that cannot be
    /// normalized.
    pub fn from_vectors(vectors: &[Vector3<f64>]) -> Result<Self, TensorError> {
        if vectors.is_empty() {
            return Err(TensorError::Empty);
        }

        let mut outer_sum = Matrix3::<f64>::zeros();
        for (bond_index, vector) in vectors.iter().enumerate() {
            let unit = normalize(vector).ok_or(TensorError::DegenerateVector { bond_index })?;
            outer_sum += unit * unit.transpose();
        }

        let n = vectors.len() as f64;
        let matrix = outer_sum * (1.5 / n) - Matrix3::identity() * 0.5;

        Ok(Self {
            matrix,
            num_vectors: vectors.len(),
        })
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    /// Number of vectors the tensor was averaged over.
    pub fn num_vectors(&self) -> usize {
        self.num_vectors
    }

    pub fn trace(&self) -> f64 {
        self.matrix.trace()
    }

    /// All three eigenpairs, sorted by eigenvalue in descending order.
    pub fn eigenpairs(&self) -> [Eigenpair; 3] {
        eigen::decompose(&self.matrix)
    }

    /// The largest eigenvalue (order parameter) and its eigenvector (director).
    pub fn nematic_order(&self) -> NematicOrder {
        eigen::dominant(&self.matrix)
    }
}

fn normalize(vector: &Vector3<f64>) -> Option<Vector3<f64>> {
    if !vector.norm().is_finite() {
        return None;
    }
    vector.try_normalize(MIN_VECTOR_NORM)
}
