use nalgebra::{Matrix3, SymmetricEigen, Unit, Vector3};

/// An eigenvalue with its normalized eigenvector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eigenpair {
    pub value: f64,
    pub vector: Unit<Vector3<f64>>,
}

/// Order parameter and director of a set of directions.
///
/// The director is only defined up to sign (`n` and `-n` describe the same
/// axis); compare directors with [`NematicOrder::is_parallel_to`] or through
/// `|n · m|`, never component-wise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NematicOrder {
    pub order: f64,
    pub director: Unit<Vector3<f64>>,
}

impl NematicOrder {
    /// Whether the director and `axis` span the same line, within `tolerance`
    /// on `1 - |cos θ|`.
    pub fn is_parallel_to(&self, axis: &Vector3<f64>, tolerance: f64) -> bool {
        let Some(axis) = axis.try_normalize(f64::EPSILON) else {
            return false;
        };
        1.0 - self.director.dot(&axis).abs() <= tolerance
    }
}

/// Decomposes a symmetric 3×3 matrix into eigenpairs sorted by eigenvalue,
/// largest first.
///
/// Equal eigenvalues keep the solver's axis order, so the result is
/// deterministic for a given input. Each eigenvector is oriented so that its
/// largest-magnitude component is positive; this makes output reproducible but
/// carries no physical meaning.
pub fn decompose(matrix: &Matrix3<f64>) -> [Eigenpair; 3] {
    let eigen = SymmetricEigen::new(*matrix);

    let mut order = [0usize, 1, 2];
    order.sort_by(|&a, &b| {
        eigen.eigenvalues[b]
            .partial_cmp(&eigen.eigenvalues[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    order.map(|column| Eigenpair {
        value: eigen.eigenvalues[column],
        vector: canonical_orientation(eigen.eigenvectors.column(column).into_owned()),
    })
}

/// The dominant eigenpair of a symmetric order tensor as `(order, director)`.
pub fn dominant(matrix: &Matrix3<f64>) -> NematicOrder {
    let [largest, ..] = decompose(matrix);
    NematicOrder {
        order: largest.value,
        director: largest.vector,
    }
}

fn canonical_orientation(vector: Vector3<f64>) -> Unit<Vector3<f64>> {
    let mut pivot = 0;
    for axis in 1..3 {
        if vector[axis].abs() > vector[pivot].abs() {
            pivot = axis;
        }
    }
    let oriented = if vector[pivot] < 0.0 { -vector } else { vector };
    Unit::new_normalize(oriented)
}
