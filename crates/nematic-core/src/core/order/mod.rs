//! Orientational order of bond populations.
//!
//! The analysis is a single pure pipeline: bond vectors are extracted from a
//! frame ([`vectors`]), reduced to the traceless order tensor ([`tensor`]), and
//! eigen-decomposed ([`eigen`]). The largest eigenvalue is the nematic order
//! parameter and its eigenvector is the director.

pub mod eigen;
pub mod tensor;
pub mod vectors;

use eigen::NematicOrder;
use nalgebra::Vector3;
use tensor::{OrderTensor, TensorError};

/// Order parameter and director of a set of (not necessarily unit) vectors.
///
/// # Errors
///
/// Returns [`TensorError::Empty`] for an empty set and
/// [`TensorError::DegenerateVector`] if any vector has no direction.
pub fn nematic_order(vectors: &[Vector3<f64>]) -> Result<NematicOrder, TensorError> {
    OrderTensor::from_vectors(vectors).map(|tensor| tensor.nematic_order())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Rotation3, Unit};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn random_vectors(rng: &mut StdRng, count: usize) -> Vec<Vector3<f64>> {
        (0..count)
            .map(|_| {
                Vector3::new(
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                )
            })
            .filter(|v| v.norm() > 1e-3)
            .collect()
    }

    fn partially_aligned_vectors(rng: &mut StdRng, count: usize) -> Vec<Vector3<f64>> {
        random_vectors(rng, count)
            .into_iter()
            .map(|v| Vector3::new(v.x * 0.2, v.y * 0.2, 1.0 + v.z * 0.1))
            .collect()
    }

    #[test]
    fn identical_vectors_have_order_one_along_bond_direction() {
        let direction = Vector3::new(1.0, -2.0, 0.5);
        for n in 1..=5 {
            let order = nematic_order(&vec![direction; n]).unwrap();
            assert!(f64_approx_equal(order.order, 1.0));
            assert!(order.is_parallel_to(&direction, TOLERANCE));
        }
    }

    #[test]
    fn three_parallel_x_vectors() {
        let order = nematic_order(&[Vector3::x(), Vector3::x(), Vector3::x()]).unwrap();
        assert!(f64_approx_equal(order.order, 1.0));
        assert!(f64_approx_equal(order.director.x.abs(), 1.0));
        assert!(f64_approx_equal(order.director.y, 0.0));
        assert!(f64_approx_equal(order.director.z, 0.0));
    }

    #[test]
    fn antiparallel_x_vectors_are_fully_ordered() {
        let order = nematic_order(&[Vector3::x(), -Vector3::x()]).unwrap();
        assert!(f64_approx_equal(order.order, 1.0));
        assert!(order.is_parallel_to(&Vector3::x(), TOLERANCE));
    }

    #[test]
    fn empty_set_has_no_order() {
        assert_eq!(nematic_order(&[]), Err(TensorError::Empty));
    }

    #[test]
    fn flipping_vector_signs_leaves_order_and_director_unchanged() {
        let mut rng = StdRng::seed_from_u64(7);
        let vectors = partially_aligned_vectors(&mut rng, 50);
        let flipped: Vec<_> = vectors
            .iter()
            .enumerate()
            .map(|(i, v)| if i % 3 == 0 { -v } else { *v })
            .collect();

        let original = nematic_order(&vectors).unwrap();
        let mirrored = nematic_order(&flipped).unwrap();

        assert!(f64_approx_equal(original.order, mirrored.order));
        assert!(original.is_parallel_to(&mirrored.director, 1e-9));
    }

    #[test]
    fn rotation_rotates_director_and_preserves_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let vectors = partially_aligned_vectors(&mut rng, 80);
        let axis = Unit::new_normalize(Vector3::new(0.3, -1.0, 0.7));
        let rotation = Rotation3::from_axis_angle(&axis, 1.1);

        let rotated: Vec<_> = vectors.iter().map(|v| rotation * v).collect();

        let original = nematic_order(&vectors).unwrap();
        let turned = nematic_order(&rotated).unwrap();

        assert!((original.order - turned.order).abs() < 1e-8);
        let expected_director = rotation * original.director.into_inner();
        assert!(turned.is_parallel_to(&expected_director, 1e-8));
    }

    #[test]
    fn order_of_random_directions_stays_in_physical_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let vectors = random_vectors(&mut rng, 500);
        let order = nematic_order(&vectors).unwrap();
        assert!(order.order >= -0.5 && order.order <= 1.0);
        assert!(order.order < 0.2);
        assert!(f64_approx_equal(order.director.norm(), 1.0));
    }
}
