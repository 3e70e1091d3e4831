//! Multi-scalar multiplication.
//!
//! `∑ sᵢ·Pᵢ` is computed as a rayon `reduce` over the pairwise products.
//! Group addition is associative and commutative, so the tree shape rayon
//! picks does not change the result and no accumulator is shared between
//! workers.

use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
use tracing::instrument;

use crate::{BackendError, CurvePoint, FieldElement};

/// Computes `∑ scalars[i] * points[i]` with a parallel tree reduction.
///
/// Returns the identity for empty input and an error when the slices differ
/// in length.
#[instrument(level = "trace", skip_all, fields(len = points.len()))]
pub fn parallel_msm<F, G>(points: &[G], scalars: &[F]) -> Result<G, BackendError>
where
    F: FieldElement,
    G: CurvePoint<F>,
{
    if points.len() != scalars.len() {
        return Err(BackendError::Math("points and scalars must have the same length"));
    }
    Ok(points
        .par_iter()
        .zip(scalars.par_iter())
        .map(|(point, scalar)| point.mul_scalar(scalar))
        .reduce(G::identity, |acc, term| acc.add(&term)))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{Fr, G1, G2};

    fn random_instance<G: CurvePoint<Fr>>(n: usize, seed: u64) -> (Vec<G>, Vec<Fr>) {
        let mut rng = StdRng::seed_from_u64(seed);
        let points = (0..n)
            .map(|_| G::generator().mul_scalar(&Fr::random(&mut rng)))
            .collect();
        let scalars = (0..n).map(|_| Fr::random(&mut rng)).collect();
        (points, scalars)
    }

    fn sequential<G: CurvePoint<Fr>>(points: &[G], scalars: &[Fr]) -> G {
        points
            .iter()
            .zip(scalars)
            .fold(G::identity(), |acc, (p, s)| acc.add(&p.mul_scalar(s)))
    }

    fn agrees_with_backend<G: CurvePoint<Fr>>(n: usize, seed: u64) {
        let (points, scalars) = random_instance::<G>(n, seed);
        let tree = parallel_msm(&points, &scalars).expect("tree msm");
        let native = G::multi_scalar_multiplication(&points, &scalars).expect("native msm");
        assert_eq!(tree, sequential(&points, &scalars));
        assert_eq!(tree, native);
    }

    #[test]
    fn tree_reduction_matches_backend_msm() {
        for (n, seed) in [(1, 1), (2, 2), (17, 3), (64, 4)] {
            agrees_with_backend::<G1>(n, seed);
        }
        agrees_with_backend::<G2>(9, 5);
    }

    #[test]
    fn empty_input_is_identity() {
        let points: Vec<G1> = Vec::new();
        let scalars: Vec<Fr> = Vec::new();
        let sum = parallel_msm(&points, &scalars).expect("empty msm");
        assert_eq!(sum, <G1 as CurvePoint<Fr>>::identity());
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let (points, scalars) = random_instance::<G1>(4, 6);
        assert!(parallel_msm(&points, &scalars[..3]).is_err());
        assert!(G1::multi_scalar_multiplication(&points[..2], &scalars).is_err());
    }
}
