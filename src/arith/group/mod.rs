use std::fmt::Debug;

use crate::{BackendError, FieldElement};

#[cfg(feature = "blst")]
mod blst_bls12_381;
#[cfg(feature = "blst")]
pub use blst_bls12_381::{G1, G2, Gt};

#[cfg(feature = "ark_bn254")]
mod ark_bn254;
#[cfg(feature = "ark_bn254")]
pub use ark_bn254::{G1, G2, Gt};

/// Elliptic curve point abstraction for the G1 and G2 groups.
///
/// Points are kept in projective coordinates and serialize to the backend's
/// fixed-width compressed affine encoding.
///
/// # Example
///
/// ```rust
/// use rand::thread_rng;
/// use kzg_commit::{CurvePoint, FieldElement, Fr, G1};
///
/// fn cancel<P: CurvePoint<Fr>>(scalar: &Fr) -> bool {
///     let point = P::generator().mul_scalar(scalar);
///     let doubled = point.add(&point);
///     doubled.sub(&point) == point && point.add(&point.negate()).is_identity()
/// }
///
/// let mut rng = thread_rng();
/// assert!(cancel::<G1>(&Fr::random(&mut rng)));
/// ```
pub trait CurvePoint<F: FieldElement>:
    Clone + Copy + Send + Sync + Debug + PartialEq + Eq + 'static
{
    /// Length in bytes of the compressed encoding.
    const COMPRESSED_SIZE: usize;

    /// Returns the point at infinity (identity element).
    fn identity() -> Self;

    /// Returns the standard generator for this group.
    fn generator() -> Self;

    /// Checks if this point is the identity element.
    fn is_identity(&self) -> bool;

    /// Performs elliptic curve point addition.
    fn add(&self, other: &Self) -> Self;

    /// Performs elliptic curve point subtraction.
    fn sub(&self, other: &Self) -> Self;

    /// Returns the additive inverse of this point.
    fn negate(&self) -> Self;

    /// Performs scalar multiplication: returns `scalar * self`.
    fn mul_scalar(&self, scalar: &F) -> Self;

    /// Serializes the point to its compressed affine encoding.
    fn to_repr(&self) -> Vec<u8>;

    /// Deserializes and validates a compressed point.
    fn from_repr(bytes: &[u8]) -> Result<Self, BackendError>;

    /// Computes `∑ scalars[i] * points[i]`.
    ///
    /// The default is the parallel tree reduction in [`crate::parallel_msm`];
    /// backends override it with their native multi-exponentiation.
    fn multi_scalar_multiplication(points: &[Self], scalars: &[F]) -> Result<Self, BackendError> {
        crate::parallel_msm(points, scalars)
    }
}

/// Pairing target group (GT) abstraction.
///
/// The group is written additively to match both backends: `combine` is the
/// group law and `identity` its neutral element.
pub trait TargetGroup: Clone + Copy + Send + Sync + Debug + PartialEq + Eq + 'static {
    /// Returns the identity element.
    fn identity() -> Self;

    /// Combines two target group elements with the group law.
    fn combine(&self, other: &Self) -> Self;
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::Fr;

    fn distributivity<F: FieldElement, P: CurvePoint<F>>() {
        let mut rng = StdRng::seed_from_u64(3);
        let a = F::random(&mut rng);
        let b = F::random(&mut rng);
        let g = P::generator();
        assert_eq!(g.mul_scalar(&(a + b)), g.mul_scalar(&a).add(&g.mul_scalar(&b)));
        assert_eq!(g.mul_scalar(&(a * b)), g.mul_scalar(&a).mul_scalar(&b));
    }

    fn identity_laws<F: FieldElement, P: CurvePoint<F>>() {
        assert!(P::identity().is_identity());
        assert!(!P::generator().is_identity());
        assert!(P::generator().mul_scalar(&F::zero()).is_identity());
        assert!(P::generator().sub(&P::generator()).is_identity());
        let g = P::generator();
        assert!(g.add(&g.negate()).is_identity());
        assert_eq!(g.add(&P::identity()), g);
    }

    fn encoding_roundtrip<F: FieldElement, P: CurvePoint<F>>() {
        let mut rng = StdRng::seed_from_u64(4);
        let p = P::generator().mul_scalar(&F::random(&mut rng));
        let bytes = p.to_repr();
        assert_eq!(bytes.len(), P::COMPRESSED_SIZE);
        assert_eq!(P::from_repr(&bytes).expect("decode point"), p);

        let id = P::identity().to_repr();
        assert_eq!(id.len(), P::COMPRESSED_SIZE);
        assert!(P::from_repr(&id).expect("decode identity").is_identity());
    }

    fn encoding_rejects_garbage<F: FieldElement, P: CurvePoint<F>>() {
        assert!(P::from_repr(&[0u8; 3]).is_err());
        assert!(P::from_repr(&vec![0xffu8; P::COMPRESSED_SIZE]).is_err());
    }

    #[test]
    fn scalar_multiplication_distributes() {
        distributivity::<Fr, G1>();
        distributivity::<Fr, G2>();
    }

    #[test]
    fn identity_behaviour() {
        identity_laws::<Fr, G1>();
        identity_laws::<Fr, G2>();
    }

    #[test]
    fn compressed_encoding_roundtrips() {
        encoding_roundtrip::<Fr, G1>();
        encoding_roundtrip::<Fr, G2>();
    }

    #[test]
    fn compressed_encoding_rejects_garbage() {
        encoding_rejects_garbage::<Fr, G1>();
        encoding_rejects_garbage::<Fr, G2>();
    }
}
