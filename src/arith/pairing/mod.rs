use std::fmt::Debug;

#[cfg(feature = "blst")]
mod blst_bls12_381;
#[cfg(feature = "blst")]
pub use blst_bls12_381::PairingEngine;

#[cfg(feature = "ark_bn254")]
mod ark_bn254;
#[cfg(feature = "ark_bn254")]
pub use ark_bn254::PairingEngine;

use crate::{BackendError, BackendId, CurveId, CurvePoint, FieldElement, TargetGroup};

/// Main backend trait that ties together all cryptographic operations.
///
/// The compiled backend exposes it as [`PairingEngine`]; the commitment scheme
/// is generic over it.
///
/// # Type Parameters
///
/// - `Scalar`: The scalar field type (Fr)
/// - `G1`: The first elliptic curve group
/// - `G2`: The second elliptic curve group
/// - `Target`: The pairing target group (GT)
///
/// # Example
///
/// ```rust
/// use kzg_commit::{CurvePoint, PairingBackend, PairingEngine};
///
/// fn generator_pairing<B: PairingBackend>() -> B::Target {
///     // Compute pairing: e(G1, G2) -> GT
///     B::pairing(&B::G1::generator(), &B::G2::generator())
/// }
///
/// let gt = generator_pairing::<PairingEngine>();
/// println!("{:?}", gt);
/// ```
pub trait PairingBackend: Send + Sync + Debug + Sized + 'static {
    /// Backend implementation identifier.
    const BACKEND: BackendId;
    /// Curve identifier.
    const CURVE: CurveId;

    /// Scalar field type (Fr).
    type Scalar: FieldElement;
    /// First curve group (G1).
    type G1: CurvePoint<Self::Scalar>;
    /// Second curve group (G2).
    type G2: CurvePoint<Self::Scalar>;
    /// Pairing target group (GT).
    type Target: TargetGroup;

    /// Computes the bilinear pairing: `e(g1, g2) -> GT`.
    ///
    /// The pairing satisfies bilinearity: `e(a*P, b*Q) = e(P, Q)^(ab)`.
    fn pairing(g1: &Self::G1, g2: &Self::G2) -> Self::Target;

    /// Computes a product of pairings: `∏ e(g1[i], g2[i])`.
    ///
    /// This shares one final exponentiation across all terms.
    /// Returns an error if the input arrays have different lengths.
    fn multi_pairing(g1: &[Self::G1], g2: &[Self::G2]) -> Result<Self::Target, BackendError>;
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn bilinearity<B: PairingBackend>() {
        let mut rng = StdRng::seed_from_u64(21);
        let a = B::Scalar::random(&mut rng);
        let b = B::Scalar::random(&mut rng);
        let g = B::G1::generator();
        let h = B::G2::generator();

        let lhs = B::pairing(&g.mul_scalar(&a), &h.mul_scalar(&b));
        let rhs = B::pairing(&g.mul_scalar(&(a * b)), &h);
        assert_eq!(lhs, rhs);

        let p = g.mul_scalar(&a);
        let q = g.mul_scalar(&b);
        let split = B::pairing(&p, &h).combine(&B::pairing(&q, &h));
        assert_eq!(B::pairing(&p.add(&q), &h), split);

        assert_ne!(B::pairing(&g, &h), B::Target::identity());
    }

    fn multi_pairing_matches_product<B: PairingBackend>() {
        let mut rng = StdRng::seed_from_u64(22);
        let g1s: Vec<B::G1> = (0..3)
            .map(|_| B::G1::generator().mul_scalar(&B::Scalar::random(&mut rng)))
            .collect();
        let g2s: Vec<B::G2> = (0..3)
            .map(|_| B::G2::generator().mul_scalar(&B::Scalar::random(&mut rng)))
            .collect();
        let expected = g1s
            .iter()
            .zip(g2s.iter())
            .fold(B::Target::identity(), |acc, (p, q)| acc.combine(&B::pairing(p, q)));
        let product = B::multi_pairing(&g1s, &g2s).expect("multi pairing");
        assert_eq!(product, expected);

        // e(P, Q) * e(-P, Q) cancels
        let cancel = B::multi_pairing(&[g1s[0], g1s[0].negate()], &[g2s[0], g2s[0]])
            .expect("multi pairing");
        assert_eq!(cancel, B::Target::identity());

        assert!(B::multi_pairing(&g1s, &g2s[..2]).is_err());
    }

    #[test]
    fn pairing_is_bilinear() {
        bilinearity::<PairingEngine>();
    }

    #[test]
    fn multi_pairing_is_product_of_pairings() {
        multi_pairing_matches_product::<PairingEngine>();
    }
}
