use blstrs::{Bls12, G1Affine, G2Affine, G2Prepared};
use group::Curve;
use group::prime::PrimeCurveAffine;
use pairing::{MillerLoopResult, MultiMillerLoop};

use crate::{BackendError, BackendId, CurveId, Fr, G1, G2, Gt, PairingBackend};

/// Pairing engine implementation for the blst BLS12-381 backend.
#[derive(Debug)]
pub struct PairingEngine;

/// blst-backed `PairingBackend` implementation for BLS12-381.
impl PairingBackend for PairingEngine {
    const BACKEND: BackendId = BackendId::Blst;
    const CURVE: CurveId = CurveId::Bls12_381;

    type Scalar = Fr;
    type G1 = G1;
    type G2 = G2;
    type Target = Gt;

    fn pairing(g1: &Self::G1, g2: &Self::G2) -> Self::Target {
        blstrs::pairing(&g1.to_affine(), &g2.to_affine())
    }

    fn multi_pairing(g1: &[Self::G1], g2: &[Self::G2]) -> Result<Self::Target, BackendError> {
        if g1.len() != g2.len() {
            return Err(BackendError::Math("pairing length mismatch"));
        }
        let mut g1_affine = vec![G1Affine::identity(); g1.len()];
        let mut g2_affine = vec![G2Affine::identity(); g2.len()];
        <G1 as Curve>::batch_normalize(g1, &mut g1_affine);
        <G2 as Curve>::batch_normalize(g2, &mut g2_affine);
        let g2_prepared: Vec<G2Prepared> =
            g2_affine.iter().map(|aff| G2Prepared::from(*aff)).collect();
        let terms: Vec<_> = g1_affine.iter().zip(g2_prepared.iter()).collect();
        let result = Bls12::multi_miller_loop(&terms).final_exponentiation();
        Ok(result)
    }
}
