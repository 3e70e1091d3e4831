//! Arkworks BN254 group operations.
//!
//! This module provides elliptic curve group operations for the BN254 (BN128) curve
//! using the Arkworks library. It implements the [`CurvePoint`] and [`TargetGroup`]
//! traits for G1, G2, and Gt (pairing target group).
//!
//! # Feature Flag
//!
//! This module is only available when the `ark_bn254` feature is enabled.
//!
//! # Groups
//!
//! - **G1**: First source group for pairings (points on E(Fq)), 32-byte compressed
//! - **G2**: Second source group for pairings (points on E'(Fq2)), 64-byte compressed
//! - **Gt**: Target group for pairings (elements in Fq12)

use ark_bn254::{Bn254, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::pairing::PairingOutput;
use ark_ec::{AffineRepr, CurveGroup, PrimeGroup, VariableBaseMSM};
use ark_ff::Zero;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use tracing::instrument;

use crate::{BackendError, CurvePoint, Fr, TargetGroup};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// G1 group element wrapper for the Arkworks BN254 backend.
pub struct G1(pub G1Projective);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// G2 group element wrapper for the Arkworks BN254 backend.
pub struct G2(pub G2Projective);

/// Target group type for the Arkworks BN254 backend.
pub type Gt = PairingOutput<Bn254>;

const G1_COMPRESSED: usize = 32;
const G2_COMPRESSED: usize = 64;

impl CurvePoint<Fr> for G1 {
    const COMPRESSED_SIZE: usize = G1_COMPRESSED;

    fn identity() -> Self {
        G1(G1Projective::zero())
    }

    fn generator() -> Self {
        G1(<G1Projective as PrimeGroup>::generator())
    }

    fn is_identity(&self) -> bool {
        self.0.is_zero()
    }

    fn add(&self, other: &Self) -> Self {
        G1(self.0 + other.0)
    }

    fn sub(&self, other: &Self) -> Self {
        G1(self.0 - other.0)
    }

    fn negate(&self) -> Self {
        G1(-self.0)
    }

    fn mul_scalar(&self, scalar: &Fr) -> Self {
        G1(self.0 * *scalar)
    }

    fn to_repr(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(G1_COMPRESSED);
        // Writing into a Vec cannot fail.
        self.0
            .into_affine()
            .serialize_compressed(&mut bytes)
            .expect("g1 serialization");
        bytes
    }

    fn from_repr(bytes: &[u8]) -> Result<Self, BackendError> {
        if bytes.len() != G1_COMPRESSED {
            return Err(BackendError::Serialization("invalid G1 length"));
        }
        G1Affine::deserialize_compressed(bytes)
            .map(|affine| G1(affine.into_group()))
            .map_err(|_| BackendError::Serialization("invalid G1 bytes"))
    }

    #[instrument(level = "trace", skip_all, fields(len = points.len()))]
    fn multi_scalar_multiplication(points: &[Self], scalars: &[Fr]) -> Result<Self, BackendError> {
        if points.len() != scalars.len() {
            return Err(BackendError::Math("points and scalars must have the same length"));
        }
        let projective: Vec<G1Projective> = points.iter().map(|p| p.0).collect();
        let affine_points = G1Projective::normalize_batch(&projective);
        G1Projective::msm(&affine_points, scalars)
            .map(G1)
            .map_err(|_| BackendError::Math("msm length mismatch"))
    }
}

impl CurvePoint<Fr> for G2 {
    const COMPRESSED_SIZE: usize = G2_COMPRESSED;

    fn identity() -> Self {
        G2(G2Projective::zero())
    }

    fn generator() -> Self {
        G2(<G2Projective as PrimeGroup>::generator())
    }

    fn is_identity(&self) -> bool {
        self.0.is_zero()
    }

    fn add(&self, other: &Self) -> Self {
        G2(self.0 + other.0)
    }

    fn sub(&self, other: &Self) -> Self {
        G2(self.0 - other.0)
    }

    fn negate(&self) -> Self {
        G2(-self.0)
    }

    fn mul_scalar(&self, scalar: &Fr) -> Self {
        G2(self.0 * *scalar)
    }

    fn to_repr(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(G2_COMPRESSED);
        // Writing into a Vec cannot fail.
        self.0
            .into_affine()
            .serialize_compressed(&mut bytes)
            .expect("g2 serialization");
        bytes
    }

    fn from_repr(bytes: &[u8]) -> Result<Self, BackendError> {
        if bytes.len() != G2_COMPRESSED {
            return Err(BackendError::Serialization("invalid G2 length"));
        }
        G2Affine::deserialize_compressed(bytes)
            .map(|affine| G2(affine.into_group()))
            .map_err(|_| BackendError::Serialization("invalid G2 bytes"))
    }

    #[instrument(level = "trace", skip_all, fields(len = points.len()))]
    fn multi_scalar_multiplication(points: &[Self], scalars: &[Fr]) -> Result<Self, BackendError> {
        if points.len() != scalars.len() {
            return Err(BackendError::Math("points and scalars must have the same length"));
        }
        let projective: Vec<G2Projective> = points.iter().map(|p| p.0).collect();
        let affine_points = G2Projective::normalize_batch(&projective);
        G2Projective::msm(&affine_points, scalars)
            .map(G2)
            .map_err(|_| BackendError::Math("msm length mismatch"))
    }
}

impl From<G1> for G1Projective {
    fn from(g1: G1) -> Self {
        g1.0
    }
}

impl From<G2> for G2Projective {
    fn from(g2: G2) -> Self {
        g2.0
    }
}

impl TargetGroup for Gt {
    fn identity() -> Self {
        <Gt as Zero>::zero()
    }

    fn combine(&self, other: &Self) -> Self {
        *self + *other
    }
}
