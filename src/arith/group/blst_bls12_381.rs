//! blst-backed BLS12-381 groups.
//!
//! `G1` and `G2` are the blstrs projective types; `Gt` is the blstrs target
//! group. Compressed encodings follow the ZCash BLS12-381 format (48 bytes for
//! G1, 96 bytes for G2).

use blstrs::{G1Affine, G1Projective, G2Affine, G2Projective, Gt as BlstGt, Scalar};
use group::{Curve, Group};
use tracing::instrument;

use crate::{BackendError, CurvePoint, TargetGroup};

pub type G1 = G1Projective;
pub type G2 = G2Projective;
pub type Gt = BlstGt;

const G1_COMPRESSED: usize = 48;
const G2_COMPRESSED: usize = 96;

impl CurvePoint<Scalar> for G1 {
    const COMPRESSED_SIZE: usize = G1_COMPRESSED;

    fn identity() -> Self {
        <G1Projective as Group>::identity()
    }

    fn generator() -> Self {
        <G1Projective as Group>::generator()
    }

    fn is_identity(&self) -> bool {
        <Self as Group>::is_identity(self).into()
    }

    fn add(&self, other: &Self) -> Self {
        *self + *other
    }

    fn sub(&self, other: &Self) -> Self {
        *self - *other
    }

    fn negate(&self) -> Self {
        -*self
    }

    fn mul_scalar(&self, scalar: &Scalar) -> Self {
        *self * *scalar
    }

    fn to_repr(&self) -> Vec<u8> {
        <Self as Curve>::to_affine(self).to_compressed().to_vec()
    }

    fn from_repr(bytes: &[u8]) -> Result<Self, BackendError> {
        let bytes: [u8; G1_COMPRESSED] = bytes
            .try_into()
            .map_err(|_| BackendError::Serialization("invalid G1 length"))?;
        Option::<G1Affine>::from(G1Affine::from_compressed(&bytes))
            .map(G1Projective::from)
            .ok_or(BackendError::Serialization("invalid G1 bytes"))
    }

    #[instrument(level = "trace", skip_all, fields(len = points.len()))]
    fn multi_scalar_multiplication(points: &[Self], scalars: &[Scalar]) -> Result<Self, BackendError> {
        if points.len() != scalars.len() {
            return Err(BackendError::Math("points and scalars must have the same length"));
        }
        if points.is_empty() {
            return Ok(<G1Projective as Group>::identity());
        }
        Ok(G1Projective::multi_exp(points, scalars))
    }
}

impl CurvePoint<Scalar> for G2 {
    const COMPRESSED_SIZE: usize = G2_COMPRESSED;

    fn identity() -> Self {
        <G2Projective as Group>::identity()
    }

    fn generator() -> Self {
        <G2Projective as Group>::generator()
    }

    fn is_identity(&self) -> bool {
        <Self as Group>::is_identity(self).into()
    }

    fn add(&self, other: &Self) -> Self {
        *self + *other
    }

    fn sub(&self, other: &Self) -> Self {
        *self - *other
    }

    fn negate(&self) -> Self {
        -*self
    }

    fn mul_scalar(&self, scalar: &Scalar) -> Self {
        *self * *scalar
    }

    fn to_repr(&self) -> Vec<u8> {
        <Self as Curve>::to_affine(self).to_compressed().to_vec()
    }

    fn from_repr(bytes: &[u8]) -> Result<Self, BackendError> {
        let bytes: [u8; G2_COMPRESSED] = bytes
            .try_into()
            .map_err(|_| BackendError::Serialization("invalid G2 length"))?;
        Option::<G2Affine>::from(G2Affine::from_compressed(&bytes))
            .map(G2Projective::from)
            .ok_or(BackendError::Serialization("invalid G2 bytes"))
    }

    #[instrument(level = "trace", skip_all, fields(len = points.len()))]
    fn multi_scalar_multiplication(points: &[Self], scalars: &[Scalar]) -> Result<Self, BackendError> {
        if points.len() != scalars.len() {
            return Err(BackendError::Math("points and scalars must have the same length"));
        }
        if points.is_empty() {
            return Ok(<G2Projective as Group>::identity());
        }
        Ok(G2Projective::multi_exp(points, scalars))
    }
}

impl TargetGroup for Gt {
    fn identity() -> Self {
        <Gt as Group>::identity()
    }

    fn combine(&self, other: &Self) -> Self {
        *self + *other
    }
}
