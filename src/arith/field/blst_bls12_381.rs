//! blst-backed BLS12-381 scalar field.
//!
//! Implements [`FieldElement`] for `blstrs::Scalar` when the `blst` feature is
//! enabled. Encodings are the 32-byte big-endian form produced by
//! `Scalar::to_bytes_be`.

use blstrs::Scalar;
use ff::Field;
use rand_core::RngCore;

use crate::{BackendError, FieldElement};

pub type Fr = Scalar;

const SCALAR_BYTES: usize = 32;

impl FieldElement for Scalar {
    type Repr = Vec<u8>;

    fn zero() -> Self {
        Scalar::ZERO
    }

    fn one() -> Self {
        Scalar::ONE
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        <Scalar as Field>::random(rng)
    }

    fn invert(&self) -> Option<Self> {
        Field::invert(self).into()
    }

    fn from_u64(n: u64) -> Self {
        Scalar::from(n)
    }

    fn to_repr(&self) -> Self::Repr {
        self.to_bytes_be().to_vec()
    }

    fn from_repr(repr: &Self::Repr) -> Result<Self, BackendError> {
        if repr.len() != SCALAR_BYTES {
            return Err(BackendError::Serialization("invalid scalar length"));
        }
        let mut bytes = [0u8; SCALAR_BYTES];
        bytes.copy_from_slice(repr);
        Option::<Scalar>::from(Scalar::from_bytes_be(&bytes))
            .ok_or(BackendError::Serialization("invalid scalar bytes"))
    }
}
