use ark_bn254::Fr as ArkFr;
use ark_ff::{Field, One, UniformRand, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use rand_core::RngCore;

use crate::{BackendError, FieldElement};

pub type Fr = ArkFr;

const SCALAR_BYTES: usize = 32;

// Arkworks serializes little-endian; the trait contract is big-endian, so
// both directions reverse the byte order.
impl FieldElement for Fr {
    type Repr = Vec<u8>;

    fn zero() -> Self {
        <Fr as Zero>::zero()
    }

    fn one() -> Self {
        <Fr as One>::one()
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Fr::rand(rng)
    }

    fn invert(&self) -> Option<Self> {
        self.inverse()
    }

    fn from_u64(n: u64) -> Self {
        Fr::from(n)
    }

    fn to_repr(&self) -> Self::Repr {
        let mut bytes = Vec::with_capacity(SCALAR_BYTES);
        // Writing into a Vec cannot fail.
        self.serialize_compressed(&mut bytes)
            .expect("scalar serialization");
        bytes.reverse();
        bytes
    }

    fn from_repr(repr: &Self::Repr) -> Result<Self, BackendError> {
        if repr.len() != SCALAR_BYTES {
            return Err(BackendError::Serialization("invalid scalar length"));
        }
        let mut le = repr.clone();
        le.reverse();
        Self::deserialize_compressed(le.as_slice())
            .map_err(|_| BackendError::Serialization("invalid scalar bytes"))
    }
}
