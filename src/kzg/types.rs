use core::fmt;

use crate::{CurvePoint, PairingBackend, display_scalar};

/// A KZG commitment: one G1 element binding a polynomial under a setup.
pub struct Commitment<B: PairingBackend> {
    pub(crate) point: B::G1,
}

/// An evaluation proof: the commitment to `(p(x) - y) / (x - z)`.
pub struct Proof<B: PairingBackend> {
    pub(crate) point: B::G1,
}

macro_rules! g1_wrapper {
    ($name:ident) => {
        impl<B: PairingBackend> $name<B> {
            /// Wraps a raw G1 element.
            pub fn from_point(point: B::G1) -> Self {
                Self { point }
            }

            /// Returns the underlying G1 element.
            pub fn point(&self) -> &B::G1 {
                &self.point
            }

            /// Compressed encoding of the underlying G1 element.
            pub fn to_bytes(&self) -> Vec<u8> {
                self.point.to_repr()
            }

            /// Decodes and validates a compressed G1 element.
            pub fn from_bytes(bytes: &[u8]) -> Result<Self, crate::BackendError> {
                B::G1::from_repr(bytes).map(Self::from_point)
            }
        }

        impl<B: PairingBackend> Clone for $name<B> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<B: PairingBackend> Copy for $name<B> {}

        impl<B: PairingBackend> PartialEq for $name<B> {
            fn eq(&self, other: &Self) -> bool {
                self.point == other.point
            }
        }

        impl<B: PairingBackend> Eq for $name<B> {}

        impl<B: PairingBackend> fmt::Debug for $name<B> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name))
                    .field(&hex::encode(self.to_bytes()))
                    .finish()
            }
        }

        impl<B: PairingBackend> fmt::Display for $name<B> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "G1({})", hex::encode(self.to_bytes()))
            }
        }
    };
}

g1_wrapper!(Commitment);
g1_wrapper!(Proof);

/// Outcome of committing to a polynomial, opening it at one point and
/// checking the opening.
///
/// This is the structured result handed to callers: `{commitment, proof, z, y,
/// verified}`.
pub struct Opening<B: PairingBackend> {
    pub commitment: Commitment<B>,
    pub proof: Proof<B>,
    /// Evaluation point `z`.
    pub point: B::Scalar,
    /// Claimed value `y = p(z)`.
    pub value: B::Scalar,
    pub verified: bool,
}

impl<B: PairingBackend> Clone for Opening<B> {
    fn clone(&self) -> Self {
        Self {
            commitment: self.commitment,
            proof: self.proof,
            point: self.point,
            value: self.value,
            verified: self.verified,
        }
    }
}

impl<B: PairingBackend> fmt::Debug for Opening<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opening")
            .field("commitment", &self.commitment)
            .field("proof", &self.proof)
            .field("point", &self.point)
            .field("value", &self.value)
            .field("verified", &self.verified)
            .finish()
    }
}

impl<B: PairingBackend> fmt::Display for Opening<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Evaluation Point z: {}", display_scalar(&self.point))?;
        writeln!(f, "Expected y = p(z): {}", display_scalar(&self.value))?;
        writeln!(f, "Commitment: {}", self.commitment)?;
        writeln!(f, "Proof: {}", self.proof)?;
        write!(f, "Verification Passed? {}", self.verified)
    }
}
