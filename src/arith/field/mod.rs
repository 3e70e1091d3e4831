use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand_core::RngCore;

use crate::BackendError;

#[cfg(feature = "blst")]
mod blst_bls12_381;
#[cfg(feature = "blst")]
pub use blst_bls12_381::Fr;

#[cfg(feature = "ark_bn254")]
mod ark_bn254;
#[cfg(feature = "ark_bn254")]
pub use ark_bn254::Fr;

/// Field element abstraction for scalar field operations.
///
/// This trait abstracts over the scalar field Fr of the elliptic curve. All
/// arithmetic is modular and values are always kept in canonical form.
///
/// # Type Parameters
///
/// - `Repr`: Byte representation type for serialization. Encodings are
///   fixed-width and big-endian on every backend.
///
/// # Example
///
/// ```rust
/// use rand::thread_rng;
/// use kzg_commit::{FieldElement, Fr};
///
/// let mut rng = thread_rng();
/// let a = Fr::random(&mut rng);
///
/// // Field operations
/// let one = Fr::one();
/// let inv = FieldElement::invert(&a).expect("non-zero element");
/// assert_eq!(a * inv, one);
///
/// // Serialization
/// let bytes = a.to_repr();
/// let recovered = Fr::from_repr(&bytes).expect("valid repr");
/// assert_eq!(a, recovered);
/// ```
pub trait FieldElement:
    Clone
    + Copy
    + Send
    + Sync
    + Debug
    + PartialEq
    + Eq
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
{
    /// Byte representation type (e.g., 32-byte vector for both supported scalar fields).
    type Repr: AsRef<[u8]> + AsMut<[u8]> + Default + Debug + Send + Sync + Clone + 'static;

    /// Returns the additive identity (zero) element.
    fn zero() -> Self;

    /// Returns the multiplicative identity (one) element.
    fn one() -> Self;

    /// Generates a uniformly random field element using the provided RNG.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;

    /// Computes the multiplicative inverse, returning `None` for zero.
    fn invert(&self) -> Option<Self>;

    /// Converts a `u64` into the field.
    fn from_u64(n: u64) -> Self;

    /// Serializes this field element to its canonical big-endian bytes.
    fn to_repr(&self) -> Self::Repr;

    /// Deserializes a field element from its byte representation.
    ///
    /// Returns an error if the representation has the wrong length or is not
    /// reduced modulo the field order.
    fn from_repr(repr: &Self::Repr) -> Result<Self, BackendError>;
}

/// Maps a signed integer into the field; negative values become `p - |n|`.
pub fn scalar_from_i64<F: FieldElement>(n: i64) -> F {
    let magnitude = F::from_u64(n.unsigned_abs());
    if n < 0 { -magnitude } else { magnitude }
}

/// Renders a scalar for humans: decimal when it fits in 128 bits, otherwise
/// `0x`-prefixed big-endian hex.
pub fn display_scalar<F: FieldElement>(value: &F) -> String {
    let repr = value.to_repr();
    let bytes = repr.as_ref();
    let split = bytes.len().saturating_sub(16);
    if bytes[..split].iter().all(|b| *b == 0) {
        let low = bytes[split..]
            .iter()
            .fold(0u128, |acc, b| (acc << 8) | u128::from(*b));
        low.to_string()
    } else {
        format!("0x{}", hex::encode(bytes))
    }
}
