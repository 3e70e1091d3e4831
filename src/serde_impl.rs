//! Serde serialization support for commitment types.
//!
//! This module provides serde `Serialize` and `Deserialize` implementations
//! for commitments, proofs and trusted setups so they can be stored or sent
//! between a prover and a verifier.
//!
//! # Serialization Strategy
//!
//! - **Curve Points** (G1, G2): compressed encodings via `to_repr()`
//! - **Human-readable formats** (JSON): encodings are lowercase hex strings
//! - **Binary formats**: encodings are raw byte sequences
//! - **Trusted setups**: a struct of two arrays, rebuilt through
//!   [`TrustedSetup::from_parts`] so an empty array is rejected
//!
//! Every decoded point is checked to be on the curve and in the prime-order
//! subgroup before it is accepted.
//!
//! # Example
//!
//! ```rust
//! use kzg_commit::{Commitment, DensePolynomial, KZG, PairingEngine, PolynomialCommitment, TrustedSetup};
//!
//! let setup = TrustedSetup::<PairingEngine>::from_seed(4, &[7u8; 32]).unwrap();
//! let poly = DensePolynomial::from_u64_coeffs(&[5, 1, 0, 1]).unwrap();
//! let commitment = KZG::commit(&setup, &poly).unwrap();
//!
//! let json = serde_json::to_string(&commitment).unwrap();
//! let back: Commitment<PairingEngine> = serde_json::from_str(&json).unwrap();
//! assert_eq!(commitment, back);
//! ```

use serde::de;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    Commitment, CurvePoint, FieldElement, Opening, PairingBackend, Proof, TrustedSetup,
    display_scalar,
};

/// Byte string that is hex in human-readable formats and raw bytes otherwise.
struct Encoded(Vec<u8>);

impl Serialize for Encoded {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&hex::encode(&self.0))
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Encoded {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let text = String::deserialize(deserializer)?;
            hex::decode(text.trim_start_matches("0x"))
                .map(Encoded)
                .map_err(de::Error::custom)
        } else {
            Vec::<u8>::deserialize(deserializer).map(Encoded)
        }
    }
}

fn curve_point_from_bytes<C, F, E>(bytes: &[u8]) -> Result<C, E>
where
    C: CurvePoint<F>,
    F: FieldElement,
    E: de::Error,
{
    C::from_repr(bytes).map_err(E::custom)
}

fn encode_all<C, F>(points: &[C]) -> Vec<Encoded>
where
    C: CurvePoint<F>,
    F: FieldElement,
{
    points.iter().map(|p| Encoded(p.to_repr())).collect()
}

fn decode_all<C, F, E>(encoded: &[Encoded]) -> Result<Vec<C>, E>
where
    C: CurvePoint<F>,
    F: FieldElement,
    E: de::Error,
{
    encoded
        .iter()
        .map(|bytes| curve_point_from_bytes::<C, F, E>(&bytes.0))
        .collect()
}

impl<B: PairingBackend> Serialize for Commitment<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Encoded(self.to_bytes()).serialize(serializer)
    }
}

impl<'de, B: PairingBackend> Deserialize<'de> for Commitment<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = Encoded::deserialize(deserializer)?;
        curve_point_from_bytes::<B::G1, B::Scalar, D::Error>(&bytes.0).map(Commitment::from_point)
    }
}

impl<B: PairingBackend> Serialize for Proof<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Encoded(self.to_bytes()).serialize(serializer)
    }
}

impl<'de, B: PairingBackend> Deserialize<'de> for Proof<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = Encoded::deserialize(deserializer)?;
        curve_point_from_bytes::<B::G1, B::Scalar, D::Error>(&bytes.0).map(Proof::from_point)
    }
}

// Implement Serialize and Deserialize for TrustedSetup
impl<B: PairingBackend> Serialize for TrustedSetup<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("TrustedSetup", 2)?;
        state.serialize_field("g1_powers", &encode_all(self.g1_powers()))?;
        state.serialize_field("g2_powers", &encode_all(self.g2_powers()))?;
        state.end()
    }
}

impl<'de, B: PairingBackend> Deserialize<'de> for TrustedSetup<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct TrustedSetupHelper {
            g1_powers: Vec<Encoded>,
            g2_powers: Vec<Encoded>,
        }

        let helper = TrustedSetupHelper::deserialize(deserializer)?;
        let g1_powers = decode_all::<B::G1, B::Scalar, D::Error>(&helper.g1_powers)?;
        let g2_powers = decode_all::<B::G2, B::Scalar, D::Error>(&helper.g2_powers)?;
        TrustedSetup::from_parts(g1_powers, g2_powers).map_err(de::Error::custom)
    }
}

// Scalars are written the way they are displayed: decimal when small, hex
// otherwise. Binary formats get the fixed-width big-endian encoding.
impl<B: PairingBackend> Serialize for Opening<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let human = serializer.is_human_readable();
        let mut state = serializer.serialize_struct("Opening", 5)?;
        if human {
            state.serialize_field("z", &display_scalar(&self.point))?;
            state.serialize_field("y", &display_scalar(&self.value))?;
        } else {
            state.serialize_field("z", &Encoded(self.point.to_repr().as_ref().to_vec()))?;
            state.serialize_field("y", &Encoded(self.value.to_repr().as_ref().to_vec()))?;
        }
        state.serialize_field("commitment", &self.commitment)?;
        state.serialize_field("proof", &self.proof)?;
        state.serialize_field("verified", &self.verified)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::{DensePolynomial, Fr, KZG, PairingEngine, PolynomialCommitment};

    type Setup = TrustedSetup<PairingEngine>;

    fn fixture() -> (Setup, Commitment<PairingEngine>, Proof<PairingEngine>) {
        let setup = Setup::from_seed(4, &[5u8; 32]).expect("setup");
        let poly = DensePolynomial::from_u64_coeffs(&[5, 1, 0, 1]).expect("poly");
        let commitment = KZG::commit(&setup, &poly).expect("commit");
        let (_, proof) = KZG::open(&setup, &poly, &Fr::from_u64(3)).expect("open");
        (setup, commitment, proof)
    }

    #[test]
    fn commitment_and_proof_are_hex_in_json() {
        let (_, commitment, proof) = fixture();
        let json = serde_json::to_value(commitment).expect("serialize");
        assert_eq!(json, Value::String(hex::encode(commitment.to_bytes())));

        let text = serde_json::to_string(&proof).expect("serialize");
        let back: Proof<PairingEngine> = serde_json::from_str(&text).expect("deserialize");
        assert_eq!(back, proof);
    }

    #[test]
    fn setup_survives_json() {
        let (setup, commitment, proof) = fixture();
        let json = serde_json::to_string(&setup).expect("serialize");
        let back: Setup = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, setup);
        assert!(
            KZG::verify(&back, &commitment, &Fr::from_u64(3), &Fr::from_u64(35), &proof)
                .expect("verify")
        );
    }

    #[test]
    fn empty_setup_arrays_are_rejected() {
        let json = r#"{"g1_powers": [], "g2_powers": []}"#;
        assert!(serde_json::from_str::<Setup>(json).is_err());
    }

    #[test]
    fn garbage_points_are_rejected() {
        let json = format!("\"{}\"", "ab".repeat(48));
        assert!(serde_json::from_str::<Commitment<PairingEngine>>(&json).is_err());
        assert!(serde_json::from_str::<Commitment<PairingEngine>>("\"not hex\"").is_err());
    }

    #[test]
    fn opening_renders_small_scalars_in_decimal() {
        let (setup, _, _) = fixture();
        let poly = DensePolynomial::from_u64_coeffs(&[5, 1, 0, 1]).expect("poly");
        let opening = KZG::open_and_verify(&setup, &poly, &Fr::from_u64(3)).expect("opening");
        let json = serde_json::to_value(&opening).expect("serialize");
        assert_eq!(json["z"], "3");
        assert_eq!(json["y"], "35");
        assert_eq!(json["verified"], true);
        assert_eq!(json["commitment"], hex::encode(opening.commitment.to_bytes()));
    }
}
