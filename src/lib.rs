//! # kzg-commit: KZG Polynomial Commitments
//!
//! A library implementing the Kate-Zaverucha-Goldberg polynomial commitment
//! scheme over pairing-friendly elliptic curves.
//!
//! ## Overview
//!
//! A prover commits to a univariate polynomial `p` over the scalar field with a
//! single G1 element, then proves the value `y = p(z)` at any point `z` with one
//! more G1 element. A verifier checks the claim with a pairing equation using
//! only the commitment, `z`, `y`, the proof and two G2 elements of the public
//! setup. It never sees the polynomial.
//!
//! ## Architecture
//!
//! The crate is organized into several key modules:
//!
//! - **arith**: Core trait abstractions for field elements, curve points,
//!   pairings, multi-scalar multiplication and dense polynomials, with one
//!   concrete backend compiled in.
//!
//! - **kzg**: The [`TrustedSetup`], the [`PolynomialCommitment`] trait and
//!   its [`KZG`] implementation, along with [`Commitment`], [`Proof`] and
//!   [`Opening`].
//!
//! - **config**: Configuration types including [`SetupParameters`],
//!   [`BackendConfig`], [`CurveId`], and [`BackendId`].
//!
//! - **errors**: Error types for backend and commitment operations.
//!
//! ## Quick Example
//!
//! ```rust
//! use rand::{SeedableRng, rngs::StdRng};
//! use kzg_commit::{
//!     BackendConfig, DensePolynomial, FieldElement, Fr, KZG, PairingEngine,
//!     PolynomialCommitment, SetupParameters, TrustedSetup,
//! };
//!
//! # fn main() -> Result<(), kzg_commit::Error> {
//! // Trusted setup for polynomials up to degree 8
//! let params = SetupParameters::new(8, BackendConfig::active(), None)?;
//! let mut rng = StdRng::from_entropy();
//! let setup = TrustedSetup::<PairingEngine>::from_parameters(&params, &mut rng)?;
//!
//! // p(x) = 5 + x + x^3
//! let poly = DensePolynomial::<Fr>::from_u64_coeffs(&[5, 1, 0, 1])?;
//! let commitment = KZG::commit(&setup, &poly)?;
//!
//! // Prove p(3) = 35
//! let z = Fr::from_u64(3);
//! let (y, proof) = KZG::open(&setup, &poly, &z)?;
//! assert_eq!(y, Fr::from_u64(35));
//! assert!(KZG::verify(&setup, &commitment, &z, &y, &proof)?);
//!
//! // A false claim fails verification
//! assert!(!KZG::verify(&setup, &commitment, &z, &Fr::from_u64(36), &proof)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! Exactly one backend must be enabled:
//!
//! - **`blst`** (default): blstrs backend for BLS12-381
//! - **`ark_bn254`**: Arkworks backend for BN254
//!
//! ## Performance
//!
//! Commitments are multi-scalar multiplications. The backends use their native
//! MSM (Pippenger) and [`parallel_msm`] offers a Rayon tree reduction over any
//! [`CurvePoint`]. Setups, commitments and proofs are immutable values, so they
//! can be shared across threads without locking.
//!
//! ## Security Considerations
//!
//! - **Trusted Setup**: Whoever knows `τ` can forge proofs. [`TrustedSetup::generate`]
//!   wipes it before returning, but single-party generation is only suitable
//!   for tests and demos. Production setups come from a multi-party ceremony
//!   and are loaded with [`TrustedSetup::from_parts`].
//! - **Seeded Setups**: [`TrustedSetup::from_seed`] is reproducible by
//!   anyone with the seed.
//! - **Hiding**: Plain KZG commitments are binding but not hiding.

#[cfg(all(feature = "blst", feature = "ark_bn254"))]
compile_error!("features `blst` and `ark_bn254` are mutually exclusive");

#[cfg(not(any(feature = "blst", feature = "ark_bn254")))]
compile_error!("enable one backend feature: `blst` or `ark_bn254`");

mod arith;
mod config;
mod errors;
mod kzg;
mod serde_impl;

pub use arith::*;
pub use config::*;
pub use errors::*;
pub use kzg::*;
