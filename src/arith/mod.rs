//! Cryptographic backend abstractions and implementations.
//!
//! This module provides trait abstractions for the primitives the commitment
//! scheme consumes, with one concrete backend compiled in via Cargo features.
//!
//! # Architecture
//!
//! - **[`field`]**: Scalar field operations (Fr) - addition, multiplication, inversion
//! - **[`group`]**: Elliptic curve point operations (G1, G2, GT) - addition, scalar multiplication
//! - **[`pairing`]**: Bilinear pairing operations - `e(G1, G2) -> GT`
//! - **[`msm`]**: Multi-scalar multiplication as a parallel tree reduction
//! - **[`poly`]**: Dense univariate polynomials - evaluation, division by a linear factor
//!
//! # Backend Support
//!
//! | Feature | Backend | Curve | Status |
//! |---------|---------|-------|--------|
//! | `blst` (default) | blstrs | BLS12-381 | Stable |
//! | `ark_bn254` | Arkworks | BN254 | Stable |
//!
//! # Example
//!
//! ```rust
//! use rand::thread_rng;
//! use kzg_commit::{CurvePoint, FieldElement, PairingBackend, PairingEngine};
//!
//! fn pair_random<B: PairingBackend>() -> B::Target {
//!     let mut rng = thread_rng();
//!     let scalar = B::Scalar::random(&mut rng);
//!     let point = B::G1::generator().mul_scalar(&scalar);
//!     B::pairing(&point, &B::G2::generator())
//! }
//!
//! println!("{:?}", pair_random::<PairingEngine>());
//! ```

mod field;
pub use field::*;

mod group;
pub use group::*;

mod pairing;
pub use pairing::*;

mod msm;
pub use msm::*;

mod poly;
pub use poly::*;
