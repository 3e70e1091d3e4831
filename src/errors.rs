//! Error types for the crate.
//!
//! This module defines low-level backend errors returned by the concrete
//! curve backends (blstrs, Arkworks) as well as the high-level `Error` type
//! returned by setup, commitment, proving and verification.
//!
//! The errors are implemented with `thiserror` so they are easy to convert
//! and debug in higher-level code.
//!
//! # Examples
//!
//! ```rust
//! use kzg_commit::{DensePolynomial, Error, Fr};
//!
//! let err = DensePolynomial::<Fr>::new(Vec::new()).unwrap_err();
//! assert!(matches!(err, Error::InvalidPolynomial));
//! ```

use thiserror::Error;

/// Errors bubbled up from backend implementations (blstrs, Arkworks).
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("unsupported curve: {0}")]
    UnsupportedCurve(&'static str),
    #[error("unsupported backend feature: {0}")]
    UnsupportedFeature(&'static str),
    #[error("serialization failure: {0}")]
    Serialization(&'static str),
    #[error("math error: {0}")]
    Math(&'static str),
}

/// High-level errors returned by the commitment API.
///
/// Every variant describes a precondition violated by the inputs of a single
/// call. None of them leave a setup or polynomial in a modified state.
#[derive(Debug, Error)]
pub enum Error {
    /// A polynomial was built from an empty coefficient list.
    #[error("invalid polynomial: coefficient list is empty")]
    InvalidPolynomial,
    /// A maximum degree outside the representable range was requested.
    #[error("invalid maximum degree: {0}")]
    InvalidDegree(String),
    /// The polynomial does not fit in the setup.
    #[error("polynomial degree {degree} exceeds setup maximum degree {max}")]
    DegreeExceedsSetup { degree: usize, max: usize },
    /// The claimed value is not the polynomial's evaluation at the point.
    #[error("claimed evaluation does not match the polynomial at the given point")]
    EvaluationMismatch,
    #[error("malformed setup: {0}")]
    MalformedSetup(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}
