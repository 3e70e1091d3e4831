//! Configuration types for trusted-setup generation.
//!
//! This module identifies the compiled curve backend and carries the
//! parameters used to generate a [`TrustedSetup`](crate::TrustedSetup),
//! validated from untrusted (signed) input such as command-line flags.
//!
//! # Example
//!
//! ```rust
//! use kzg_commit::{BackendConfig, SetupParameters};
//!
//! // Setup supporting polynomials up to degree 16 on the compiled backend
//! let params = SetupParameters::new(16, BackendConfig::active(), None).expect("valid params");
//! assert_eq!(params.max_degree, 16);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{BackendError, Error};

/// Supported pairing-friendly elliptic curves.
///
/// - **BLS12-381**: ~128 bits of security. Provided by the blstrs backend.
/// - **BN254**: ~100 bits of security. Provided by the Arkworks backend.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum CurveId {
    /// BN254 curve (~100-bit security)
    Bn254,
    /// BLS12-381 curve (~128-bit security, recommended)
    Bls12_381,
}

/// Cryptographic backend implementations.
///
/// Exactly one backend is compiled in, selected via Cargo features:
/// - `blst` (default): blstrs with BLS12-381
/// - `ark_bn254`: Arkworks with BN254
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum BackendId {
    /// Arkworks backend (pure Rust)
    Arkworks,
    /// blstrs backend (optimized assembly, BLS12-381 only)
    Blst,
}

/// Backend and curve configuration.
///
/// | Backend    | BLS12-381 | BN254 |
/// |------------|-----------|-------|
/// | Arkworks   | ✗         | ✓     |
/// | blst       | ✓         | ✗     |
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// The cryptographic backend to use
    pub backend: BackendId,
    /// The pairing-friendly curve to use
    pub curve: CurveId,
}

impl BackendConfig {
    /// Creates a new backend configuration.
    pub fn new(backend: BackendId, curve: CurveId) -> Self {
        Self { backend, curve }
    }

    /// Returns the configuration of the backend compiled into this build.
    pub fn active() -> Self {
        #[cfg(feature = "blst")]
        {
            Self::new(BackendId::Blst, CurveId::Bls12_381)
        }
        #[cfg(not(feature = "blst"))]
        {
            Self::new(BackendId::Arkworks, CurveId::Bn254)
        }
    }

    /// Validates that this backend/curve combination exists and that its
    /// feature flag is enabled at compile time.
    ///
    /// ```rust
    /// use kzg_commit::{BackendConfig, BackendId, CurveId};
    ///
    /// let config = BackendConfig::new(BackendId::Blst, CurveId::Bn254);
    /// // blst does not implement BN254
    /// assert!(config.ensure_supported().is_err());
    /// ```
    pub fn ensure_supported(&self) -> Result<(), BackendError> {
        match (self.backend, self.curve) {
            (BackendId::Arkworks, CurveId::Bn254) => {
                if cfg!(feature = "ark_bn254") {
                    Ok(())
                } else {
                    Err(BackendError::UnsupportedFeature(
                        "compile with `ark_bn254` feature to use Arkworks BN254",
                    ))
                }
            }
            (BackendId::Blst, CurveId::Bls12_381) => {
                if cfg!(feature = "blst") {
                    Ok(())
                } else {
                    Err(BackendError::UnsupportedFeature(
                        "compile with `blst` feature to use the blstrs backend",
                    ))
                }
            }
            (BackendId::Arkworks, CurveId::Bls12_381) => Err(BackendError::UnsupportedCurve(
                "bls12-381 is served by the blstrs backend",
            )),
            (BackendId::Blst, CurveId::Bn254) => Err(BackendError::UnsupportedCurve(
                "bn254 is not supported by the blstrs backend",
            )),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::active()
    }
}

/// Trusted-setup generation parameters.
///
/// # Fields
///
/// - `max_degree`: Largest polynomial degree the setup will support.
/// - `backend`: Backend and curve configuration.
/// - `seed`: Optional fixed seed for the secret. Only for tests and demos:
///   anyone holding the seed can recompute the secret and forge proofs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SetupParameters {
    /// Maximum supported polynomial degree (inclusive)
    pub max_degree: usize,
    /// Backend and curve configuration
    pub backend: BackendConfig,
    /// Optional deterministic seed (insecure, testing only)
    pub seed: Option<[u8; 32]>,
}

impl SetupParameters {
    /// Creates and validates setup parameters.
    ///
    /// The degree is taken as a signed value because it usually arrives from
    /// user input; negative values fail with [`Error::InvalidDegree`].
    ///
    /// ```rust
    /// use kzg_commit::{BackendConfig, Error, SetupParameters};
    ///
    /// let err = SetupParameters::new(-1, BackendConfig::active(), None).unwrap_err();
    /// assert!(matches!(err, Error::InvalidDegree(_)));
    /// ```
    pub fn new(
        max_degree: i64,
        backend: BackendConfig,
        seed: Option<[u8; 32]>,
    ) -> Result<Self, Error> {
        let max_degree = usize::try_from(max_degree).map_err(|_| {
            Error::InvalidDegree(format!(
                "maximum degree must be non-negative, got {max_degree}"
            ))
        })?;
        let params = Self {
            max_degree,
            backend,
            seed,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validates the parameters.
    ///
    /// This checks that the backend/curve combination is compiled in and that
    /// the number of powers (`max_degree + 1`) is representable.
    pub fn validate(&self) -> Result<(), Error> {
        self.backend.ensure_supported()?;
        if self.max_degree == usize::MAX {
            return Err(Error::InvalidDegree(
                "maximum degree leaves no room for the constant term".into(),
            ));
        }
        Ok(())
    }
}
