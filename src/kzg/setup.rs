use core::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rand_core::RngCore;
use tracing::{debug, instrument, warn};
use zeroize::{DefaultIsZeroes, Zeroize, ZeroizeOnDrop};

use crate::{CurvePoint, Error, FieldElement, PairingBackend, SetupParameters};

/// Public parameters of the scheme: powers of a secret `τ` in G1 and G2.
///
/// - `g1_powers = [g1, τ·g1, τ²·g1, …, τ^d·g1]` where `d` is the maximum degree
/// - `g2_powers = [g2, τ·g2]`
///
/// The setup is pure public data. `τ` only exists inside [`TrustedSetup::generate`]
/// and is wiped before that function returns; nothing here can recover it.
///
/// Single-party generation is for tests and demos. Production deployments
/// replace it with a multi-party ceremony that yields the same shape and load
/// the result through [`TrustedSetup::from_parts`].
pub struct TrustedSetup<B: PairingBackend> {
    g1_powers: Vec<B::G1>,
    g2_powers: Vec<B::G2>,
}

/// Field value with an all-zero default, so `zeroize` can wipe it.
#[derive(Clone, Copy)]
struct TauCell<F: FieldElement>(F);

impl<F: FieldElement> Default for TauCell<F> {
    fn default() -> Self {
        Self(F::zero())
    }
}

impl<F: FieldElement> DefaultIsZeroes for TauCell<F> {}

/// The toxic waste. Not `Clone`, no accessor outside this module, and wiped
/// through `zeroize` when dropped.
struct SecretScalar<F: FieldElement>(TauCell<F>);

impl<F: FieldElement> SecretScalar<F> {
    fn sample<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self(TauCell(F::random(rng)))
    }

    fn expose(&self) -> &F {
        &self.0.0
    }
}

impl<F: FieldElement> Zeroize for SecretScalar<F> {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl<F: FieldElement> Drop for SecretScalar<F> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<F: FieldElement> ZeroizeOnDrop for SecretScalar<F> {}

impl<B: PairingBackend> TrustedSetup<B> {
    /// Generates a setup supporting polynomials up to `max_degree`.
    ///
    /// `τ` is drawn from `rng`; pass a cryptographically secure generator in
    /// production and a seeded one in tests. The G1 powers are built
    /// sequentially, each from the previous one by a single scalar
    /// multiplication.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDegree`] if `max_degree + 1` overflows.
    #[instrument(level = "info", skip_all, fields(max_degree = max_degree))]
    pub fn generate<R: RngCore + ?Sized>(max_degree: usize, rng: &mut R) -> Result<Self, Error> {
        let len = max_degree.checked_add(1).ok_or_else(|| {
            Error::InvalidDegree(format!("maximum degree {max_degree} is too large"))
        })?;

        let tau = SecretScalar::<B::Scalar>::sample(rng);

        let mut g1_powers = Vec::with_capacity(len);
        let mut current = B::G1::generator();
        g1_powers.push(current);
        for _ in 0..max_degree {
            current = current.mul_scalar(tau.expose());
            g1_powers.push(current);
        }

        let g2 = B::G2::generator();
        let g2_powers = vec![g2, g2.mul_scalar(tau.expose())];

        drop(tau);
        debug!(g1_powers = g1_powers.len(), "trusted setup generated");

        Ok(Self {
            g1_powers,
            g2_powers,
        })
    }

    /// Deterministic setup derived from a 32-byte seed via ChaCha20.
    ///
    /// Anyone who knows the seed can recompute `τ` and forge proofs. Use this
    /// only for reproducible tests and demos.
    pub fn from_seed(max_degree: usize, seed: &[u8; 32]) -> Result<Self, Error> {
        let mut rng = ChaCha20Rng::from_seed(*seed);
        Self::generate(max_degree, &mut rng)
    }

    /// Generates a setup from validated [`SetupParameters`].
    ///
    /// The configured backend and curve must be the ones compiled into this
    /// build. When the parameters carry a seed it takes precedence over `rng`.
    pub fn from_parameters<R: RngCore + ?Sized>(
        params: &SetupParameters,
        rng: &mut R,
    ) -> Result<Self, Error> {
        params.validate()?;
        if params.backend.backend != B::BACKEND || params.backend.curve != B::CURVE {
            return Err(Error::InvalidConfig(format!(
                "parameters target {:?}/{:?} but this engine is {:?}/{:?}",
                params.backend.backend,
                params.backend.curve,
                B::BACKEND,
                B::CURVE
            )));
        }
        match &params.seed {
            Some(seed) => {
                warn!("generating trusted setup from a fixed seed; not suitable for production");
                Self::from_seed(params.max_degree, seed)
            }
            None => Self::generate(params.max_degree, rng),
        }
    }

    /// Rebuilds a setup from its public group elements, e.g. after
    /// deserialization or an external ceremony.
    ///
    /// Both sequences must be non-empty. A setup with a single G2 element can
    /// commit and prove but fails verification with [`Error::MalformedSetup`].
    pub fn from_parts(g1_powers: Vec<B::G1>, g2_powers: Vec<B::G2>) -> Result<Self, Error> {
        if g1_powers.is_empty() {
            return Err(Error::MalformedSetup("setup has no G1 powers".into()));
        }
        if g2_powers.is_empty() {
            return Err(Error::MalformedSetup("setup has no G2 powers".into()));
        }
        Ok(Self {
            g1_powers,
            g2_powers,
        })
    }

    /// Largest polynomial degree this setup can commit to.
    pub fn max_degree(&self) -> usize {
        self.g1_powers.len() - 1
    }

    /// `[τ^i·g1]` for `i` in `0..=max_degree`.
    pub fn g1_powers(&self) -> &[B::G1] {
        &self.g1_powers
    }

    /// `[g2, τ·g2]`.
    pub fn g2_powers(&self) -> &[B::G2] {
        &self.g2_powers
    }

    pub(crate) fn ensure_supported(&self, degree: usize) -> Result<(), Error> {
        if degree > self.max_degree() {
            Err(Error::DegreeExceedsSetup {
                degree,
                max: self.max_degree(),
            })
        } else {
            Ok(())
        }
    }
}

impl<B: PairingBackend> Clone for TrustedSetup<B> {
    fn clone(&self) -> Self {
        Self {
            g1_powers: self.g1_powers.clone(),
            g2_powers: self.g2_powers.clone(),
        }
    }
}

impl<B: PairingBackend> PartialEq for TrustedSetup<B> {
    fn eq(&self, other: &Self) -> bool {
        self.g1_powers == other.g1_powers && self.g2_powers == other.g2_powers
    }
}

impl<B: PairingBackend> fmt::Debug for TrustedSetup<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrustedSetup")
            .field("max_degree", &self.max_degree())
            .field("g2_powers", &self.g2_powers.len())
            .finish()
    }
}
