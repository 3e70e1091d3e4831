//! Shared test infrastructure for commitment integration tests.

use rand::{SeedableRng, rngs::StdRng};

pub use kzg_commit::*;

/// Setup size used by most scenarios.
pub const DEFAULT_MAX_DEGREE: usize = 16;

/// A seeded setup and rng for one scenario.
pub struct KzgTestFixture {
    pub setup: TrustedSetup<PairingEngine>,
    pub rng: StdRng,
}

impl KzgTestFixture {
    /// Creates a fixture with [`DEFAULT_MAX_DEGREE`].
    pub fn new(seed: u64) -> Self {
        Self::with_degree(DEFAULT_MAX_DEGREE, seed)
    }

    /// Creates a fixture with a custom maximum degree.
    pub fn with_degree(max_degree: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let setup = KZG::setup(max_degree, &mut rng).expect("failed to generate setup");
        Self { setup, rng }
    }

    pub fn random_polynomial(&mut self, degree: usize) -> DensePolynomial<Fr> {
        DensePolynomial::random(degree, &mut self.rng)
    }
}

pub fn fr(n: u64) -> Fr {
    Fr::from_u64(n)
}
