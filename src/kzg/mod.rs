mod scheme;
mod setup;
mod types;

pub use scheme::KZG;
pub use setup::TrustedSetup;
pub use types::{Commitment, Opening, Proof};

use core::fmt::Debug;

use rand_core::RngCore;

use crate::{Error, PairingBackend, Polynomial};

/// KZG polynomial commitment scheme interface.
///
/// This trait provides the core operations for Kate-Zaverucha-Goldberg (KZG)
/// commitments over a pairing backend.
///
/// # KZG Commitments
///
/// KZG commitments allow committing to a polynomial such that:
/// - The commitment is succinct (one G1 element regardless of degree)
/// - One can prove evaluations at specific points with one more G1 element
/// - The scheme is binding under the q-SDH assumption
///
/// # Example
///
/// ```rust
/// use rand::{SeedableRng, rngs::StdRng};
/// use kzg_commit::{
///     DensePolynomial, Error, FieldElement, KZG, PairingBackend, PairingEngine,
///     PolynomialCommitment,
/// };
///
/// fn round_trip<B: PairingBackend>() -> Result<bool, Error> {
///     let mut rng = StdRng::seed_from_u64(42);
///     let params = <KZG as PolynomialCommitment<B>>::setup(4, &mut rng)?;
///     let poly = DensePolynomial::<B::Scalar>::from_u64_coeffs(&[5, 1, 0, 1])?;
///     let z = B::Scalar::from_u64(3);
///
///     let commitment = <KZG as PolynomialCommitment<B>>::commit(&params, &poly)?;
///     let (y, proof) = <KZG as PolynomialCommitment<B>>::open(&params, &poly, &z)?;
///     assert_eq!(y, B::Scalar::from_u64(35));
///     <KZG as PolynomialCommitment<B>>::verify(&params, &commitment, &z, &y, &proof)
/// }
///
/// assert!(round_trip::<PairingEngine>().unwrap());
/// ```
pub trait PolynomialCommitment<B: PairingBackend>: Send + Sync + Debug + 'static {
    /// Commitment parameters (powers of tau).
    type Parameters: Clone + Send + Sync + Debug + 'static;

    /// Polynomial type used by this commitment scheme.
    type Polynomial: Polynomial<B::Scalar>;

    /// Performs trusted setup to generate commitment parameters.
    ///
    /// This generates `[τ^0, τ^1, ..., τ^max_degree]` in G1 and `[1, τ]` in G2.
    /// The secret `tau` is discarded before returning.
    fn setup<R: RngCore + ?Sized>(
        max_degree: usize,
        rng: &mut R,
    ) -> Result<Self::Parameters, Error>;

    /// Commits to a polynomial in G1.
    ///
    /// For polynomial `p(x) = ∑ c_i * x^i`, returns `∑ c_i * τ^i * G1`.
    /// Fails with [`Error::DegreeExceedsSetup`] when the polynomial is larger
    /// than the setup.
    fn commit(
        params: &Self::Parameters,
        polynomial: &Self::Polynomial,
    ) -> Result<crate::Commitment<B>, Error>;

    /// Proves that `polynomial(point) == value`.
    ///
    /// Fails with [`Error::EvaluationMismatch`] when the claim is false, so an
    /// honest prover never emits a proof for a wrong value.
    fn prove(
        params: &Self::Parameters,
        polynomial: &Self::Polynomial,
        point: &B::Scalar,
        value: &B::Scalar,
    ) -> Result<crate::Proof<B>, Error>;

    /// Evaluates the polynomial at `point` and proves the result.
    fn open(
        params: &Self::Parameters,
        polynomial: &Self::Polynomial,
        point: &B::Scalar,
    ) -> Result<(B::Scalar, crate::Proof<B>), Error>;

    /// Verifies a commitment opening.
    ///
    /// Returns `Ok(false)` for a proof that does not check out and an error
    /// only when the parameters cannot support verification.
    fn verify(
        params: &Self::Parameters,
        commitment: &crate::Commitment<B>,
        point: &B::Scalar,
        value: &B::Scalar,
        proof: &crate::Proof<B>,
    ) -> Result<bool, Error>;
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use crate::{
        Commitment, CurvePoint, DensePolynomial, Error, FieldElement, Fr, KZG, PairingBackend,
        PairingEngine, Polynomial, PolynomialCommitment, TrustedSetup,
    };

    type Setup = TrustedSetup<PairingEngine>;

    fn fr(n: u64) -> Fr {
        Fr::from_u64(n)
    }

    fn is_identity<G: CurvePoint<Fr>>(point: &G) -> bool {
        point.is_identity()
    }

    fn setup(max_degree: usize, seed: u64) -> Setup {
        let mut rng = StdRng::seed_from_u64(seed);
        KZG::setup(max_degree, &mut rng).expect("setup")
    }

    fn kzg_commitment_helper<B: PairingBackend>(rng: &mut StdRng) {
        let params = <KZG as PolynomialCommitment<B>>::setup(8, rng).expect("setup");
        let poly = DensePolynomial::<B::Scalar>::random(4, rng);
        let commitment = <KZG as PolynomialCommitment<B>>::commit(&params, &poly).expect("commit");
        assert!(
            !commitment.point().is_identity(),
            "commitment should not be identity for random polynomial"
        );
    }

    #[test]
    fn kzg_commitment() {
        kzg_commitment_helper::<PairingEngine>(&mut StdRng::seed_from_u64(1));
    }

    #[test]
    fn honest_openings_verify() {
        let mut rng = StdRng::seed_from_u64(2);
        let params = setup(16, 3);
        for degree in [0usize, 1, 3, 16] {
            let poly = DensePolynomial::<Fr>::random(degree, &mut rng);
            let commitment = KZG::commit(&params, &poly).expect("commit");
            for _ in 0..3 {
                let z = Fr::random(&mut rng);
                let (y, proof) = KZG::open(&params, &poly, &z).expect("open");
                assert_eq!(y, poly.evaluate(&z));
                assert!(KZG::verify(&params, &commitment, &z, &y, &proof).expect("verify"));
            }
        }
    }

    #[test]
    fn small_polynomial_scenario() {
        // p(x) = 5 + x + x^3, p(3) = 35
        let params = setup(8, 4);
        let poly = DensePolynomial::<Fr>::from_u64_coeffs(&[5, 1, 0, 1]).expect("poly");
        let commitment = KZG::commit(&params, &poly).expect("commit");
        let proof = KZG::prove(&params, &poly, &fr(3), &fr(35)).expect("prove");

        assert!(KZG::verify(&params, &commitment, &fr(3), &fr(35), &proof).expect("verify"));
        assert!(!KZG::verify(&params, &commitment, &fr(3), &fr(36), &proof).expect("verify"));
        assert!(matches!(
            KZG::prove(&params, &poly, &fr(3), &fr(36)),
            Err(Error::EvaluationMismatch)
        ));
    }

    #[test]
    fn wrong_claims_are_rejected() {
        let mut rng = StdRng::seed_from_u64(5);
        let params = setup(6, 6);
        let poly = DensePolynomial::<Fr>::random(6, &mut rng);
        let other = DensePolynomial::<Fr>::random(6, &mut rng);
        let commitment = KZG::commit(&params, &poly).expect("commit");
        let z = Fr::random(&mut rng);
        let (y, proof) = KZG::open(&params, &poly, &z).expect("open");

        // wrong value
        let wrong_y = y + Fr::one();
        assert!(!KZG::verify(&params, &commitment, &z, &wrong_y, &proof).expect("verify"));

        // wrong point
        let wrong_z = z + Fr::one();
        assert!(!KZG::verify(&params, &commitment, &wrong_z, &y, &proof).expect("verify"));

        // proof for another polynomial at the same point
        let (other_y, other_proof) = KZG::open(&params, &other, &z).expect("open");
        assert!(!KZG::verify(&params, &commitment, &z, &y, &other_proof).expect("verify"));
        assert!(!KZG::verify(&params, &commitment, &z, &other_y, &other_proof).expect("verify"));
    }

    #[test]
    fn distinct_polynomials_have_distinct_commitments() {
        let mut rng = StdRng::seed_from_u64(7);
        let params = setup(8, 8);
        for _ in 0..64 {
            let a = DensePolynomial::<Fr>::random(8, &mut rng);
            let b = DensePolynomial::<Fr>::random(8, &mut rng);
            assert_ne!(a, b);
            assert_ne!(
                KZG::commit(&params, &a).expect("commit"),
                KZG::commit(&params, &b).expect("commit")
            );
        }

        let base = DensePolynomial::<Fr>::from_u64_coeffs(&[1, 2, 3, 4]).expect("poly");
        let base_commitment = KZG::commit(&params, &base).expect("commit");
        for i in 0..4 {
            let mut coeffs = base.coeffs().to_vec();
            coeffs[i] += Fr::one();
            let perturbed = DensePolynomial::new(coeffs).expect("poly");
            assert_ne!(KZG::commit(&params, &perturbed).expect("commit"), base_commitment);
        }
    }

    #[test]
    fn commitments_are_deterministic() {
        let params = setup(5, 9);
        let poly = DensePolynomial::<Fr>::from_u64_coeffs(&[7, 0, 2, 9]).expect("poly");
        let first = KZG::commit(&params, &poly).expect("commit");
        let second = KZG::commit(&params.clone(), &poly.clone()).expect("commit");
        assert_eq!(first, second);

        let (_, p1) = KZG::open(&params, &poly, &fr(11)).expect("open");
        let (_, p2) = KZG::open(&params, &poly, &fr(11)).expect("open");
        assert_eq!(p1, p2);
    }

    #[test]
    fn degree_boundary() {
        let mut rng = StdRng::seed_from_u64(10);
        let params = setup(3, 11);

        let at_max = DensePolynomial::<Fr>::random(3, &mut rng);
        let commitment = KZG::commit(&params, &at_max).expect("commit at max degree");
        let (y, proof) = KZG::open(&params, &at_max, &fr(2)).expect("open");
        assert!(KZG::verify(&params, &commitment, &fr(2), &y, &proof).expect("verify"));

        let too_large = DensePolynomial::<Fr>::random(4, &mut rng);
        assert!(matches!(
            KZG::commit(&params, &too_large),
            Err(Error::DegreeExceedsSetup { degree: 4, max: 3 })
        ));
        assert!(matches!(
            KZG::open(&params, &too_large, &fr(2)),
            Err(Error::DegreeExceedsSetup { degree: 4, max: 3 })
        ));
    }

    #[test]
    fn constant_polynomials_open_with_identity_proof() {
        let params = setup(2, 12);
        let poly = DensePolynomial::<Fr>::from_u64_coeffs(&[42]).expect("poly");
        let commitment = KZG::commit(&params, &poly).expect("commit");
        let (y, proof) = KZG::open(&params, &poly, &fr(99)).expect("open");
        assert_eq!(y, fr(42));
        assert!(is_identity(proof.point()));
        assert!(KZG::verify(&params, &commitment, &fr(99), &y, &proof).expect("verify"));

        let zero = KZG::commit(&params, &DensePolynomial::zero()).expect("commit");
        assert!(is_identity(zero.point()));
    }

    #[test]
    fn concurrent_commits_agree() {
        let mut rng = StdRng::seed_from_u64(13);
        let params = setup(32, 14);
        let polys: Vec<DensePolynomial<Fr>> = (0..8)
            .map(|_| DensePolynomial::random(32, &mut rng))
            .collect();
        let expected: Vec<Commitment<PairingEngine>> = polys
            .iter()
            .map(|p| KZG::commit(&params, p).expect("commit"))
            .collect();

        let params = &params;
        let concurrent: Vec<Commitment<PairingEngine>> = std::thread::scope(|scope| {
            let handles: Vec<_> = polys
                .iter()
                .map(|p| scope.spawn(move || KZG::commit(params, p).expect("commit")))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("thread"))
                .collect()
        });
        assert_eq!(concurrent, expected);
    }

    #[test]
    fn verification_needs_two_g2_powers() {
        let full = setup(2, 15);
        let truncated =
            Setup::from_parts(full.g1_powers().to_vec(), full.g2_powers()[..1].to_vec())
                .expect("commit-only setup");
        let poly = DensePolynomial::<Fr>::from_u64_coeffs(&[1, 2, 3]).expect("poly");
        let commitment = KZG::commit(&truncated, &poly).expect("commit");
        let (y, proof) = KZG::open(&truncated, &poly, &fr(5)).expect("open");
        assert!(matches!(
            KZG::verify(&truncated, &commitment, &fr(5), &y, &proof),
            Err(Error::MalformedSetup(_))
        ));
    }

    #[test]
    fn open_and_verify_reports_the_opening() {
        let params = setup(4, 16);
        let poly = DensePolynomial::<Fr>::from_u64_coeffs(&[5, 1, 0, 1]).expect("poly");
        let opening = KZG::open_and_verify(&params, &poly, &fr(3)).expect("opening");
        assert!(opening.verified);
        assert_eq!(opening.point, fr(3));
        assert_eq!(opening.value, fr(35));
        assert_eq!(opening.commitment, KZG::commit(&params, &poly).expect("commit"));

        let rendered = opening.to_string();
        assert!(rendered.contains("Evaluation Point z: 3"));
        assert!(rendered.contains("Expected y = p(z): 35"));
        assert!(rendered.contains("Verification Passed? true"));
    }
}
