use rand_core::RngCore;
use tracing::{debug, instrument, trace};

use crate::{
    Commitment, CurvePoint, DensePolynomial, Error, FieldElement, Opening, PairingBackend,
    Polynomial, PolynomialCommitment, Proof, TargetGroup, TrustedSetup,
};

/// The KZG polynomial commitment scheme.
#[derive(Debug)]
pub struct KZG;

impl KZG {
    /// Commits to `polynomial`, opens it at `point` and verifies the opening.
    ///
    /// Returns the structured result `{commitment, proof, z, y, verified}`.
    #[instrument(level = "info", skip_all, fields(degree = polynomial.degree()))]
    pub fn open_and_verify<B: PairingBackend>(
        setup: &TrustedSetup<B>,
        polynomial: &DensePolynomial<B::Scalar>,
        point: &B::Scalar,
    ) -> Result<Opening<B>, Error> {
        let commitment = <Self as PolynomialCommitment<B>>::commit(setup, polynomial)?;
        let (value, proof) = <Self as PolynomialCommitment<B>>::open(setup, polynomial, point)?;
        let verified =
            <Self as PolynomialCommitment<B>>::verify(setup, &commitment, point, &value, &proof)?;
        Ok(Opening {
            commitment,
            proof,
            point: *point,
            value,
            verified,
        })
    }
}

impl<B: PairingBackend> PolynomialCommitment<B> for KZG {
    type Parameters = TrustedSetup<B>;
    type Polynomial = DensePolynomial<B::Scalar>;

    fn setup<R: RngCore + ?Sized>(
        max_degree: usize,
        rng: &mut R,
    ) -> Result<Self::Parameters, Error> {
        TrustedSetup::generate(max_degree, rng)
    }

    #[instrument(level = "debug", skip_all, fields(degree = polynomial.degree()))]
    fn commit(
        params: &Self::Parameters,
        polynomial: &Self::Polynomial,
    ) -> Result<Commitment<B>, Error> {
        let degree = polynomial.degree();
        params.ensure_supported(degree)?;
        let scalars = polynomial.coeffs();
        let point =
            B::G1::multi_scalar_multiplication(&params.g1_powers()[..scalars.len()], scalars)?;
        Ok(Commitment::from_point(point))
    }

    #[instrument(level = "debug", skip_all, fields(degree = polynomial.degree()))]
    fn prove(
        params: &Self::Parameters,
        polynomial: &Self::Polynomial,
        point: &B::Scalar,
        value: &B::Scalar,
    ) -> Result<Proof<B>, Error> {
        params.ensure_supported(polynomial.degree())?;
        if polynomial.evaluate(point) != *value {
            return Err(Error::EvaluationMismatch);
        }
        let (quotient, remainder) = polynomial.minus_constant(value).divide_by_linear(point);
        debug_assert!(remainder == <B::Scalar as FieldElement>::zero());
        trace!(quotient_degree = quotient.degree(), "quotient computed");
        let witness = <Self as PolynomialCommitment<B>>::commit(params, &quotient)?;
        Ok(Proof::from_point(witness.point))
    }

    fn open(
        params: &Self::Parameters,
        polynomial: &Self::Polynomial,
        point: &B::Scalar,
    ) -> Result<(B::Scalar, Proof<B>), Error> {
        let value = polynomial.evaluate(point);
        let proof = <Self as PolynomialCommitment<B>>::prove(params, polynomial, point, &value)?;
        Ok((value, proof))
    }

    // e(C - y·g1, g2) == e(π, τ·g2 - z·g2), checked as
    // e(C - y·g1, g2) · e(-π, τ·g2 - z·g2) == 1 with one final exponentiation.
    #[instrument(level = "debug", skip_all)]
    fn verify(
        params: &Self::Parameters,
        commitment: &Commitment<B>,
        point: &B::Scalar,
        value: &B::Scalar,
        proof: &Proof<B>,
    ) -> Result<bool, Error> {
        let g2_powers = params.g2_powers();
        if g2_powers.len() < 2 {
            return Err(Error::MalformedSetup(format!(
                "verification needs 2 G2 powers, setup has {}",
                g2_powers.len()
            )));
        }
        let g1 = params.g1_powers()[0];
        let (g2, tau_g2) = (g2_powers[0], g2_powers[1]);

        let lhs = commitment.point.sub(&g1.mul_scalar(value));
        let shifted_tau = tau_g2.sub(&g2.mul_scalar(point));
        let product = B::multi_pairing(&[lhs, proof.point.negate()], &[g2, shifted_tau])?;
        let ok = product == B::Target::identity();
        debug!(ok, "opening verified");
        Ok(ok)
    }
}
