//! Polynomial operations and abstractions.
//!
//! This module provides the univariate polynomial type committed to by the
//! KZG scheme, together with the two operations the prover needs: evaluation
//! and exact division by a linear factor `(x - z)`.
//!
//! # Polynomial Representation
//!
//! Polynomials are represented in **coefficient form** with coefficients in ascending order:
//! - `p(x) = c_0 + c_1*x + c_2*x^2 + ... + c_n*x^n`
//! - Stored as `[c_0, c_1, c_2, ..., c_n]`
//!
//! Trailing zero coefficients are trimmed at construction so that
//! [`Polynomial::degree`] is canonical. The zero polynomial is stored as `[0]`
//! and has degree 0. All arithmetic happens in the scalar field.
//!
//! # Example
//!
//! ```rust
//! use kzg_commit::{DensePolynomial, FieldElement, Fr, Polynomial};
//!
//! // p(x) = 5 + x + x^3
//! let poly = DensePolynomial::<Fr>::from_u64_coeffs(&[5, 1, 0, 1]).expect("non-empty");
//! assert_eq!(poly.degree(), 3);
//! assert_eq!(poly.evaluate(&Fr::from_u64(3)), Fr::from_u64(35));
//!
//! // p(x) - p(3) = (x - 3) * q(x)
//! let (quotient, remainder) = poly.divide_by_linear(&Fr::from_u64(3));
//! assert_eq!(remainder, Fr::from_u64(35));
//! assert_eq!(quotient.degree(), 2);
//! ```

use std::fmt::{self, Debug};

use rand_core::RngCore;

use crate::{Error, FieldElement, display_scalar};

/// Polynomial interface for univariate polynomials.
pub trait Polynomial<F: FieldElement>: Clone + Send + Sync + Debug + 'static {
    /// Returns the degree of this polynomial.
    fn degree(&self) -> usize;

    /// Returns the coefficients in ascending order (constant term first).
    fn coeffs(&self) -> &[F];

    /// Evaluates the polynomial at the given point using Horner's method.
    fn evaluate(&self, point: &F) -> F;

    /// Divides by `(x - point)`, returning the quotient and the remainder.
    ///
    /// The remainder always equals `self.evaluate(point)`.
    fn divide_by_linear(&self, point: &F) -> (Self, F);
}

/// Dense coefficient-form polynomial over a scalar field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DensePolynomial<F: FieldElement> {
    coeffs: Vec<F>,
}

impl<F: FieldElement> DensePolynomial<F> {
    /// Create a dense polynomial from the provided coefficient vector.
    ///
    /// The coefficients are in ascending order (constant term first). Trailing
    /// zero coefficients are trimmed to keep the representation canonical.
    /// An empty vector fails with [`Error::InvalidPolynomial`].
    pub fn new(coeffs: Vec<F>) -> Result<Self, Error> {
        if coeffs.is_empty() {
            return Err(Error::InvalidPolynomial);
        }
        Ok(Self::from_nonempty(coeffs))
    }

    /// Builds a polynomial from small integer coefficients.
    pub fn from_u64_coeffs(coeffs: &[u64]) -> Result<Self, Error> {
        Self::new(coeffs.iter().copied().map(F::from_u64).collect())
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self {
            coeffs: vec![F::zero()],
        }
    }

    /// Samples a polynomial of exactly `degree` with uniformly random
    /// coefficients (the leading one is resampled until non-zero).
    pub fn random<R: RngCore + ?Sized>(degree: usize, rng: &mut R) -> Self {
        let mut coeffs: Vec<F> = (0..=degree).map(|_| F::random(rng)).collect();
        if degree > 0 {
            while coeffs[degree] == F::zero() {
                coeffs[degree] = F::random(rng);
            }
        }
        Self::from_nonempty(coeffs)
    }

    /// Returns `true` for the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| *c == F::zero())
    }

    /// Returns `p(x) - value` as a new polynomial.
    pub fn minus_constant(&self, value: &F) -> Self {
        let mut coeffs = self.coeffs.clone();
        coeffs[0] -= *value;
        Self::from_nonempty(coeffs)
    }

    fn from_nonempty(mut coeffs: Vec<F>) -> Self {
        while coeffs.len() > 1 && coeffs.last() == Some(&F::zero()) {
            coeffs.pop();
        }
        Self { coeffs }
    }
}

impl<F: FieldElement> Polynomial<F> for DensePolynomial<F> {
    fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    fn coeffs(&self) -> &[F] {
        &self.coeffs
    }

    fn evaluate(&self, point: &F) -> F {
        self.coeffs
            .iter()
            .rev()
            .fold(F::zero(), |acc, coeff| acc * *point + *coeff)
    }

    // Synthetic division: running Horner values from the top coefficient down
    // are the quotient coefficients, and the last one is p(point).
    fn divide_by_linear(&self, point: &F) -> (Self, F) {
        let mut quotient = Vec::with_capacity(self.coeffs.len() - 1);
        let mut acc = F::zero();
        for coeff in self.coeffs.iter().rev() {
            acc = acc * *point + *coeff;
            quotient.push(acc);
        }
        let remainder = quotient.pop().unwrap_or_else(F::zero);
        if quotient.is_empty() {
            return (Self::zero(), remainder);
        }
        quotient.reverse();
        (Self::from_nonempty(quotient), remainder)
    }
}

// Highest degree first, zero terms skipped: `8x^7 + 2x^6 + 5x + 5`.
impl<F: FieldElement> fmt::Display for DensePolynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let mut first = true;
        for (power, coeff) in self.coeffs.iter().enumerate().rev() {
            if *coeff == F::zero() {
                continue;
            }
            if !first {
                f.write_str(" + ")?;
            }
            first = false;
            if power == 0 || *coeff != F::one() {
                f.write_str(&display_scalar(coeff))?;
            }
            match power {
                0 => {}
                1 => f.write_str("x")?,
                _ => write!(f, "x^{power}")?,
            }
        }
        Ok(())
    }
}
