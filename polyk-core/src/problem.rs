use thiserror::Error;

use crate::{
    constraint::{ConstraintError, NonZero},
    verify::{DEFAULT_TOLERANCE, Verification},
};

/// A separable polynomial constraint of the form `Σ aᵢ·xᵢ^pᵢ = b`.
///
/// Each coefficient `aᵢ` is paired positionally with an exponent `pᵢ`.
/// Construction validates shape and domain once; afterwards the fields are
/// read-only and every invariant holds structurally:
///
/// - `coefficients` and `exponents` have the same length `n ≥ 1`,
/// - no coefficient or exponent is zero or NaN,
/// - the target is finite.
///
/// # Example
///
/// ```
/// use polyk_core::Problem;
///
/// let problem = Problem::new(vec![1.0, 1.0, 1.0], vec![2.0, 2.0, 2.0], 10.0)?;
///
/// assert_eq!(problem.num_terms(), 3);
/// assert_eq!(problem.constraint_value(&[3.0, 1.0, 0.0])?, 10.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    coefficients: Vec<f64>,
    exponents: Vec<f64>,
    target: f64,
}

/// Errors that can occur when constructing a [`Problem`].
#[derive(Debug, Error)]
pub enum ProblemError {
    #[error("coefficient and exponent vectors differ in length: {coefficients} vs {exponents}")]
    LengthMismatch {
        coefficients: usize,
        exponents: usize,
    },

    #[error("a problem requires at least one term")]
    Empty,

    #[error("invalid coefficient at index {index}")]
    Coefficient {
        index: usize,
        #[source]
        source: ConstraintError,
    },

    #[error("invalid exponent at index {index}")]
    Exponent {
        index: usize,
        #[source]
        source: ConstraintError,
    },

    #[error("target must be finite, got {value}")]
    NonFiniteTarget { value: f64 },
}

/// A candidate solution vector does not match the problem's term count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("solution has {actual} entries but the problem has {expected} terms")]
pub struct ShapeError {
    pub expected: usize,
    pub actual: usize,
}

impl Problem {
    /// Constructs a problem from positionally paired coefficients and
    /// exponents and a constraint target.
    ///
    /// Coefficients must be non-zero (they divide the parameter and the
    /// residual) and exponents must be non-zero (their reciprocal is taken
    /// by the solver).
    ///
    /// # Errors
    ///
    /// Returns a [`ProblemError`] if the vectors differ in length or are
    /// empty, if any coefficient or exponent is zero or NaN, or if the
    /// target is not finite.
    pub fn new(
        coefficients: Vec<f64>,
        exponents: Vec<f64>,
        target: f64,
    ) -> Result<Self, ProblemError> {
        if coefficients.len() != exponents.len() {
            return Err(ProblemError::LengthMismatch {
                coefficients: coefficients.len(),
                exponents: exponents.len(),
            });
        }

        if coefficients.is_empty() {
            return Err(ProblemError::Empty);
        }

        for (index, &value) in coefficients.iter().enumerate() {
            NonZero::new(value).map_err(|source| ProblemError::Coefficient { index, source })?;
        }

        for (index, &value) in exponents.iter().enumerate() {
            NonZero::new(value).map_err(|source| ProblemError::Exponent { index, source })?;
        }

        if !target.is_finite() {
            return Err(ProblemError::NonFiniteTarget { value: target });
        }

        Ok(Self {
            coefficients,
            exponents,
            target,
        })
    }

    /// The number of terms `n` in the constraint sum.
    #[must_use]
    pub fn num_terms(&self) -> usize {
        self.coefficients.len()
    }

    /// The coefficient vector `a`.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// The exponent vector `p`.
    #[must_use]
    pub fn exponents(&self) -> &[f64] {
        &self.exponents
    }

    /// The constraint target `b`.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Evaluates the constraint sum `Σ aᵢ·xᵢ^pᵢ` at a candidate solution.
    ///
    /// Exponentiation follows IEEE `powf` semantics: a negative `xᵢ` raised
    /// to a non-integer `pᵢ` yields NaN, which propagates through the sum.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if `x` does not have one entry per term.
    pub fn constraint_value(&self, x: &[f64]) -> Result<f64, ShapeError> {
        self.check_shape(x)?;

        Ok(self
            .coefficients
            .iter()
            .zip(&self.exponents)
            .zip(x)
            .map(|((a, p), xi)| a * xi.powf(*p))
            .sum())
    }

    /// The absolute deviation `|Σ aᵢ·xᵢ^pᵢ − b|` at a candidate solution.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if `x` does not have one entry per term.
    pub fn residual(&self, x: &[f64]) -> Result<f64, ShapeError> {
        Ok((self.constraint_value(x)? - self.target).abs())
    }

    /// Checks whether a candidate solution satisfies the constraint within
    /// an absolute tolerance.
    ///
    /// The comparison is strict: a residual exactly equal to the tolerance
    /// is not valid. A NaN residual (from an undefined power in the sum)
    /// never validates, nor does a NaN or negative tolerance.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if `x` does not have one entry per term.
    pub fn verify(&self, x: &[f64], tolerance: f64) -> Result<Verification, ShapeError> {
        Ok(Verification::from_residual(self.residual(x)?, tolerance))
    }

    /// Checks a candidate solution against [`DEFAULT_TOLERANCE`].
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if `x` does not have one entry per term.
    pub fn verify_default(&self, x: &[f64]) -> Result<Verification, ShapeError> {
        self.verify(x, DEFAULT_TOLERANCE)
    }

    fn check_shape(&self, x: &[f64]) -> Result<(), ShapeError> {
        if x.len() == self.num_terms() {
            Ok(())
        } else {
            Err(ShapeError {
                expected: self.num_terms(),
                actual: x.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    #[test]
    fn builds_a_valid_problem() {
        let problem = Problem::new(vec![1.0, 2.0], vec![2.0, 3.0], 5.0).unwrap();

        assert_eq!(problem.num_terms(), 2);
        assert_eq!(problem.coefficients(), &[1.0, 2.0]);
        assert_eq!(problem.exponents(), &[2.0, 3.0]);
        assert_eq!(problem.target(), 5.0);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let result = Problem::new(vec![1.0, 1.0], vec![2.0], 5.0);

        assert!(matches!(
            result,
            Err(ProblemError::LengthMismatch {
                coefficients: 2,
                exponents: 1,
            })
        ));
    }

    #[test]
    fn rejects_empty_problem() {
        let result = Problem::new(vec![], vec![], 5.0);

        assert!(matches!(result, Err(ProblemError::Empty)));
    }

    #[test]
    fn rejects_zero_coefficient() {
        let result = Problem::new(vec![1.0, 0.0], vec![2.0, 2.0], 5.0);

        assert!(matches!(
            result,
            Err(ProblemError::Coefficient {
                index: 1,
                source: ConstraintError::Zero,
            })
        ));
    }

    #[test]
    fn rejects_zero_exponent() {
        let result = Problem::new(vec![1.0, 1.0], vec![2.0, 0.0], 5.0);

        assert!(matches!(
            result,
            Err(ProblemError::Exponent {
                index: 1,
                source: ConstraintError::Zero,
            })
        ));
    }

    #[test]
    fn rejects_nan_entries() {
        let result = Problem::new(vec![f64::NAN], vec![2.0], 5.0);
        assert!(matches!(
            result,
            Err(ProblemError::Coefficient {
                index: 0,
                source: ConstraintError::NotANumber,
            })
        ));

        let result = Problem::new(vec![1.0], vec![f64::NAN], 5.0);
        assert!(matches!(
            result,
            Err(ProblemError::Exponent {
                index: 0,
                source: ConstraintError::NotANumber,
            })
        ));
    }

    #[test]
    fn rejects_non_finite_target() {
        let result = Problem::new(vec![1.0], vec![2.0], f64::INFINITY);
        assert!(matches!(result, Err(ProblemError::NonFiniteTarget { .. })));

        let result = Problem::new(vec![1.0], vec![2.0], f64::NAN);
        assert!(matches!(result, Err(ProblemError::NonFiniteTarget { .. })));
    }

    #[test]
    fn evaluates_constraint_sum() {
        let problem = Problem::new(vec![1.0, 2.0, 3.0], vec![2.0, 1.0, 3.0], 0.0).unwrap();

        // 1·4² + 2·5 + 3·2³ = 16 + 10 + 24
        let value = problem.constraint_value(&[4.0, 5.0, 2.0]).unwrap();
        assert_abs_diff_eq!(value, 50.0);
    }

    #[test]
    fn constraint_value_rejects_wrong_shape() {
        let problem = Problem::new(vec![1.0, 1.0], vec![2.0, 2.0], 5.0).unwrap();

        let result = problem.constraint_value(&[1.0]);
        assert_eq!(
            result,
            Err(ShapeError {
                expected: 2,
                actual: 1,
            })
        );

        let result = problem.verify_default(&[1.0, 2.0, 3.0]);
        assert_eq!(
            result,
            Err(ShapeError {
                expected: 2,
                actual: 3,
            })
        );
    }

    #[test]
    fn verifies_a_satisfying_solution() {
        let problem = Problem::new(vec![1.0, 1.0], vec![2.0, 2.0], 25.0).unwrap();

        let verification = problem.verify_default(&[3.0, 4.0]).unwrap();
        assert!(verification.is_valid);
        assert_abs_diff_eq!(verification.error, 0.0);
    }

    #[test]
    fn reports_error_for_off_target_solution() {
        let problem = Problem::new(vec![1.0], vec![2.0], 9.0).unwrap();

        let verification = problem.verify_default(&[4.0]).unwrap();
        assert!(!verification.is_valid);
        assert_abs_diff_eq!(verification.error, 7.0);
    }

    #[test]
    fn error_equal_to_tolerance_is_invalid() {
        // 1·x¹ with x = 1.25 against target 1.0: residual is exactly 0.25.
        let problem = Problem::new(vec![1.0], vec![1.0], 1.0).unwrap();

        let verification = problem.verify(&[1.25], 0.25).unwrap();
        assert_eq!(verification.error, 0.25);
        assert!(!verification.is_valid);

        let verification = problem.verify(&[1.25], 0.2500001).unwrap();
        assert!(verification.is_valid);
    }

    #[test]
    fn nan_from_undefined_power_never_validates() {
        let problem = Problem::new(vec![1.0], vec![0.5], 1.0).unwrap();

        // (-4)^0.5 is undefined over the reals; the sum becomes NaN.
        let verification = problem.verify_default(&[-4.0]).unwrap();
        assert!(verification.error.is_nan());
        assert!(!verification.is_valid);
    }

    #[test]
    fn invalid_tolerance_never_validates() {
        let problem = Problem::new(vec![1.0], vec![1.0], 1.0).unwrap();

        assert!(!problem.verify(&[1.0], -1.0).unwrap().is_valid);
        assert!(!problem.verify(&[1.0], f64::NAN).unwrap().is_valid);
    }
}
