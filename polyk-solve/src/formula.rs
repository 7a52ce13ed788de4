mod config;
mod error;
mod solution;

#[cfg(feature = "ndarray")]
mod array;

pub use config::Config;
pub use error::Error;
pub use solution::{Solution, Status};

#[cfg(feature = "ndarray")]
pub use array::solve_array;

use polyk_core::Problem;

/// Solves the constraint in closed form.
///
/// The parameter `k` fixes the contribution of every trailing term:
/// `xᵢ = (k/aᵢ)^(1/pᵢ)` makes `aᵢ·xᵢ^pᵢ` equal `k` exactly for `i ≥ 2`.
/// The leading coordinate absorbs what remains of the target,
/// `x₁ = ((b − (n−1)·k)/a₁)^(1/p₁)`, so the construction satisfies the
/// constraint by substitution, up to floating-point rounding.
///
/// For a single-term problem the parameter is unused and
/// `x₁ = (b/a₁)^(1/p₁)`.
///
/// The returned [`Solution`] carries the constraint sum recomputed at `x`
/// and its deviation from the target. A deviation above `config.drift_tol`
/// is reported as [`Status::Drifted`], never as an error.
///
/// # Errors
///
/// Returns an error if the config is invalid, `k` is not finite, or any
/// coordinate would require a fractional power of a negative base.
///
/// # Examples
///
/// ```
/// use polyk_core::Problem;
/// use polyk_solve::formula::{self, Config};
///
/// let problem = Problem::new(vec![1.0, 1.0, 1.0], vec![2.0, 2.0, 2.0], 10.0)?;
/// let solution = formula::solve(&problem, 1.5, &Config::default())?;
///
/// assert!(problem.verify_default(&solution.x)?.is_valid);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn solve(problem: &Problem, k: f64, config: &Config) -> Result<Solution, Error> {
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    if !k.is_finite() {
        return Err(Error::NonFiniteParameter { value: k });
    }

    let a = problem.coefficients();
    let p = problem.exponents();
    let n = problem.num_terms();
    let b = problem.target();

    let mut x = vec![0.0; n];

    let lead = (b - (n - 1) as f64 * k) / a[0];
    x[0] = root(lead, p[0], 0)?;

    for i in 1..n {
        x[i] = root(k / a[i], p[i], i)?;
    }

    let constraint_value: f64 = a
        .iter()
        .zip(p)
        .zip(&x)
        .map(|((ai, pi), xi)| ai * xi.powf(*pi))
        .sum();

    Ok(Solution::from_value(x, constraint_value, b, config.drift_tol))
}

/// Computes the real root `base^(1/exponent)` for the term at `index`.
///
/// Follows IEEE `powf`: a negative base is only defined when the reciprocal
/// exponent is an integer, so the root is rejected exactly when `powf`
/// yields NaN for a non-NaN base.
fn root(base: f64, exponent: f64, index: usize) -> Result<f64, Error> {
    let value = base.powf(exponent.recip());

    if value.is_nan() && !base.is_nan() {
        return Err(Error::NegativeBase {
            index,
            base,
            exponent,
        });
    }

    Ok(value)
}
