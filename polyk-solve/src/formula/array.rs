use ndarray::{Array1, ArrayView1, Zip, s};

use polyk_core::Problem;

use super::{Config, Error, Solution};

/// Array-based variant of [`solve`](super::solve).
///
/// Produces the same solution as the element-wise path, computing the
/// trailing coordinates with bulk array operations and the constraint sum
/// as a dot product. Useful when `n` is large.
///
/// # Errors
///
/// Returns an error if the config is invalid, `k` is not finite, or any
/// coordinate would require a fractional power of a negative base.
pub fn solve_array(problem: &Problem, k: f64, config: &Config) -> Result<Solution, Error> {
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    if !k.is_finite() {
        return Err(Error::NonFiniteParameter { value: k });
    }

    let a = ArrayView1::from(problem.coefficients());
    let p = ArrayView1::from(problem.exponents());
    let n = problem.num_terms();
    let b = problem.target();

    let lead = (b - (n - 1) as f64 * k) / a[0];

    let mut x = Array1::<f64>::zeros(n);
    x[0] = lead.powf(p[0].recip());
    Zip::from(x.slice_mut(s![1..]))
        .and(a.slice(s![1..]))
        .and(p.slice(s![1..]))
        .for_each(|xi, &ai, &pi| *xi = (k / ai).powf(pi.recip()));

    // A NaN coordinate can only come from a negative base under a
    // non-integer reciprocal exponent; problem entries are NaN-free and
    // `k` is finite.
    if let Some(index) = x.iter().position(|v| v.is_nan()) {
        let base = if index == 0 { lead } else { k / a[index] };
        return Err(Error::NegativeBase {
            index,
            base,
            exponent: p[index],
        });
    }

    let powers = Zip::from(&x).and(p).map_collect(|&xi, &pi| xi.powf(pi));
    let constraint_value = a.dot(&powers);

    Ok(Solution::from_value(
        x.to_vec(),
        constraint_value,
        b,
        config.drift_tol,
    ))
}
