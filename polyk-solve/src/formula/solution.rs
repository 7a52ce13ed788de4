/// Indicates whether the recomputed constraint matched the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The recomputed residual is within the drift threshold.
    Verified,
    /// The recomputed residual exceeds the drift threshold, or is NaN.
    ///
    /// Drift is a diagnostic, not a failure: `x` is still the exact
    /// algebraic substitution for the given inputs.
    Drifted,
}

/// The result of a closed-form solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Drift status of the recomputed constraint.
    pub status: Status,
    /// Solution vector; the leading entry absorbs the constraint residual.
    pub x: Vec<f64>,
    /// The constraint sum `Σ aᵢ·xᵢ^pᵢ` recomputed at `x`.
    pub constraint_value: f64,
    /// Absolute deviation of the recomputed sum from the target.
    pub residual: f64,
}

impl Solution {
    /// Constructs a solution from the recomputed constraint sum.
    pub(super) fn from_value(
        x: Vec<f64>,
        constraint_value: f64,
        target: f64,
        drift_tol: f64,
    ) -> Self {
        let residual = (constraint_value - target).abs();
        let status = if residual <= drift_tol {
            Status::Verified
        } else {
            Status::Drifted
        };

        Self {
            status,
            x,
            constraint_value,
            residual,
        }
    }
}
