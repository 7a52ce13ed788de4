/// Configuration for the closed-form solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Residual magnitude above which a solution is reported as drifted.
    pub drift_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self { drift_tol: 1e-10 }
    }
}

impl Config {
    /// Validates that the drift threshold is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is negative or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.drift_tol.is_finite() || self.drift_tol < 0.0 {
            return Err("drift_tol must be finite and non-negative");
        }
        Ok(())
    }
}
