use thiserror::Error;

/// Errors that can occur during a closed-form solve.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("parameter k must be finite, got {value}")]
    NonFiniteParameter { value: f64 },

    #[error("term {index} requires a fractional power of a negative base: ({base})^(1/{exponent})")]
    NegativeBase {
        index: usize,
        base: f64,
        exponent: f64,
    },
}
