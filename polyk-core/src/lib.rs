//! Core types for polyk, a closed-form solver for separable polynomial
//! constraints of the form `Σ aᵢ·xᵢ^pᵢ = b`.
//!
//! This crate defines the [`Problem`] value type, the numeric invariants it
//! enforces at construction time (see [`constraint`]), and the
//! [`Verification`] routine that checks a candidate solution against the
//! constraint within a tolerance. The solver itself lives in `polyk-solve`.

pub mod constraint;

mod problem;
mod verify;

pub use problem::{Problem, ProblemError, ShapeError};
pub use verify::{DEFAULT_TOLERANCE, Verification};
