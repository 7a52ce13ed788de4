//! Construction-time numeric constraints.
//!
//! This module expresses numeric invariants like "non-zero" at the type
//! level, with zero runtime overhead after construction. Values that reach a
//! [`Problem`](crate::Problem) have already been proven valid, so downstream
//! code can divide by coefficients and take reciprocals of exponents without
//! re-checking.
//!
//! The generic [`Constrained<T, C>`] wrapper pairs a value with a marker type
//! implementing [`Constraint<T>`]. [`NonZero`] is the marker this domain
//! needs; custom invariants can be added by implementing [`Constraint<T>`]
//! for new zero-sized marker types.

mod non_zero;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_zero::NonZero;

/// A trait for enforcing numeric invariants at construction time.
///
/// Implement this trait for a marker type representing a numeric constraint,
/// such as [`NonZero`].
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the
    /// constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
///
/// This enum is marked `#[non_exhaustive]` and may include additional
/// variants in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// Combine this with one of the provided marker types (such as [`NonZero`])
/// or your own [`Constraint<T>`] implementation.
///
/// # Example
///
/// ```
/// use polyk_core::constraint::{Constrained, NonZero};
///
/// let c = Constrained::<_, NonZero>::new(2.5).unwrap();
/// assert_eq!(c.into_inner(), 2.5);
///
/// assert!(Constrained::<_, NonZero>::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
