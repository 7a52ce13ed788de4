use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type for values that must not be equal to zero.
///
/// A value that cannot be ordered against zero (a float NaN) is rejected as
/// [`ConstraintError::NotANumber`] rather than slipping through an equality
/// check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonZero;

impl<T> Constraint<T> for NonZero
where
    T: PartialOrd + Zero,
{
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            None => Err(ConstraintError::NotANumber),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(_) => Ok(()),
        }
    }
}

impl NonZero {
    /// Constructs a new non-zero constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero or cannot be compared to zero.
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, Self>, ConstraintError> {
        Constrained::new(value)
    }
}
