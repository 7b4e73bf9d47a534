use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::triangle::{TriangleType, classify};

/// The number of sides of a triangle
pub const NUM_SIDES: usize = 3;

/// Why a collection of lengths cannot form a triangle
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ValidationError {
    /// No lengths were supplied at all
    #[error("missing side lengths")]
    MissingInput,

    /// The input does not hold exactly [`NUM_SIDES`] lengths
    #[error("expected 3 sides, found {found}: {lengths:?}")]
    WrongCount {
        /// How many lengths were supplied
        found: usize,
        /// The supplied lengths
        lengths: Vec<f64>,
    },

    /// A length is zero, negative or NaN
    #[error("side {index} has non-positive length {length}")]
    NonPositiveLength {
        /// Position of the first offending side
        index: usize,
        /// Its length
        length: f64,
    },

    /// A side is at least as long as the other two together
    #[error("side {index} violates the triangle inequality: {sides:?}")]
    InequalityViolation {
        /// Position of the first offending side
        index: usize,
        /// All three lengths
        sides: [f64; NUM_SIDES],
    },
}

/// Three side lengths that are known to form a triangle
///
/// The only way to obtain one is through [`validate`] (or the constructors
/// and `TryFrom` impls built on it), so every value satisfies, for each side
/// `i` taken modulo 3: `side[i] > 0` and `side[i] < side[i+1] + side[i+2]`.
///
/// ```rust
/// use triangulation::{SideLengths, TriangleType};
///
/// let sides = SideLengths::new(3.0, 4.0, 5.0)?;
/// assert_eq!(sides.classify(), TriangleType::Scalene);
/// assert_eq!(sides.to_string(), "[3.0, 4.0, 5.0]");
/// # Ok::<(), triangulation::ValidationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "[f64; 3]", into = "[f64; 3]")
)]
pub struct SideLengths([f64; NUM_SIDES]);

impl SideLengths {
    /// Validates three lengths given in order
    ///
    /// # Errors
    ///
    /// See [`validate`].
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, ValidationError> {
        Self::try_from([a, b, c])
    }

    /// The lengths in the order they were supplied
    #[inline]
    #[must_use]
    pub const fn as_array(&self) -> &[f64; NUM_SIDES] {
        &self.0
    }

    /// The length at `index`, or `None` past the third side
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Iterates over the three lengths
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    /// Shorthand for [`classify`]
    #[inline]
    #[must_use]
    pub fn classify(self) -> TriangleType {
        classify(self)
    }
}

impl From<SideLengths> for [f64; NUM_SIDES] {
    #[inline]
    fn from(sides: SideLengths) -> Self {
        sides.0
    }
}

impl TryFrom<[f64; NUM_SIDES]> for SideLengths {
    type Error = ValidationError;

    fn try_from(lengths: [f64; NUM_SIDES]) -> Result<Self, Self::Error> {
        validate(Some(lengths.as_slice()))
    }
}

impl TryFrom<&[f64]> for SideLengths {
    type Error = ValidationError;

    fn try_from(lengths: &[f64]) -> Result<Self, Self::Error> {
        validate(Some(lengths))
    }
}

impl TryFrom<Vec<f64>> for SideLengths {
    type Error = ValidationError;

    fn try_from(lengths: Vec<f64>) -> Result<Self, Self::Error> {
        validate(Some(lengths.as_slice()))
    }
}

impl Display for SideLengths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Checks that `lengths` can be the sides of a triangle
///
/// Checks run in this order and the first failure is returned:
/// presence, count, positivity, then the strict triangle inequality for each
/// side in turn. NaN is not positive.
///
/// # Errors
///
/// - [`ValidationError::MissingInput`] if `lengths` is `None`
/// - [`ValidationError::WrongCount`] unless there are exactly [`NUM_SIDES`] values
/// - [`ValidationError::NonPositiveLength`] if a value is not `> 0`
/// - [`ValidationError::InequalityViolation`] if a side is `>=` the sum of the other two
pub fn validate(lengths: Option<&[f64]>) -> Result<SideLengths, ValidationError> {
    let lengths = lengths.ok_or(ValidationError::MissingInput)?;

    let sides: [f64; NUM_SIDES] = lengths.try_into().map_err(|_| ValidationError::WrongCount {
        found: lengths.len(),
        lengths: lengths.to_vec(),
    })?;

    if let Some((index, &length)) = sides
        .iter()
        .enumerate()
        .find(|(_, len)| len.is_nan() || **len <= 0.0)
    {
        return Err(ValidationError::NonPositiveLength { index, length });
    }

    for index in 0..NUM_SIDES {
        let side = sides[index];
        let others = sides[(index + 1) % NUM_SIDES] + sides[(index + 2) % NUM_SIDES];
        if side >= others {
            return Err(ValidationError::InequalityViolation { index, sides });
        }
    }

    Ok(SideLengths(sides))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_triangle_unchanged() {
        let sides = validate(Some(&[1.0, 1.5, 2.0])).unwrap();
        assert_eq!(sides.as_array(), &[1.0, 1.5, 2.0]);
    }

    #[test]
    fn test_missing_input() {
        assert_eq!(validate(None), Err(ValidationError::MissingInput));
    }

    #[test]
    fn test_wrong_count() {
        for lengths in [&[][..], &[1.0, 2.0], &[1.0, 2.0, 2.2, 2.4]] {
            match validate(Some(lengths)) {
                Err(ValidationError::WrongCount { found, lengths: got }) => {
                    assert_eq!(found, lengths.len());
                    assert_eq!(got, lengths);
                }
                other => panic!("expected WrongCount, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_non_positive_reports_first_offender() {
        assert_eq!(
            validate(Some(&[0.0, 0.0, 0.0])),
            Err(ValidationError::NonPositiveLength { index: 0, length: 0.0 })
        );
        assert_eq!(
            validate(Some(&[-1.0, 0.0, 0.0])),
            Err(ValidationError::NonPositiveLength { index: 0, length: -1.0 })
        );
        assert_eq!(
            validate(Some(&[2.0, 1.0, -0.5])),
            Err(ValidationError::NonPositiveLength { index: 2, length: -0.5 })
        );
    }

    #[test]
    fn test_nan_is_not_positive() {
        assert!(matches!(
            validate(Some(&[1.0, f64::NAN, 1.0])),
            Err(ValidationError::NonPositiveLength { index: 1, .. })
        ));
    }

    #[test]
    fn test_inequality_violation() {
        assert_eq!(
            validate(Some(&[1.0, 1.0, 2.0])),
            Err(ValidationError::InequalityViolation {
                index: 2,
                sides: [1.0, 1.0, 2.0],
            })
        );
        assert_eq!(
            validate(Some(&[1.0, 3.9, 2.0])),
            Err(ValidationError::InequalityViolation {
                index: 1,
                sides: [1.0, 3.9, 2.0],
            })
        );
        assert!(matches!(
            validate(Some(&[1.0, 2.0, 3.5])),
            Err(ValidationError::InequalityViolation { .. })
        ));
    }

    #[test]
    fn test_infinite_side_violates_inequality() {
        assert!(matches!(
            validate(Some(&[f64::INFINITY, 1.0, 1.0])),
            Err(ValidationError::InequalityViolation { index: 0, .. })
        ));
        assert!(matches!(
            validate(Some(&[f64::INFINITY, f64::INFINITY, 1.0])),
            Err(ValidationError::InequalityViolation { .. })
        ));
    }

    #[test]
    fn test_conversions_agree_with_validate() {
        let from_array = SideLengths::try_from([2.0, 3.0, 4.0]).unwrap();
        let from_slice = SideLengths::try_from(&[2.0, 3.0, 4.0][..]).unwrap();
        let from_vec = SideLengths::try_from(vec![2.0, 3.0, 4.0]).unwrap();
        let from_new = SideLengths::new(2.0, 3.0, 4.0).unwrap();
        assert_eq!(from_array, from_slice);
        assert_eq!(from_slice, from_vec);
        assert_eq!(from_vec, from_new);

        let back: [f64; NUM_SIDES] = from_new.into();
        assert_eq!(back, [2.0, 3.0, 4.0]);
        assert_eq!(from_new.get(1), Some(3.0));
        assert_eq!(from_new.get(3), None);
        assert_eq!(from_new.iter().sum::<f64>(), 9.0);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::MissingInput.to_string(),
            "missing side lengths"
        );
        assert_eq!(
            validate(Some(&[1.0, 0.0])).unwrap_err().to_string(),
            "expected 3 sides, found 2: [1.0, 0.0]"
        );
        assert_eq!(
            validate(Some(&[0.0, 1.0, 2.0])).unwrap_err().to_string(),
            "side 0 has non-positive length 0"
        );
        assert_eq!(
            validate(Some(&[1.0, 0.9, 2.0])).unwrap_err().to_string(),
            "side 2 violates the triangle inequality: [1.0, 0.9, 2.0]"
        );
    }

    #[test]
    fn test_display() {
        let sides = SideLengths::new(1.0, 1.5, 2.0).unwrap();
        assert_eq!(sides.to_string(), "[1.0, 1.5, 2.0]");
    }
}
