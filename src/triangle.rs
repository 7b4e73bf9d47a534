use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::Deref;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sides::{SideLengths, ValidationError, validate};

/// The three kinds of triangle, by how many sides share a length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[must_use]
pub enum TriangleType {
    /// No two sides are of equal length
    Scalene,
    /// Exactly two sides are of equal length
    Isosceles,
    /// All sides are of equal length
    Equilateral,
}

impl TriangleType {
    /// Every variant, in ascending order
    pub const ALL: [TriangleType; 3] = [Self::Scalene, Self::Isosceles, Self::Equilateral];

    /// The canonical display name
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scalene => "Scalene",
            Self::Isosceles => "Isosceles",
            Self::Equilateral => "Equilateral",
        }
    }

    /// Number of side pairs that are equal: Scalene=0, Isosceles=1, Equilateral=3
    #[inline]
    #[must_use]
    pub const fn equal_pairs(self) -> u8 {
        match self {
            Self::Scalene => 0,
            Self::Isosceles => 1,
            Self::Equilateral => 3,
        }
    }

    /// Returns true if all sides are equal
    #[inline]
    #[must_use]
    pub const fn is_equilateral(self) -> bool {
        matches!(self, Self::Equilateral)
    }

    /// Returns true if exactly two sides are equal
    #[inline]
    #[must_use]
    pub const fn is_isosceles(self) -> bool {
        matches!(self, Self::Isosceles)
    }

    /// Returns true if no sides are equal
    #[inline]
    #[must_use]
    pub const fn is_scalene(self) -> bool {
        matches!(self, Self::Scalene)
    }
}

impl PartialOrd for TriangleType {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TriangleType {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.equal_pairs().cmp(&other.equal_pairs())
    }
}

impl Display for TriangleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<TriangleType> for &'static str {
    #[inline]
    fn from(triangle_type: TriangleType) -> Self {
        triangle_type.name()
    }
}

/// Error returned when a string names no [`TriangleType`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown triangle type: {0:?} (expected Scalene, Isosceles or Equilateral)")]
pub struct UnknownTriangleType(pub String);

impl FromStr for TriangleType {
    type Err = UnknownTriangleType;

    /// Looks up a display name, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownTriangleType(s.to_owned()))
    }
}

impl TryFrom<&str> for TriangleType {
    type Error = UnknownTriangleType;

    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Classifies validated sides by exact pairwise equality
///
/// Lengths are compared with `==` and no tolerance, so values that are
/// mathematically equal but differ in their floating-point representation
/// count as different sides.
///
/// ```rust
/// use triangulation::{SideLengths, TriangleType, classify};
///
/// let sides = SideLengths::new(1.0, 1.5, 1.5)?;
/// assert_eq!(classify(sides), TriangleType::Isosceles);
/// # Ok::<(), triangulation::ValidationError>(())
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn classify(sides: SideLengths) -> TriangleType {
    let [a, b, c] = *sides.as_array();
    if a == b || a == c {
        if b == c {
            TriangleType::Equilateral
        } else {
            TriangleType::Isosceles
        }
    } else if b == c {
        TriangleType::Isosceles
    } else {
        TriangleType::Scalene
    }
}

/// Validated sides together with their classification
///
/// Dereferences to the underlying [`SideLengths`].
///
/// ```rust
/// use triangulation::{Triangle, TriangleType};
///
/// let triangle = Triangle::new(&[2.0, 2.0, 2.0])?;
/// assert_eq!(triangle.triangle_type(), TriangleType::Equilateral);
/// assert_eq!(triangle.to_string(), "sides [2.0, 2.0, 2.0]");
/// # Ok::<(), triangulation::ValidationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Triangle {
    sides: SideLengths,
    triangle_type: TriangleType,
}

impl Triangle {
    /// Validates `lengths` and classifies them
    ///
    /// # Errors
    ///
    /// Any [`ValidationError`] from [`validate`].
    pub fn new(lengths: &[f64]) -> Result<Self, ValidationError> {
        validate(Some(lengths)).map(Self::from)
    }

    /// The validated sides
    #[inline]
    #[must_use]
    pub const fn sides(&self) -> SideLengths {
        self.sides
    }

    /// The classification computed at construction
    #[inline]
    pub const fn triangle_type(&self) -> TriangleType {
        self.triangle_type
    }
}

impl From<SideLengths> for Triangle {
    fn from(sides: SideLengths) -> Self {
        Self {
            sides,
            triangle_type: classify(sides),
        }
    }
}

impl Deref for Triangle {
    type Target = SideLengths;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.sides
    }
}

impl AsRef<SideLengths> for Triangle {
    #[inline]
    fn as_ref(&self) -> &SideLengths {
        &self.sides
    }
}

impl Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sides {}", self.sides)
    }
}
