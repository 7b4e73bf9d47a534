//! Evaluation of candidate side lengths into printable outcomes.

use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::Serialize;
use tracing::{debug, warn};

use crate::sides::{ValidationError, validate};
use crate::triangle::Triangle;

/// Built-in candidates, valid and invalid, used when no input is given
pub const SAMPLES: &[Option<&[f64]>] = &[
    Some(&[1.0, 1.0, 1.0]),
    Some(&[1.0, 1.5, 1.5]),
    Some(&[1.0, 1.5, 2.0]),
    Some(&[1.0, 1.0, 2.0]),
    Some(&[1.0, 0.9, 2.0]),
    Some(&[1.0, 3.9, 2.0]),
    Some(&[0.0, 0.0, 0.0]),
    Some(&[0.0, 1.0, 2.0]),
    Some(&[-1.0, 0.0, 0.0]),
    Some(&[1.0, 0.0]),
    Some(&[1.0, 2.0, 2.2, 2.4]),
    None,
];

/// Result of evaluating one candidate
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "snake_case"))]
pub enum Outcome {
    /// The lengths form a triangle
    Classified {
        /// The classified triangle
        triangle: Triangle,
    },
    /// The lengths were rejected
    Rejected {
        /// The candidate as supplied
        input: Option<Vec<f64>>,
        /// Why it was rejected
        error: ValidationError,
    },
}

impl Outcome {
    /// Returns true if the candidate formed a triangle
    #[inline]
    #[must_use]
    pub const fn is_classified(&self) -> bool {
        matches!(self, Self::Classified { .. })
    }

    /// The triangle, if one was formed
    #[must_use]
    pub const fn triangle(&self) -> Option<&Triangle> {
        match self {
            Self::Classified { triangle } => Some(triangle),
            Self::Rejected { .. } => None,
        }
    }

    /// The validation error, if the candidate was rejected
    #[must_use]
    pub const fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Classified { .. } => None,
            Self::Rejected { error, .. } => Some(error),
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classified { triangle } => {
                write!(f, "The triangle {triangle} is {}", triangle.triangle_type())
            }
            Self::Rejected { error, .. } => write!(f, "{error}"),
        }
    }
}

/// Validates then classifies one candidate
pub fn evaluate(input: Option<&[f64]>) -> Outcome {
    match validate(input) {
        Ok(sides) => {
            let triangle = Triangle::from(sides);
            debug!(%sides, triangle_type = %triangle.triangle_type(), "classified");
            Outcome::Classified { triangle }
        }
        Err(error) => {
            warn!(?input, %error, "rejected");
            Outcome::Rejected {
                input: input.map(<[f64]>::to_vec),
                error,
            }
        }
    }
}

/// Evaluates every candidate in order
pub fn evaluate_all<'a, I>(inputs: I) -> Vec<Outcome>
where
    I: IntoIterator<Item = Option<&'a [f64]>>,
{
    inputs.into_iter().map(evaluate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triangle::TriangleType;

    #[test]
    fn test_samples_outcomes() {
        let outcomes = evaluate_all(SAMPLES.iter().copied());
        assert_eq!(outcomes.len(), SAMPLES.len());

        let classified: Vec<_> = outcomes
            .iter()
            .filter_map(Outcome::triangle)
            .map(Triangle::triangle_type)
            .collect();
        assert_eq!(
            classified,
            vec![
                TriangleType::Equilateral,
                TriangleType::Isosceles,
                TriangleType::Scalene,
            ]
        );
        assert_eq!(outcomes.iter().filter(|o| !o.is_classified()).count(), 9);
    }

    #[test]
    fn test_display_lines() {
        let lines: Vec<String> = evaluate_all(SAMPLES.iter().copied())
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(lines[0], "The triangle sides [1.0, 1.0, 1.0] is Equilateral");
        assert_eq!(lines[2], "The triangle sides [1.0, 1.5, 2.0] is Scalene");
        assert_eq!(
            lines[3],
            "side 2 violates the triangle inequality: [1.0, 1.0, 2.0]"
        );
        assert_eq!(lines[9], "expected 3 sides, found 2: [1.0, 0.0]");
        assert_eq!(lines[11], "missing side lengths");
    }

    #[test]
    fn test_rejected_keeps_input() {
        let outcome = evaluate(Some(&[1.0, 2.0, 2.2, 2.4]));
        match outcome {
            Outcome::Rejected { input, error } => {
                assert_eq!(input, Some(vec![1.0, 2.0, 2.2, 2.4]));
                assert!(matches!(error, ValidationError::WrongCount { found: 4, .. }));
            }
            Outcome::Classified { .. } => panic!("four lengths must be rejected"),
        }
    }

    #[test]
    fn test_missing_input_outcome() {
        let outcome = evaluate(None);
        assert_eq!(outcome.error(), Some(&ValidationError::MissingInput));
        assert!(outcome.triangle().is_none());
    }
}
