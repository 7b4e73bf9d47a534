//! #  Triangulation - A Rust library for classifying triangles by their sides.
//!
//! ## Overview
//!
//! Three side lengths are first validated against the triangle inequality,
//! then classified into one of three categories:
//!
//! - **Equilateral**: all three sides are equal
//! - **Isosceles**: exactly two sides are equal
//! - **Scalene**: no two sides are equal
//!
//! Equality is exact floating-point comparison, with no tolerance.
//!
//! ## Quick Start
//!
//! ```rust
//! use triangulation::{TriangleType, ValidationError, classify, validate};
//!
//! let sides = validate(Some(&[1.0, 1.5, 1.5]))?;
//! assert_eq!(classify(sides), TriangleType::Isosceles);
//!
//! // 2.0 is not shorter than 1.0 + 1.0
//! assert!(matches!(
//!     validate(Some(&[1.0, 1.0, 2.0])),
//!     Err(ValidationError::InequalityViolation { .. })
//! ));
//! # Ok::<(), ValidationError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization for `TriangleType`, `SideLengths`, `Triangle`,
//!   `ValidationError` and `Outcome`. `SideLengths` is validated on deserialization.
//! - `cli`: Build the `triangulation` binary (implies `serde`).
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Side lengths and their validation.
pub mod sides;

/// Triangle types and classification.
pub mod triangle;

pub mod report;

#[cfg(feature = "cli")]
pub mod logging;

pub use report::{Outcome, SAMPLES, evaluate, evaluate_all};
pub use sides::{NUM_SIDES, SideLengths, ValidationError, validate};
pub use triangle::{Triangle, TriangleType, UnknownTriangleType, classify};
