//! Calculation records and the input rules that guard their creation.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::geometry::{Shape, square_area};

/// Largest side length accepted by the calculator, inclusive.
pub const MAX_SIDE_LENGTH: f64 = 1_000_000.0;

/// Store-assigned identifier of a calculation record.
///
/// Identifiers are never reused after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculationId(i64);

impl CalculationId {
    /// Wrap a raw identifier.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CalculationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CalculationId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Reasons a side length is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SideLengthValidationError {
    /// Zero, negative, or not a number.
    #[error("Side length must be positive")]
    NotPositive,
    /// Above [`MAX_SIDE_LENGTH`].
    #[error("Value too large - maximum is 1,000,000")]
    TooLarge,
}

/// A side length within `(0, 1_000_000]`.
///
/// # Examples
/// ```
/// use area_calculator::domain::{SideLength, SideLengthValidationError};
///
/// assert!(SideLength::new(1_000_000.0).is_ok());
/// assert_eq!(SideLength::new(0.0), Err(SideLengthValidationError::NotPositive));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SideLength(f64);

impl SideLength {
    /// Validate a candidate side length.
    pub fn new(value: f64) -> Result<Self, SideLengthValidationError> {
        if value.is_nan() || value <= 0.0 {
            return Err(SideLengthValidationError::NotPositive);
        }
        if value > MAX_SIDE_LENGTH {
            return Err(SideLengthValidationError::TooLarge);
        }
        Ok(Self(value))
    }

    /// The validated value.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for SideLength {
    type Error = SideLengthValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A calculation ready to be persisted; the store assigns `id` and
/// `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCalculation {
    /// Shape name, e.g. `"square"`.
    pub shape: String,
    /// Input supplied by the caller.
    pub input_value: f64,
    /// Computed area.
    pub result: f64,
}

impl NewCalculation {
    /// Build the record for a square area computation.
    pub fn square(side: SideLength) -> Self {
        Self {
            shape: Shape::Square.as_str().to_owned(),
            input_value: side.get(),
            result: square_area(side.get()),
        }
    }
}

/// One stored calculation.
///
/// `result` equals `input_value²` at creation time but may be overwritten
/// later without re-validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    /// Store-assigned identifier.
    pub id: CalculationId,
    /// Shape name.
    pub shape: String,
    /// Input supplied by the caller.
    pub input_value: f64,
    /// Stored result.
    pub result: f64,
    /// Insert timestamp set by the store.
    pub created_at: DateTime<Utc>,
}
