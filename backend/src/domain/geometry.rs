//! Shape geometry.
//!
//! Area functions are pure and total: they never validate their input.
//! Domain bounds live with the caller (see [`crate::domain::SideLength`]) so
//! new shapes can be added without re-deriving validation rules here.

use std::fmt;
use std::str::FromStr;

/// Shapes the calculator knows how to measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Four equal sides, measured by side length.
    Square,
}

impl Shape {
    /// Name persisted in the `shape` column.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Square => "square",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown shape name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shape: {0}")]
pub struct UnknownShapeError(pub String);

impl FromStr for Shape {
    type Err = UnknownShapeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "square" => Ok(Self::Square),
            other => Err(UnknownShapeError(other.to_owned())),
        }
    }
}

/// Area of a square with the given side length.
///
/// # Examples
/// ```
/// use area_calculator::domain::geometry::square_area;
///
/// assert_eq!(square_area(5.0), 25.0);
/// assert_eq!(square_area(-3.0), 9.0);
/// ```
#[must_use]
pub fn square_area(side: f64) -> f64 {
    side * side
}
