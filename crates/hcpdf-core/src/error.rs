#![forbid(unsafe_code)]

//! Construction-time validation errors.

use std::fmt;

/// An argument rejected while constructing a layout, element, or style.
///
/// Every constructor and builder `build()` in the workspace fails fast with
/// this type instead of clamping.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    /// A spacing, inset, or size that must be `>= 0` was negative or NaN.
    Negative { field: &'static str, value: f32 },
    /// A stroke width that must be `> 0` was not.
    NotPositive { field: &'static str, value: f32 },
    /// A table span was zero.
    InvalidSpan { axis: &'static str, span: usize },
    /// A dense grid row had a different length than the first row.
    RaggedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// Multi-line text spacing factor below one.
    LineSpacingBelowOne { value: f32 },
    /// Font size below one point.
    FontSizeBelowOne { value: f32 },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative { field, value } => write!(
                f,
                "{field} must be equal to or greater than zero, but was {value}"
            ),
            Self::NotPositive { field, value } => {
                write!(f, "{field} must be greater than zero, but was {value}")
            }
            Self::InvalidSpan { axis, span } => write!(
                f,
                "{axis} span must be at least one (or remaining), but was {span}"
            ),
            Self::RaggedGrid {
                row,
                expected,
                actual,
            } => write!(
                f,
                "grid row {row} has wrong length (expected = {expected}; actual = {actual})"
            ),
            Self::LineSpacingBelowOne { value } => write!(
                f,
                "line spacing must be equal to or greater than one, but was {value}"
            ),
            Self::FontSizeBelowOne { value } => write!(
                f,
                "font size must be equal to or greater than one, but was {value}"
            ),
        }
    }
}

impl std::error::Error for BuildError {}

/// Validate a value that must be `>= 0`. NaN is rejected.
pub fn non_negative(field: &'static str, value: f32) -> Result<f32, BuildError> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(BuildError::Negative { field, value })
    }
}

/// Validate a value that must be `> 0`. NaN is rejected.
pub fn positive(field: &'static str, value: f32) -> Result<f32, BuildError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(BuildError::NotPositive { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_accepts_zero_and_infinity() {
        assert_eq!(non_negative("spacing", 0.0), Ok(0.0));
        assert_eq!(non_negative("width", f32::INFINITY), Ok(f32::INFINITY));
    }

    #[test]
    fn non_negative_rejects_negative_and_nan() {
        assert_eq!(
            non_negative("spacing", -1.0),
            Err(BuildError::Negative {
                field: "spacing",
                value: -1.0
            })
        );
        assert!(non_negative("spacing", f32::NAN).is_err());
    }

    #[test]
    fn positive_rejects_zero() {
        assert!(positive("stroke width", 0.0).is_err());
        assert_eq!(positive("stroke width", 0.5), Ok(0.5));
    }

    #[test]
    fn display_messages() {
        let err = BuildError::Negative {
            field: "top spacing",
            value: -2.0,
        };
        assert_eq!(
            err.to_string(),
            "top spacing must be equal to or greater than zero, but was -2"
        );
        let err = BuildError::RaggedGrid {
            row: 1,
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "grid row 1 has wrong length (expected = 3; actual = 2)"
        );
    }
}
