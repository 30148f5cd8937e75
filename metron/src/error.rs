//! Conversion errors
//!
//! Every failure is a value surfaced to the caller. Nothing here is
//! process-fatal and nothing is retried: a conversion either produces a
//! number or one of the three variants below.

use thiserror::Error;

use crate::dimension::Dimension;

/// Errors that can occur while handling a conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The supplied value did not parse as a number (covers non-numeric
    /// text and a missing value).
    #[error("invalid value {0:?}: expected a number")]
    InvalidValue(String),

    /// One of the unit identifiers was empty.
    #[error("both source and target units must be provided")]
    MissingUnit,

    /// One or both unit identifiers are outside the dimension's allowed
    /// set, or the temperature pair has no defined formula.
    #[error("invalid units for {dimension} conversion: {from}, {to}")]
    InvalidUnit {
        dimension: Dimension,
        from: String,
        to: String,
    },
}

impl ConvertError {
    pub fn invalid_value(raw: impl Into<String>) -> Self {
        ConvertError::InvalidValue(raw.into())
    }

    /// Invalid-unit failure naming both supplied units, whichever of the
    /// two is actually at fault.
    pub fn invalid_unit(dimension: Dimension, from: &str, to: &str) -> Self {
        ConvertError::InvalidUnit {
            dimension,
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_unit_names_both_units() {
        let err = ConvertError::invalid_unit(Dimension::Length, "meter", "banana");
        let display = format!("{}", err);
        assert_eq!(
            display,
            "invalid units for length conversion: meter, banana"
        );
    }

    #[test]
    fn test_invalid_value_display() {
        let err = ConvertError::invalid_value("abc");
        assert!(format!("{}", err).contains("\"abc\""));
    }

    #[test]
    fn test_missing_unit_display() {
        let display = format!("{}", ConvertError::MissingUnit);
        assert!(display.contains("must be provided"));
    }
}
