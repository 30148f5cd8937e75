//! Conversion requests from untrusted front-end input
//!
//! A front end collects three text fields and a dimension; this module
//! owns the text-to-number parse so the full error taxonomy comes from
//! one place. Requests are transient: built per call, consumed, dropped.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;
use crate::error::ConvertError;

/// One conversion to perform, with the value still in raw text form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub dimension: Dimension,
    /// The value as submitted, not yet parsed
    pub value: String,
    pub from_unit: String,
    pub to_unit: String,
}

impl ConversionRequest {
    pub fn new(
        dimension: Dimension,
        value: impl Into<String>,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
    ) -> Self {
        ConversionRequest {
            dimension,
            value: value.into(),
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }

    /// Parse the value and perform the conversion.
    ///
    /// The value parse happens first: non-numeric text fails with
    /// [`ConvertError::InvalidValue`] before any unit is looked up.
    pub fn convert(&self) -> Result<Conversion, ConvertError> {
        let value: f64 = self
            .value
            .trim()
            .parse()
            .map_err(|_| ConvertError::invalid_value(self.value.as_str()))?;

        let result = self
            .dimension
            .convert(value, &self.from_unit, &self.to_unit)?;

        Ok(Conversion {
            dimension: self.dimension,
            value,
            from_unit: self.from_unit.clone(),
            to_unit: self.to_unit.clone(),
            result,
        })
    }
}

/// A completed conversion, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub dimension: Dimension,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub result: f64,
}

impl fmt::Display for Conversion {
    /// Renders as `<value> <from_unit> = <result> <to_unit>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {} {}",
            self.value, self.from_unit, self.result, self.to_unit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_convert() {
        let request = ConversionRequest::new(Dimension::Length, "5", "meter", "centimeter");
        let conversion = request.convert().unwrap();
        assert_eq!(conversion.result, 500.0);
        assert_eq!(conversion.value, 5.0);
    }

    #[test]
    fn test_value_is_trimmed() {
        let request = ConversionRequest::new(Dimension::Weight, " 2.5 ", "kilogram", "gram");
        assert_eq!(request.convert().unwrap().result, 2500.0);
    }

    #[test]
    fn test_invalid_value_before_unit_lookup() {
        // Units are bad too, but the value parse fails first.
        let request = ConversionRequest::new(Dimension::Length, "abc", "banana", "cucumber");
        assert_eq!(
            request.convert().unwrap_err(),
            ConvertError::InvalidValue("abc".to_string())
        );
    }

    #[test]
    fn test_empty_value_is_invalid_value() {
        let request = ConversionRequest::new(Dimension::Length, "", "meter", "foot");
        assert!(matches!(
            request.convert().unwrap_err(),
            ConvertError::InvalidValue(_)
        ));
    }

    #[test]
    fn test_unit_errors_pass_through() {
        let request = ConversionRequest::new(Dimension::Length, "5", "meter", "banana");
        assert!(matches!(
            request.convert().unwrap_err(),
            ConvertError::InvalidUnit { .. }
        ));

        let request = ConversionRequest::new(Dimension::Temperature, "5", "", "Kelvin");
        assert_eq!(request.convert().unwrap_err(), ConvertError::MissingUnit);
    }

    #[test]
    fn test_display_format() {
        let request = ConversionRequest::new(Dimension::Length, "5", "meter", "centimeter");
        let conversion = request.convert().unwrap();
        assert_eq!(format!("{}", conversion), "5 meter = 500 centimeter");
    }

    #[test]
    fn test_temperature_dispatch() {
        let request = ConversionRequest::new(Dimension::Temperature, "100", "Celsius", "Fahrenheit");
        assert_eq!(request.convert().unwrap().result, 212.0);
    }

    #[test]
    fn test_request_serde_round_trip() {
        let request = ConversionRequest::new(Dimension::Weight, "1", "ounce", "gram");
        let json = serde_json::to_string(&request).unwrap();
        let back: ConversionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
