//! Temperature scales and their pairwise conversions
//!
//! Temperature transforms are affine (scale plus offset), so the scales
//! form a closed enum with a formula per directed pair instead of a
//! shared base-unit table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A temperature scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TempScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TempScale {
    /// Accepted scale names, in display order. Matching is exact and
    /// case-sensitive.
    pub const NAMES: [&'static str; 3] = ["Celsius", "Fahrenheit", "Kelvin"];

    pub fn parse(name: &str) -> Option<TempScale> {
        match name {
            "Celsius" => Some(TempScale::Celsius),
            "Fahrenheit" => Some(TempScale::Fahrenheit),
            "Kelvin" => Some(TempScale::Kelvin),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TempScale::Celsius => "Celsius",
            TempScale::Fahrenheit => "Fahrenheit",
            TempScale::Kelvin => "Kelvin",
        }
    }

    /// Convert an unrounded reading on this scale to `target`
    pub fn convert_to(self, target: TempScale, value: f64) -> f64 {
        use TempScale::*;

        match (self, target) {
            (Celsius, Fahrenheit) => value * 9.0 / 5.0 + 32.0,
            (Celsius, Kelvin) => value + 273.15,
            (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
            (Fahrenheit, Kelvin) => (value - 32.0) * 5.0 / 9.0 + 273.15,
            (Kelvin, Celsius) => value - 273.15,
            (Kelvin, Fahrenheit) => (value - 273.15) * 9.0 / 5.0 + 32.0,
            (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => value,
        }
    }
}

impl fmt::Display for TempScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(TempScale::parse("Celsius"), Some(TempScale::Celsius));
        assert_eq!(TempScale::parse("celsius"), None);
        assert_eq!(TempScale::parse("KELVIN"), None);
        assert_eq!(TempScale::parse("Rankine"), None);
    }

    #[test]
    fn test_name_round_trip() {
        for name in TempScale::NAMES {
            assert_eq!(TempScale::parse(name).unwrap().name(), name);
        }
    }

    #[test]
    fn test_freezing_point_of_water() {
        assert_eq!(
            TempScale::Celsius.convert_to(TempScale::Fahrenheit, 0.0),
            32.0
        );
        assert_eq!(TempScale::Celsius.convert_to(TempScale::Kelvin, 0.0), 273.15);
        assert_eq!(
            TempScale::Fahrenheit.convert_to(TempScale::Celsius, 32.0),
            0.0
        );
        assert_eq!(
            TempScale::Kelvin.convert_to(TempScale::Celsius, 273.15),
            0.0
        );
    }

    #[test]
    fn test_boiling_point_of_water() {
        assert_eq!(
            TempScale::Celsius.convert_to(TempScale::Fahrenheit, 100.0),
            212.0
        );
        assert_eq!(
            TempScale::Fahrenheit.convert_to(TempScale::Kelvin, 212.0),
            373.15
        );
        assert_eq!(
            TempScale::Kelvin.convert_to(TempScale::Fahrenheit, 373.15),
            212.0
        );
    }

    #[test]
    fn test_same_scale_is_identity() {
        assert_eq!(TempScale::Kelvin.convert_to(TempScale::Kelvin, 42.5), 42.5);
    }
}
