//! Conversion dimensions
//!
//! The three independent conversion domains. Units in different
//! dimensions are never mutually convertible, so each variant carries its
//! own allow-list and dispatches to its own conversion routine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::convert;
use crate::error::ConvertError;
use crate::temperature::TempScale;
use crate::units;

/// One of the three conversion domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Length,
    Weight,
    Temperature,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [
        Dimension::Length,
        Dimension::Weight,
        Dimension::Temperature,
    ];

    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::Weight => "weight",
            Dimension::Temperature => "temperature",
        }
    }

    /// Look up a dimension by its canonical name
    pub fn from_name(name: &str) -> Option<Dimension> {
        match name {
            "length" => Some(Dimension::Length),
            "weight" => Some(Dimension::Weight),
            "temperature" => Some(Dimension::Temperature),
            _ => None,
        }
    }

    /// The unit names this dimension accepts, in display order
    pub fn units(self) -> &'static [&'static str] {
        match self {
            Dimension::Length => units::LENGTH.units(),
            Dimension::Weight => units::WEIGHT.units(),
            Dimension::Temperature => &TempScale::NAMES,
        }
    }

    /// Convert a value between two units of this dimension
    pub fn convert(self, value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConvertError> {
        match self {
            Dimension::Length => convert::convert_length(value, from_unit, to_unit),
            Dimension::Weight => convert::convert_weight(value, from_unit, to_unit),
            Dimension::Temperature => convert::convert_temperature(value, from_unit, to_unit),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
