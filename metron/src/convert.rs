//! Conversion entry points
//!
//! Three pure functions, one per dimension. No I/O, no shared mutable
//! state: the same inputs always produce the same output. Results are
//! rounded to six decimal places with ties away from zero (`f64::round`
//! semantics); the identity short-circuit returns the value unrounded.

use crate::dimension::Dimension;
use crate::error::ConvertError;
use crate::temperature::TempScale;
use crate::unit::UnitTable;
use crate::units;

/// Round to six decimal places, ties away from zero.
fn round_result(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

/// Shared algorithm for the table-driven dimensions: scale to the base
/// unit, then from the base unit to the target.
fn convert_linear(
    table: &UnitTable,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConvertError> {
    if from_unit.is_empty() || to_unit.is_empty() {
        return Err(ConvertError::MissingUnit);
    }

    // Identity short-circuit, before the membership check.
    if from_unit == to_unit {
        return Ok(value);
    }

    match (table.factor(from_unit), table.factor(to_unit)) {
        (Some(from_factor), Some(to_factor)) => {
            let value_in_base = value * from_factor;
            Ok(round_result(value_in_base / to_factor))
        }
        _ => Err(ConvertError::invalid_unit(
            table.dimension(),
            from_unit,
            to_unit,
        )),
    }
}

/// Convert a length between two units of the length table (base: meter).
pub fn convert_length(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConvertError> {
    convert_linear(&units::LENGTH, value, from_unit, to_unit)
}

/// Convert a weight between two units of the weight table (base:
/// kilogram).
pub fn convert_weight(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConvertError> {
    convert_linear(&units::WEIGHT, value, from_unit, to_unit)
}

/// Convert a temperature reading between two scales.
///
/// Scale names are exact and case-sensitive (`Celsius`, `Fahrenheit`,
/// `Kelvin`); anything else fails with an invalid-unit error naming
/// both supplied names.
pub fn convert_temperature(
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConvertError> {
    if from_unit.is_empty() || to_unit.is_empty() {
        return Err(ConvertError::MissingUnit);
    }

    if from_unit == to_unit {
        return Ok(value);
    }

    let (from, to) = match (TempScale::parse(from_unit), TempScale::parse(to_unit)) {
        (Some(from), Some(to)) => (from, to),
        _ => {
            return Err(ConvertError::invalid_unit(
                Dimension::Temperature,
                from_unit,
                to_unit,
            ))
        }
    };

    Ok(round_result(from.convert_to(to, value)))
}
