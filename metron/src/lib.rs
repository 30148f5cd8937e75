//! Metron - Unit Conversion Core
//!
//! Pure, deterministic conversion between units of length, weight, and
//! temperature. Three entry points, one per dimension, each mapping a
//! value and two unit names to a converted value or a typed failure.
//!
//! Dimensions:
//! - Length (millimeter through mile, base: meter)
//! - Weight (milligram through pound, base: kilogram)
//! - Temperature (Celsius, Fahrenheit, Kelvin)
//!
//! Length and weight are table-driven: each unit carries a factor to the
//! dimension's base unit, and conversion is a multiply and a divide.
//! Temperature transforms are affine, so the scales are a closed enum
//! with a formula per directed pair. Results are rounded to six decimal
//! places, ties away from zero.
//!
//! [`ConversionRequest`] is the seam for front ends: it takes the value
//! as raw text, owns the parse, and returns a displayable
//! [`Conversion`].

mod convert;
mod dimension;
mod error;
mod request;
mod temperature;
mod unit;
pub mod units;

pub use convert::{convert_length, convert_temperature, convert_weight};
pub use dimension::Dimension;
pub use error::ConvertError;
pub use request::{Conversion, ConversionRequest};
pub use temperature::TempScale;
pub use unit::UnitTable;
