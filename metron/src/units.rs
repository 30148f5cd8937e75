//! Unit table definitions for the linear dimensions
//!
//! Temperature is not here: its transforms are affine, not purely
//! multiplicative, so it is a closed enum in [`crate::temperature`]
//! rather than a factor table.

use std::sync::LazyLock;

use crate::dimension::Dimension;
use crate::unit::UnitTable;

/// Length units, factors in meters
pub static LENGTH: LazyLock<UnitTable> = LazyLock::new(|| {
    UnitTable::new(Dimension::Length, "meter")
        .with_unit("millimeter", 0.001)
        .with_unit("centimeter", 0.01)
        .with_unit("meter", 1.0)
        .with_unit("kilometer", 1000.0)
        .with_unit("inch", 0.0254)
        .with_unit("foot", 0.3048)
        .with_unit("yard", 0.9144)
        .with_unit("mile", 1609.34)
});

/// Weight units, factors in kilograms
pub static WEIGHT: LazyLock<UnitTable> = LazyLock::new(|| {
    UnitTable::new(Dimension::Weight, "kilogram")
        .with_unit("milligram", 0.000001)
        .with_unit("gram", 0.001)
        .with_unit("kilogram", 1.0)
        .with_unit("ounce", 0.0283495)
        .with_unit("pound", 0.453592)
});
