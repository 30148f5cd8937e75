//! Unit tables with conversion factors

use std::collections::HashMap;

use crate::dimension::Dimension;

/// Immutable mapping from unit name to scale factor for one linear
/// dimension.
///
/// Each factor expresses how many base units one unit of that kind
/// equals (`value_base = value * factor`). Factors are positive, names
/// are case-sensitive and unique, and the base unit is present with
/// factor 1. Tables are built once at startup and never mutated.
pub struct UnitTable {
    dimension: Dimension,
    base: &'static str,
    factors: HashMap<&'static str, f64>,
    order: Vec<&'static str>,
}

impl UnitTable {
    pub fn new(dimension: Dimension, base: &'static str) -> Self {
        UnitTable {
            dimension,
            base,
            factors: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a unit. Declaration order is kept for display.
    pub fn with_unit(mut self, name: &'static str, factor: f64) -> Self {
        debug_assert!(factor > 0.0, "unit factor must be positive: {}", name);
        debug_assert!(!self.factors.contains_key(name), "duplicate unit: {}", name);
        self.order.push(name);
        self.factors.insert(name, factor);
        self
    }

    /// The dimension this table belongs to
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Name of the base unit (factor 1)
    pub fn base(&self) -> &'static str {
        self.base
    }

    /// Scale factor relating `unit` to the base unit
    pub fn factor(&self, unit: &str) -> Option<f64> {
        self.factors.get(unit).copied()
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.factors.contains_key(unit)
    }

    /// All unit names, in declaration order
    pub fn units(&self) -> &[&'static str] {
        &self.order
    }
}
