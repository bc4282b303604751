//! Catalog filtering.

use std::ops::RangeInclusive;

use crate::domain::engines::models::{Engine, EngineType};

/// Power slider bounds on the storefront.
pub const POWER_RANGE: RangeInclusive<u32> = 0..=400;

/// Read-side catalog projection: three independent predicates ANDed together.
///
/// `None` disables a predicate (the storefront's «all» option); the power
/// range is inclusive on both bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Match a single engine type, or any when `None`.
    pub engine_type: Option<EngineType>,
    /// Match a single manufacturer exactly, or any when `None`.
    pub manufacturer: Option<String>,
    /// Inclusive horsepower range.
    pub power: RangeInclusive<u32>,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            engine_type: None,
            manufacturer: None,
            power: POWER_RANGE,
        }
    }
}

impl CatalogFilter {
    /// Whether `engine` passes every enabled predicate.
    #[must_use]
    pub fn matches(&self, engine: &Engine) -> bool {
        let type_match = self
            .engine_type
            .is_none_or(|engine_type| engine.engine_type == engine_type);

        let manufacturer_match = self
            .manufacturer
            .as_deref()
            .is_none_or(|manufacturer| engine.manufacturer == manufacturer);

        let power_match = self.power.contains(&engine.power);

        type_match && manufacturer_match && power_match
    }
}
