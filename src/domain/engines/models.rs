//! Engine models.

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::domain::engines::data::DEFAULT_IMAGE;

/// Engine identifier.
///
/// Admin-created ids derive from the creation timestamp's millisecond value,
/// matching the ids the shop has always written. Two engines created within
/// the same millisecond would collide; the catalog does not index-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EngineId(pub i64);

impl EngineId {
    /// Derive an id from a creation timestamp.
    #[must_use]
    pub fn from_timestamp(timestamp: Timestamp) -> Self {
        Self(timestamp.as_millisecond())
    }
}

impl Display for EngineId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// Engine type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineType {
    /// Дизельный
    Diesel,
    /// Электрический
    Electric,
    /// Бензиновый
    Gasoline,
}

impl EngineType {
    /// All types, in the order the storefront filter lists them.
    pub const ALL: [Self; 3] = [Self::Diesel, Self::Electric, Self::Gasoline];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Diesel => "Дизельный",
            Self::Electric => "Электрический",
            Self::Gasoline => "Бензиновый",
        }
    }
}

/// Technical specifications shown on the product card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineSpecs {
    /// Cylinder count; zero for electric motors.
    pub cylinders: u32,
    /// Displacement, free text (e.g. "11.15 л", "N/A").
    pub displacement: String,
    /// Fuel, free text.
    pub fuel_type: String,
    /// Cooling, free text.
    pub cooling: String,
}

/// A catalog product: an industrial motor for sale.
///
/// Serializes to the exact JSON shape persisted under `engines` (and inside
/// carts and order item snapshots).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engine {
    /// Unique within the active catalog view.
    pub id: EngineId,
    /// Display name.
    pub name: String,
    /// Engine type.
    #[serde(rename = "type")]
    pub engine_type: EngineType,
    /// Manufacturer name, also a filter key.
    pub manufacturer: String,
    /// Power in horsepower.
    pub power: u32,
    /// Price in whole roubles.
    pub price: u64,
    /// Product image URL.
    pub image: String,
    /// Technical specifications.
    pub specs: EngineSpecs,
}

/// Admin form payload for a new engine, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineDraft {
    /// Display name.
    pub name: String,
    /// Engine type.
    pub engine_type: EngineType,
    /// Manufacturer name.
    pub manufacturer: String,
    /// Power in horsepower.
    pub power: u32,
    /// Price in whole roubles.
    pub price: u64,
    /// Image URL; the stock image is used when left blank.
    pub image: Option<String>,
    /// Technical specifications.
    pub specs: EngineSpecs,
}

impl EngineDraft {
    /// Materialize the draft with an assigned id, filling in the stock image
    /// when none was provided.
    #[must_use]
    pub fn into_engine(self, id: EngineId) -> Engine {
        Engine {
            id,
            name: self.name,
            engine_type: self.engine_type,
            manufacturer: self.manufacturer,
            power: self.power,
            price: self.price,
            image: self.image.unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
            specs: self.specs,
        }
    }
}
