//! Material model

use consty_core::traits::{Id, Identifiable, StockTracked};
use consty_core::types::de_f64_flex;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Material entity
///
/// `quantity` is the total ever acquired; `used` and `damaged` are
/// cumulative counters, so the usable remainder is derived, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Material {
    pub id: Option<Id>,

    pub name: String,

    /// Unit label as entered (bags, tons, pieces)
    pub unit: Option<String>,

    #[serde(default, deserialize_with = "de_f64_flex")]
    pub quantity: f64,

    #[serde(default, deserialize_with = "de_f64_flex")]
    pub used: f64,

    #[serde(default, deserialize_with = "de_f64_flex")]
    pub damaged: f64,

    #[serde(default, deserialize_with = "de_f64_flex")]
    pub unit_price: f64,

    pub supplier_id: Option<Id>,
}

impl Identifiable for Material {
    fn id(&self) -> Option<Id> {
        self.id
    }
}

impl StockTracked for Material {
    fn quantity(&self) -> f64 {
        self.quantity
    }

    fn used(&self) -> f64 {
        self.used
    }

    fn damaged(&self) -> f64 {
        self.damaged
    }

    fn unit_price(&self) -> f64 {
        self.unit_price
    }

    fn kind_name(&self) -> &'static str {
        "material"
    }
}

/// DTO for creating a material
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMaterialDto {
    #[validate(length(min = 1, max = 255, message = "is required"))]
    pub name: String,

    pub unit: Option<String>,

    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub quantity: f64,

    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub unit_price: f64,

    pub supplier_id: Option<Id>,
}
