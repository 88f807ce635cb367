//! Machine model
//!
//! Machines carry the same stock counters as materials and share the
//! leftover/money-spent derivations through [`StockTracked`].

use consty_core::traits::{Id, Identifiable, StockTracked};
use consty_core::types::de_f64_flex;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Machine entity
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Machine {
    pub id: Option<Id>,

    pub name: String,

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

impl Identifiable for Machine {
    fn id(&self) -> Option<Id> {
        self.id
    }
}

impl StockTracked for Machine {
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
        "machine"
    }
}

/// DTO for creating a machine
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMachineDto {
    #[validate(length(min = 1, max = 255, message = "is required"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub quantity: f64,

    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub unit_price: f64,

    pub supplier_id: Option<Id>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_tracked_impl() {
        let machine = Machine {
            id: Some(2),
            name: "Excavator".into(),
            quantity: 4.0,
            used: 1.0,
            damaged: 1.0,
            unit_price: 50000.0,
            supplier_id: None,
        };

        assert_eq!(machine.quantity(), 4.0);
        assert_eq!(machine.kind_name(), "machine");
    }
}
