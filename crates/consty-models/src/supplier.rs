//! Supplier model

use consty_core::traits::{Id, Identifiable};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Supplier entity, referenced by materials and machines
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Supplier {
    pub id: Option<Id>,
    pub name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl Identifiable for Supplier {
    fn id(&self) -> Option<Id> {
        self.id
    }
}

/// DTO for creating a supplier
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSupplierDto {
    #[validate(length(min = 1, max = 255, message = "is required"))]
    pub name: String,

    pub contact_person: Option<String>,
    pub phone: Option<String>,

    #[validate(email(message = "is not a valid email"))]
    pub email: Option<String>,

    pub address: Option<String>,
}
