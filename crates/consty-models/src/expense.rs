//! Expense model

use chrono::NaiveDate;
use consty_core::traits::{Id, Identifiable, ProjectScoped};
use consty_core::types::de_f64_flex;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Expense entity, feeding the cost-analysis aggregation
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Expense {
    pub id: Option<Id>,

    pub project_id: Option<Id>,

    pub category_id: Option<Id>,

    /// Category name as entered; cost analysis buckets by substring match
    pub category: Option<String>,

    #[serde(default, deserialize_with = "de_f64_flex")]
    pub amount: f64,

    pub spent_at: Option<NaiveDate>,

    pub description: Option<String>,
}

impl Identifiable for Expense {
    fn id(&self) -> Option<Id> {
        self.id
    }
}

impl ProjectScoped for Expense {
    fn project_id(&self) -> Option<Id> {
        self.project_id
    }
}

/// DTO for recording an expense
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateExpenseDto {
    pub project_id: Id,

    pub category_id: Option<Id>,

    #[validate(range(min = 0.01, message = "must be positive"))]
    pub amount: f64,

    pub spent_at: Option<NaiveDate>,

    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize() {
        let json = r#"{
            "id": 11,
            "project_id": 3,
            "category": "Equipment rental",
            "amount": "750.25",
            "spent_at": "2025-04-02"
        }"#;

        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.amount, 750.25);
        assert_eq!(expense.category.as_deref(), Some("Equipment rental"));
        assert!(expense.belongs_to(3));
    }
}
