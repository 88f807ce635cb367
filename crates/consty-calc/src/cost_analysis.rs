//! Budget vs. actual cost analysis
//!
//! Total project budget is allocated across four fixed categories, then
//! compared against actual spend: material consumption for Materials,
//! expenses bucketed by category name for the rest.

use consty_models::{Expense, Material};
use serde::Serialize;

use crate::resources::money_spent;

/// The fixed analysis categories with their budget shares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CostCategory {
    Materials,
    Labor,
    Equipment,
    Other,
}

impl CostCategory {
    pub const ALL: [CostCategory; 4] = [
        CostCategory::Materials,
        CostCategory::Labor,
        CostCategory::Equipment,
        CostCategory::Other,
    ];

    /// Budget share of the total (Materials 40%, Labor 30%, Equipment
    /// 20%, Other 10%)
    pub fn weight(self) -> f64 {
        match self {
            Self::Materials => 0.40,
            Self::Labor => 0.30,
            Self::Equipment => 0.20,
            Self::Other => 0.10,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Materials => "Materials",
            Self::Labor => "Labor",
            Self::Equipment => "Equipment",
            Self::Other => "Other",
        }
    }

    /// Bucket an expense by its category name, case-insensitive
    /// substring match.
    pub fn from_expense_category(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.contains("labor") {
            Self::Labor
        } else if name.contains("equipment") {
            Self::Equipment
        } else {
            Self::Other
        }
    }

    fn overrun_warning(self) -> &'static str {
        match self {
            Self::Materials => "Over budget: review material waste and supplier pricing",
            Self::Labor => "Over budget: review overtime and crew allocation",
            Self::Equipment => "Over budget: review equipment rental and maintenance",
            Self::Other => "Over budget: review miscellaneous spending",
        }
    }
}

/// One row of the cost-analysis table
#[derive(Debug, Clone, Serialize)]
pub struct CostAnalysisRow {
    pub category: CostCategory,
    pub budget: f64,
    pub actual: f64,
    /// Absolute deviation from budget in whole percent
    pub variance: f64,
    pub recommendation: &'static str,
}

/// Allocate the total budget across the fixed categories.
///
/// Weights are normalized to sum to 1 and each share rounded to whole
/// units; rounding drift is folded into the last category so the shares
/// sum exactly to `round(total)`.
pub fn allocate_budget(total: f64) -> [(CostCategory, f64); 4] {
    let total = if total.is_finite() && total > 0.0 {
        total
    } else {
        0.0
    };
    let weight_sum: f64 = CostCategory::ALL.iter().map(|c| c.weight()).sum();

    let mut shares = [(CostCategory::Materials, 0.0); 4];
    let mut allocated = 0.0;
    for (i, category) in CostCategory::ALL.iter().enumerate() {
        let share = if i == CostCategory::ALL.len() - 1 {
            total.round() - allocated
        } else {
            (total * category.weight() / weight_sum).round()
        };
        allocated += share;
        shares[i] = (*category, share);
    }
    shares
}

/// Build the full budget-vs-actual breakdown.
pub fn generate_cost_analysis(
    total_budget: f64,
    materials: &[Material],
    expenses: &[Expense],
) -> Vec<CostAnalysisRow> {
    let materials_actual: f64 = materials.iter().map(|m| money_spent(m)).sum();

    let mut labor_actual = 0.0;
    let mut equipment_actual = 0.0;
    let mut other_actual = 0.0;
    for expense in expenses {
        let name = expense.category.as_deref().unwrap_or("");
        match CostCategory::from_expense_category(name) {
            CostCategory::Labor => labor_actual += expense.amount,
            CostCategory::Equipment => equipment_actual += expense.amount,
            _ => other_actual += expense.amount,
        }
    }

    allocate_budget(total_budget)
        .into_iter()
        .map(|(category, budget)| {
            let actual = match category {
                CostCategory::Materials => materials_actual,
                CostCategory::Labor => labor_actual,
                CostCategory::Equipment => equipment_actual,
                CostCategory::Other => other_actual,
            };
            let variance = if budget > 0.0 {
                ((actual - budget) / budget * 100.0).round().abs()
            } else {
                0.0
            };
            let recommendation = if actual > budget {
                category.overrun_warning()
            } else {
                "On track"
            };
            CostAnalysisRow {
                category,
                budget,
                actual,
                variance,
                recommendation,
            }
        })
        .collect()
}
