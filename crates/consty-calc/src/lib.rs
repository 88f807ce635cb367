//! # consty-calc
//!
//! Pure derived-state calculators. Every function here is a stateless,
//! deterministic transform over records already fetched into memory:
//! project progress, resource leftovers and spend, salary payment
//! eligibility, and the cost-analysis breakdown.

pub mod cost_analysis;
pub mod progress;
pub mod resources;
pub mod salary;

pub use cost_analysis::{generate_cost_analysis, CostAnalysisRow, CostCategory};
pub use progress::compute_progress;
pub use resources::{
    leftover, money_spent, total_money_spent, validate_usage, ResourceSummary, UsageDelta,
    UsageLogEntry,
};
pub use salary::{can_submit, eligibility_from_balance, validate_payment, PaymentEligibility};
