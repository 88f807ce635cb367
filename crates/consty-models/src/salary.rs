//! Salary payment records and the previous-balance verdict

use consty_core::traits::Id;
use consty_core::types::{de_f64_flex, PayMonth};
use serde::{Deserialize, Serialize};

/// One payment event for an (employee, month) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryPayment {
    pub employee_id: Id,

    pub month: PayMonth,

    #[serde(default, deserialize_with = "de_f64_flex")]
    pub amount_paid: f64,

    /// Portion of the monthly salary still owed after this payment
    #[serde(default, deserialize_with = "de_f64_flex")]
    pub remaining_salary: f64,
}

impl SalaryPayment {
    pub fn is_settled(&self) -> bool {
        self.remaining_salary <= 0.0
    }
}

/// A month with an outstanding balance, as reported by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnpaidMonth {
    pub month: PayMonth,

    #[serde(default, deserialize_with = "de_f64_flex")]
    pub amount: f64,
}

/// Verdict of the remote `check_previous_balance` endpoint.
///
/// Which months count and how ties break is the server's contract; this
/// struct carries its answer verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreviousBalance {
    #[serde(default)]
    pub has_balance: bool,

    #[serde(default, deserialize_with = "de_f64_flex")]
    pub unpaid_balance: f64,

    #[serde(default)]
    pub unpaid_months: Vec<UnpaidMonth>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_payment() {
        let json = r#"{
            "employee_id": 7,
            "month": "2025-05",
            "amount_paid": "1500",
            "remaining_salary": 1000
        }"#;

        let payment: SalaryPayment = serde_json::from_str(json).unwrap();
        assert_eq!(payment.month.to_string(), "2025-05");
        assert_eq!(payment.amount_paid, 1500.0);
        assert!(!payment.is_settled());
    }

    #[test]
    fn test_deserialize_balance_verdict() {
        let json = r#"{
            "has_balance": true,
            "unpaid_balance": "800",
            "unpaid_months": [
                {"month": "2025-03", "amount": 300},
                {"month": "2025-04", "amount": "500"}
            ]
        }"#;

        let balance: PreviousBalance = serde_json::from_str(json).unwrap();
        assert!(balance.has_balance);
        assert_eq!(balance.unpaid_balance, 800.0);
        assert_eq!(balance.unpaid_months.len(), 2);
        assert_eq!(balance.unpaid_months[1].amount, 500.0);
    }

    #[test]
    fn test_balance_defaults_empty() {
        let balance: PreviousBalance = serde_json::from_str("{}").unwrap();
        assert!(!balance.has_balance);
        assert_eq!(balance.unpaid_balance, 0.0);
        assert!(balance.unpaid_months.is_empty());
    }
}
