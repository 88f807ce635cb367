//! Salary payment eligibility and bounds checks
//!
//! The balance lookup itself is the server's job; the only local logic is
//! turning its verdict into an allow/deny and bounds-checking the amount
//! before any network call.

use consty_core::error::ValidationErrors;
use consty_core::traits::Id;
use consty_models::{PreviousBalance, UnpaidMonth};
use serde::Serialize;

/// Outcome of an eligibility check for one (employee, month)
#[derive(Debug, Clone, Serialize)]
pub struct PaymentEligibility {
    pub allowed: bool,
    /// Unpaid months exactly as the server reported them
    pub unpaid_months: Vec<UnpaidMonth>,
    pub total_unpaid: f64,
}

/// Interpret the remote balance verdict.
///
/// Payment is blocked while the server reports any earlier balance; the
/// unpaid-months list is surfaced verbatim, not re-derived.
pub fn eligibility_from_balance(balance: &PreviousBalance) -> PaymentEligibility {
    let blocked = balance.has_balance || balance.unpaid_balance > 0.0;
    PaymentEligibility {
        allowed: !blocked,
        unpaid_months: balance.unpaid_months.clone(),
        total_unpaid: balance.unpaid_balance,
    }
}

/// Local bounds checks run before the payment request is sent
pub fn validate_payment(
    amount: f64,
    remaining_salary: f64,
    project_id: Option<Id>,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if amount < 1.0 {
        errors.add("amount", "must be at least 1");
    } else if amount > remaining_salary {
        errors.add("amount", "exceeds the remaining salary");
    }
    if project_id.is_none() {
        errors.add("project", "must be selected");
    }

    errors.into_result()
}

/// Whether the pay button is enabled. All four conditions gate
/// independently: eligibility, minimum amount, remaining-salary cap, and
/// a selected project.
pub fn can_submit(can_pay: bool, amount: f64, remaining_salary: f64, project_id: Option<Id>) -> bool {
    can_pay && validate_payment(amount, remaining_salary, project_id).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use consty_core::types::PayMonth;

    fn blocked_balance() -> PreviousBalance {
        PreviousBalance {
            has_balance: true,
            unpaid_balance: 800.0,
            unpaid_months: vec![
                UnpaidMonth {
                    month: "2025-04".parse::<PayMonth>().unwrap(),
                    amount: 500.0,
                },
                UnpaidMonth {
                    month: "2025-03".parse::<PayMonth>().unwrap(),
                    amount: 300.0,
                },
            ],
        }
    }

    #[test]
    fn test_clear_balance_allows_payment() {
        let eligibility = eligibility_from_balance(&PreviousBalance::default());
        assert!(eligibility.allowed);
        assert!(eligibility.unpaid_months.is_empty());
    }

    #[test]
    fn test_has_balance_blocks() {
        let eligibility = eligibility_from_balance(&blocked_balance());
        assert!(!eligibility.allowed);
        assert_eq!(eligibility.total_unpaid, 800.0);
        // Server order preserved, not re-sorted.
        assert_eq!(eligibility.unpaid_months[0].month.to_string(), "2025-04");
    }

    #[test]
    fn test_positive_balance_blocks_even_without_flag() {
        let balance = PreviousBalance {
            has_balance: false,
            unpaid_balance: 0.01,
            unpaid_months: vec![],
        };
        assert!(!eligibility_from_balance(&balance).allowed);
    }

    #[test]
    fn test_validate_payment_bounds() {
        assert!(validate_payment(100.0, 500.0, Some(1)).is_ok());

        let errors = validate_payment(0.5, 500.0, Some(1)).unwrap_err();
        assert!(errors.has_error("amount"));

        let errors = validate_payment(600.0, 500.0, Some(1)).unwrap_err();
        assert!(errors.has_error("amount"));

        let errors = validate_payment(100.0, 500.0, None).unwrap_err();
        assert!(errors.has_error("project"));
    }

    #[test]
    fn test_can_submit_four_independent_gates() {
        // Every gate satisfied.
        assert!(can_submit(true, 100.0, 500.0, Some(1)));

        // Each gate failing alone disables submission.
        assert!(!can_submit(false, 100.0, 500.0, Some(1)));
        assert!(!can_submit(true, 0.0, 500.0, Some(1)));
        assert!(!can_submit(true, 600.0, 500.0, Some(1)));
        assert!(!can_submit(true, 100.0, 500.0, None));
    }
}
