//! Salary payment page
//!
//! Submission runs four gates in order: local amount bounds, a selected
//! project, the server's previous-balance verdict, and finally the write
//! itself. The first failing gate stops the flow; nothing later runs.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use consty_calc::{eligibility_from_balance, validate_payment, PaymentEligibility};
use consty_client::{ApiClient, ApiError, PaySalaryRequest};
use consty_core::error::ValidationErrors;
use consty_core::result::SubmitResult;
use consty_core::traits::{Id, Identifiable};
use consty_core::types::PayMonth;
use consty_models::{Employee, SalaryPayment};
use consty_state::{Action, Modal};

use super::SharedState;

pub struct SalaryPage {
    client: Arc<ApiClient>,
}

/// What is still owed for the month: the server's per-month record when
/// one exists, the full monthly salary otherwise.
pub(crate) fn remaining_salary(
    employees: &[Employee],
    payments: &[SalaryPayment],
    employee_id: Id,
    month: PayMonth,
) -> Option<f64> {
    payments
        .iter()
        .find(|p| p.employee_id == employee_id && p.month == month)
        .map(|p| p.remaining_salary)
        .or_else(|| {
            employees
                .iter()
                .find(|e| e.id() == Some(employee_id))
                .map(|e| e.salary)
        })
}

/// Turn a blocked eligibility verdict into form errors, one line per
/// outstanding month.
pub(crate) fn eligibility_errors(eligibility: &PaymentEligibility) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add_base(format!(
        "{:.2} unpaid across {} earlier month(s)",
        eligibility.total_unpaid,
        eligibility.unpaid_months.len()
    ));
    for unpaid in &eligibility.unpaid_months {
        errors.add_base(format!("{}: {:.2} outstanding", unpaid.month, unpaid.amount));
    }
    errors
}

impl SalaryPage {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Ask the server whether earlier months block this payment.
    pub async fn check_eligibility(
        &self,
        employee_id: Id,
        month: PayMonth,
        cancel: &CancellationToken,
    ) -> Result<PaymentEligibility, ApiError> {
        let balance = self
            .client
            .check_previous_balance(employee_id, month, cancel)
            .await?;
        Ok(eligibility_from_balance(&balance))
    }

    /// Full submit flow. On success the employee and payment lists are
    /// refetched and the modal closed.
    pub async fn submit_payment(
        &self,
        state: &SharedState,
        employee_id: Id,
        month: PayMonth,
        amount: f64,
        cancel: &CancellationToken,
    ) -> SubmitResult<()> {
        let (remaining, selected_project) = {
            let guard = state.lock().await;
            (
                remaining_salary(&guard.employees, &guard.salary_payments, employee_id, month),
                guard.selected_project,
            )
        };
        let Some(remaining) = remaining else {
            return SubmitResult::failure(ValidationErrors::single("employee", "not found"));
        };
        if let Err(errors) = validate_payment(amount, remaining, selected_project) {
            return SubmitResult::failure(errors);
        }
        let Some(project_id) = selected_project else {
            return SubmitResult::failure(ValidationErrors::single("project", "must be selected"));
        };

        let eligibility = match self.check_eligibility(employee_id, month, cancel).await {
            Ok(eligibility) => eligibility,
            Err(err) => return SubmitResult::failure_with_message(err.to_string()),
        };
        if !eligibility.allowed {
            return SubmitResult::failure(eligibility_errors(&eligibility));
        }

        let request = PaySalaryRequest {
            employee_id,
            project_id,
            month,
            amount,
        };
        if let Err(err) = self.client.pay_salary(&request, cancel).await {
            return SubmitResult::failure_with_message(err.to_string());
        }
        info!(employee_id, %month, amount, "salary payment recorded");

        match futures::try_join!(
            self.client.list_employees(cancel),
            self.client.list_salary_payments(cancel),
        ) {
            Ok((employees, payments)) => {
                let mut guard = state.lock().await;
                guard.dispatch(Action::ReplaceEmployees(employees));
                guard.dispatch(Action::ReplaceSalaryPayments(payments));
                guard.dispatch(Action::CloseModal(Modal::PaySalary));
            }
            Err(err) if err.is_cancelled() => {}
            Err(err) => warn!(error = %err, "refetch after payment failed"),
        }
        SubmitResult::success(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use consty_models::UnpaidMonth;
    use std::str::FromStr;

    fn employee(id: Id, salary: f64) -> Employee {
        Employee {
            id: Some(id),
            name: "Imane".into(),
            salary,
            ..Default::default()
        }
    }

    fn month(s: &str) -> PayMonth {
        PayMonth::from_str(s).unwrap()
    }

    #[test]
    fn test_remaining_prefers_month_record() {
        let employees = vec![employee(7, 3000.0)];
        let payments = vec![SalaryPayment {
            employee_id: 7,
            month: month("2025-05"),
            amount_paid: 1000.0,
            remaining_salary: 2000.0,
        }];

        let got = remaining_salary(&employees, &payments, 7, month("2025-05"));
        assert_eq!(got, Some(2000.0));
    }

    #[test]
    fn test_remaining_falls_back_to_full_salary() {
        let employees = vec![employee(7, 3000.0)];
        let got = remaining_salary(&employees, &[], 7, month("2025-06"));
        assert_eq!(got, Some(3000.0));
    }

    #[test]
    fn test_remaining_none_for_unknown_employee() {
        assert_eq!(remaining_salary(&[], &[], 99, month("2025-06")), None);
    }

    #[test]
    fn test_eligibility_errors_list_each_month() {
        let eligibility = PaymentEligibility {
            allowed: false,
            total_unpaid: 4500.0,
            unpaid_months: vec![
                UnpaidMonth {
                    month: month("2025-03"),
                    amount: 1500.0,
                },
                UnpaidMonth {
                    month: month("2025-04"),
                    amount: 3000.0,
                },
            ],
        };

        let errors = eligibility_errors(&eligibility);
        let messages = errors.full_messages();
        assert_eq!(messages.len(), 3);
        assert!(messages[0].contains("4500.00"));
        assert!(messages[1].contains("2025-03"));
        assert!(messages[2].contains("2025-04"));
    }
}
