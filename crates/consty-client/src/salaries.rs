//! Salary endpoints
//!
//! `check_previous_balance` is the authority on whether earlier months
//! block a payment; its verdict is passed through untouched.

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use consty_core::traits::Id;
use consty_core::types::PayMonth;
use consty_models::{PreviousBalance, SalaryPayment};

use crate::envelope::MutationResponse;
use crate::{ApiClient, ApiError};

#[derive(Debug, Deserialize)]
struct SalariesEnvelope {
    #[serde(default)]
    salaries: Vec<SalaryPayment>,
}

/// Body of a salary payment write
#[derive(Debug, Clone, Serialize)]
pub struct PaySalaryRequest {
    pub employee_id: Id,
    pub project_id: Id,
    pub month: PayMonth,
    pub amount: f64,
}

impl ApiClient {
    pub async fn list_salary_payments(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<SalaryPayment>, ApiError> {
        let request = self.http.get(self.endpoint("salaries"));
        let envelope: SalariesEnvelope = self.fetch(request, cancel).await?;
        Ok(envelope.salaries)
    }

    /// Ask the server whether earlier months leave an unpaid balance for
    /// this employee.
    pub async fn check_previous_balance(
        &self,
        employee_id: Id,
        month: PayMonth,
        cancel: &CancellationToken,
    ) -> Result<PreviousBalance, ApiError> {
        let request = self
            .http
            .get(self.endpoint("check_previous_balance"))
            .query(&[
                ("employee_id", employee_id.to_string()),
                ("month", month.to_string()),
            ]);
        self.fetch(request, cancel).await
    }

    pub async fn pay_salary(
        &self,
        payment: &PaySalaryRequest,
        cancel: &CancellationToken,
    ) -> Result<MutationResponse, ApiError> {
        let request = self.http.post(self.endpoint("pay_salary")).json(payment);
        self.mutate(request, cancel).await
    }
}
