//! Expense endpoints

use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use consty_core::traits::Id;
use consty_models::{CreateExpenseDto, Expense};

use crate::envelope::MutationResponse;
use crate::{ApiClient, ApiError};

#[derive(Debug, Deserialize)]
struct ExpensesEnvelope {
    #[serde(default)]
    expenses: Vec<Expense>,
}

impl ApiClient {
    pub async fn list_expenses(&self, cancel: &CancellationToken) -> Result<Vec<Expense>, ApiError> {
        let request = self.http.get(self.endpoint("expenses"));
        let envelope: ExpensesEnvelope = self.fetch(request, cancel).await?;
        Ok(envelope.expenses)
    }

    pub async fn create_expense(
        &self,
        dto: &CreateExpenseDto,
        cancel: &CancellationToken,
    ) -> Result<MutationResponse, ApiError> {
        let request = self.http.post(self.endpoint("expenses")).json(dto);
        self.mutate(request, cancel).await
    }

    pub async fn delete_expense(
        &self,
        id: Id,
        cancel: &CancellationToken,
    ) -> Result<MutationResponse, ApiError> {
        let request = self
            .http
            .delete(self.endpoint("expenses"))
            .query(&[("id", id)]);
        self.mutate(request, cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_envelope() {
        let json = r#"{"expenses": [
            {"id": 11, "project_id": 3, "category": "Labor crew", "amount": "450"}
        ]}"#;
        let envelope: ExpensesEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.expenses[0].amount, 450.0);
    }
}
