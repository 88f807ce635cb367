//! Employee endpoints

use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use consty_core::traits::Id;
use consty_models::{CreateEmployeeDto, Employee};

use crate::envelope::MutationResponse;
use crate::{ApiClient, ApiError};

#[derive(Debug, Deserialize)]
struct EmployeesEnvelope {
    #[serde(default)]
    employees: Vec<Employee>,
}

impl ApiClient {
    pub async fn list_employees(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<Employee>, ApiError> {
        let request = self.http.get(self.endpoint("employees"));
        let envelope: EmployeesEnvelope = self.fetch(request, cancel).await?;
        Ok(envelope.employees)
    }

    pub async fn create_employee(
        &self,
        dto: &CreateEmployeeDto,
        cancel: &CancellationToken,
    ) -> Result<MutationResponse, ApiError> {
        let request = self.http.post(self.endpoint("employees")).json(dto);
        self.mutate(request, cancel).await
    }

    pub async fn delete_employee(
        &self,
        id: Id,
        cancel: &CancellationToken,
    ) -> Result<MutationResponse, ApiError> {
        let request = self
            .http
            .delete(self.endpoint("employees"))
            .query(&[("id", id)]);
        self.mutate(request, cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_envelope() {
        let json = r#"{"employees": [
            {"id": 7, "name": "A. Mason", "position": "foreman", "salary": "2500", "project_id": 1}
        ]}"#;
        let envelope: EmployeesEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.employees[0].salary, 2500.0);
    }
}
