//! Session user

use consty_core::traits::Id;
use serde::{Deserialize, Serialize};

/// Role carried by the session, used for synchronous admin gating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Manager,
    #[default]
    Employee,
    #[serde(other)]
    Unknown,
}

/// The authenticated user as reported by the session endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Id,
    pub username: String,
    #[serde(default)]
    pub role: UserRole,
    pub photo: Option<String>,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_gate() {
        let json = r#"{"id": 1, "username": "site_admin", "role": "admin", "photo": null}"#;
        let user: SessionUser = serde_json::from_str(json).unwrap();
        assert!(user.is_admin());

        let json = r#"{"id": 2, "username": "foreman", "role": "employee"}"#;
        let user: SessionUser = serde_json::from_str(json).unwrap();
        assert!(!user.is_admin());
    }
}
