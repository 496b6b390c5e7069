use serde::{Deserialize, Serialize};

/// Role a user holds in the system.
///
/// Managers create projects, staffing, tasks, and invoices; contributors
/// log time against tasks they are assigned to. Enforcement of who may call
/// what lives in the auth layer, not in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Manager,
    Contributor,
}

/// Domain model representing a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}
