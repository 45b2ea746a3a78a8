//! Role model - named permission bundles assignable to users.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role entity with denormalized usage counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// System roles ship with the portal and cannot be deleted.
    #[serde(default)]
    pub is_system_role: bool,
    #[serde(default)]
    pub user_count: u32,
    #[serde(default)]
    pub permission_count: u32,
    pub created_at: DateTime<Utc>,
}

impl Role {
    pub fn is_deletable(&self) -> bool {
        !self.is_system_role
    }
}

/// Many-to-many link between a user and a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRoleAssignment {
    pub user_id: i64,
    pub role_id: i64,
}

impl UserRoleAssignment {
    pub fn new(user_id: i64, role_id: i64) -> Self {
        Self { user_id, role_id }
    }
}
