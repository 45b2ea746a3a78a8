//! Persistence payloads for the roles API.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::PermissionScope;

/// Role create/update payload. Only granted permissions appear: a `none`
/// scope is encoded by leaving the row out entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RoleData {
    #[validate(length(min = 1, message = "Role name is required"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub permissions: Vec<RolePermissionData>,
}

/// One granted permission row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePermissionData {
    pub permission_id: i64,
    pub scope: PermissionScope,
}
