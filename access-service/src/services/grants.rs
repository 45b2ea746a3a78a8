//! Role permission grants - the scoped permission map under edit.
//!
//! Operations follow the immutable-update style of the template editor: they
//! consume the current value and return the next one, and they never touch
//! anything outside the arguments they are given.

use std::collections::BTreeMap;

use crate::dtos::{RoleData, RolePermissionData};
use crate::error::RoleError;
use crate::models::{Permission, PermissionCategory, PermissionScope, Role};

/// Tri-state summary of one category, driving a checked / indeterminate /
/// unchecked indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryState {
    pub all_selected: bool,
    pub some_selected: bool,
}

/// Scope grants for a single role, keyed by permission id.
///
/// A `none` scope is never stored: absence is the canonical encoding, so the
/// in-memory map and the serialized rows agree by construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PermissionGrants {
    scopes: BTreeMap<i64, PermissionScope>,
}

impl PermissionGrants {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grants loaded from persisted `{ permission_id, scope }` rows.
    pub fn from_rows(rows: impl IntoIterator<Item = RolePermissionData>) -> Self {
        let mut grants = Self::new();
        for row in rows {
            grants = grants.set_scope(row.permission_id, row.scope);
        }
        grants
    }

    /// Set or clear the scope for one permission. Idempotent; `none` removes
    /// the grant.
    pub fn set_scope(mut self, permission_id: i64, scope: PermissionScope) -> Self {
        if scope.is_granted() {
            self.scopes.insert(permission_id, scope);
        } else {
            self.scopes.remove(&permission_id);
        }
        self
    }

    /// Grant a permission at the requested scope, clamped to `all` for
    /// categories whose permissions are binary.
    pub fn grant(self, permission: &Permission, scope: PermissionScope) -> Self {
        let scope = if scope.is_granted() && !permission.category.supports_scopes() {
            PermissionScope::All
        } else {
            scope
        };
        self.set_scope(permission.id, scope)
    }

    /// Scope held for a permission; absent grants read as `none`.
    pub fn scope_of(&self, permission_id: i64) -> PermissionScope {
        self.scopes.get(&permission_id).copied().unwrap_or_default()
    }

    pub fn is_granted(&self, permission_id: i64) -> bool {
        self.scope_of(permission_id).is_granted()
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Enable or disable every permission in one category. Grants outside the
    /// category are untouched.
    pub fn toggle_category(
        mut self,
        permissions: &[Permission],
        category: PermissionCategory,
        enable: bool,
    ) -> Self {
        let scope = if enable {
            PermissionScope::All
        } else {
            PermissionScope::None
        };
        for permission in permissions.iter().filter(|p| p.category == category) {
            self = self.set_scope(permission.id, scope);
        }
        self
    }

    /// Tri-state selection summary for one category.
    pub fn category_state(
        &self,
        permissions: &[Permission],
        category: PermissionCategory,
    ) -> CategoryState {
        let mut total = 0;
        let mut granted = 0;
        for permission in permissions.iter().filter(|p| p.category == category) {
            total += 1;
            if self.is_granted(permission.id) {
                granted += 1;
            }
        }
        CategoryState {
            all_selected: total > 0 && granted == total,
            some_selected: granted > 0,
        }
    }

    /// Iterate granted (permission id, scope) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (i64, PermissionScope)> + '_ {
        self.scopes.iter().map(|(&id, &scope)| (id, scope))
    }

    /// Serialized rows; `none` is encoded by omission.
    pub fn to_rows(&self) -> Vec<RolePermissionData> {
        self.iter()
            .map(|(permission_id, scope)| RolePermissionData {
                permission_id,
                scope,
            })
            .collect()
    }
}

/// In-memory role under edit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoleDraft {
    /// Server id when editing an existing role.
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub grants: PermissionGrants,
}

impl RoleDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft loaded from a persisted role and its grant rows.
    pub fn from_role(role: &Role, rows: impl IntoIterator<Item = RolePermissionData>) -> Self {
        Self {
            id: Some(role.id),
            name: role.name.clone(),
            description: role.description.clone().unwrap_or_default(),
            grants: PermissionGrants::from_rows(rows),
        }
    }

    /// Snapshot for persistence. Fails before any serialization when the
    /// role name is empty.
    pub fn to_payload(&self) -> Result<RoleData, RoleError> {
        if self.name.trim().is_empty() {
            return Err(RoleError::EmptyRoleName);
        }
        Ok(RoleData {
            name: self.name.clone(),
            description: if self.description.is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
            permissions: self.grants.to_rows(),
        })
    }
}
