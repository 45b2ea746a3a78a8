//! Access evaluation - effective scopes across a user's roles.
//!
//! Pure functions over in-memory state; the caller supplies the assignments
//! and grant maps it already holds.

use std::collections::BTreeMap;

use crate::models::{Permission, PermissionScope, UserRoleAssignment};
use crate::services::grants::PermissionGrants;

/// Highest-precedence scope a user holds for one permission across all of
/// their roles. `none` when no role grants it.
pub fn effective_scope(
    user_roles: &[UserRoleAssignment],
    role_grants: &BTreeMap<i64, PermissionGrants>,
    user_id: i64,
    permission_id: i64,
) -> PermissionScope {
    user_roles
        .iter()
        .filter(|a| a.user_id == user_id)
        .filter_map(|a| role_grants.get(&a.role_id))
        .map(|grants| grants.scope_of(permission_id))
        .max()
        .unwrap_or_default()
}

/// Full effective permission map for a user: per permission, the
/// highest-precedence scope across their roles.
pub fn effective_permissions(
    user_roles: &[UserRoleAssignment],
    role_grants: &BTreeMap<i64, PermissionGrants>,
    user_id: i64,
) -> BTreeMap<i64, PermissionScope> {
    let mut effective = BTreeMap::new();
    for assignment in user_roles.iter().filter(|a| a.user_id == user_id) {
        let Some(grants) = role_grants.get(&assignment.role_id) else {
            continue;
        };
        for (permission_id, scope) in grants.iter() {
            let held = effective.entry(permission_id).or_insert(PermissionScope::None);
            if scope > *held {
                *held = scope;
            }
        }
    }
    effective
}

/// Whether a held scope satisfies a requested one: `all` covers every
/// request, other scopes only cover themselves.
pub fn scope_satisfies(held: PermissionScope, requested: PermissionScope) -> bool {
    match held {
        PermissionScope::None => false,
        PermissionScope::All => true,
        held => held == requested,
    }
}

/// Case-insensitive substring search over code, description and category,
/// flattening the category view into one searchable list.
pub fn filter_by_query<'a>(permissions: &'a [Permission], query: &str) -> Vec<&'a Permission> {
    let needle = query.to_lowercase();
    permissions
        .iter()
        .filter(|p| {
            p.code.to_lowercase().contains(&needle)
                || p.description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
                || p.category.as_str().to_lowercase().contains(&needle)
        })
        .collect()
}
