//! Permission model - categorized permission codes and access scopes.

use serde::{Deserialize, Serialize};

/// Breadth of data a granted permission applies to.
///
/// The derived order is the precedence lattice used when combining grants
/// across roles: `none < own < department < all`. A `none` scope is
/// semantically the same as the grant being absent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PermissionScope {
    #[default]
    None,
    Own,
    Department,
    All,
}

impl PermissionScope {
    pub fn is_granted(&self) -> bool {
        *self != PermissionScope::None
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionScope::None => "none",
            PermissionScope::Own => "own",
            PermissionScope::Department => "department",
            PermissionScope::All => "all",
        }
    }
}

impl std::fmt::Display for PermissionScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category a permission belongs to. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermissionCategory {
    Projects,
    Users,
    Files,
    Analytics,
    Settings,
    System,
    Roles,
}

impl PermissionCategory {
    pub const ALL: [PermissionCategory; 7] = [
        PermissionCategory::Projects,
        PermissionCategory::Users,
        PermissionCategory::Files,
        PermissionCategory::Analytics,
        PermissionCategory::Settings,
        PermissionCategory::System,
        PermissionCategory::Roles,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionCategory::Projects => "Projects",
            PermissionCategory::Users => "Users",
            PermissionCategory::Files => "Files",
            PermissionCategory::Analytics => "Analytics",
            PermissionCategory::Settings => "Settings",
            PermissionCategory::System => "System",
            PermissionCategory::Roles => "Roles",
        }
    }

    /// Display label for the portal UI.
    pub fn label(&self) -> &'static str {
        match self {
            PermissionCategory::Roles => "Roles & Permissions",
            other => other.as_str(),
        }
    }

    /// Only Projects, Users and Files permissions carry a scope narrower than
    /// `all`; permissions in every other category are binary.
    pub fn supports_scopes(&self) -> bool {
        matches!(
            self,
            PermissionCategory::Projects | PermissionCategory::Users | PermissionCategory::Files
        )
    }
}

impl std::fmt::Display for PermissionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Permission entity from the portal API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    pub id: i64,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: PermissionCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_precedence_order() {
        assert!(PermissionScope::None < PermissionScope::Own);
        assert!(PermissionScope::Own < PermissionScope::Department);
        assert!(PermissionScope::Department < PermissionScope::All);
    }

    #[test]
    fn test_scope_serializes_lowercase() {
        let json = serde_json::to_string(&PermissionScope::Department).unwrap();
        assert_eq!(json, "\"department\"");
    }

    #[test]
    fn test_scoped_categories() {
        let scoped: Vec<_> = PermissionCategory::ALL
            .into_iter()
            .filter(|c| c.supports_scopes())
            .collect();
        assert_eq!(
            scoped,
            [
                PermissionCategory::Projects,
                PermissionCategory::Users,
                PermissionCategory::Files
            ]
        );
    }
}
