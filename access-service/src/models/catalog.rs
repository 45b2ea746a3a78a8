//! Built-in permission catalog.
//!
//! Mirrors the seeded permission table so callers can validate codes and
//! render descriptions without a round trip to the API.

use super::permission::PermissionCategory;

const CATALOG: [(&str, &str, PermissionCategory); 13] = [
    ("users.create", "Create users", PermissionCategory::Users),
    ("users.read", "View users", PermissionCategory::Users),
    ("users.update", "Update users", PermissionCategory::Users),
    ("users.delete", "Delete users", PermissionCategory::Users),
    ("projects.create", "Create projects", PermissionCategory::Projects),
    ("projects.read", "View projects", PermissionCategory::Projects),
    ("projects.update", "Update projects", PermissionCategory::Projects),
    ("projects.delete", "Delete projects", PermissionCategory::Projects),
    ("projects.approve", "Approve projects", PermissionCategory::Projects),
    ("files.upload", "Upload files", PermissionCategory::Files),
    ("files.download", "Download files", PermissionCategory::Files),
    ("files.delete", "Delete files", PermissionCategory::Files),
    ("system.admin", "System administration", PermissionCategory::System),
];

/// All built-in permission codes.
pub fn permission_codes() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|(code, _, _)| *code)
}

pub fn is_valid_code(code: &str) -> bool {
    CATALOG.iter().any(|(c, _, _)| *c == code)
}

pub fn description_of(code: &str) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, description, _)| *description)
}

pub fn category_of(code: &str) -> Option<PermissionCategory> {
    CATALOG
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, _, category)| *category)
}
