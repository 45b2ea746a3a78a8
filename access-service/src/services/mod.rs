pub mod access;
pub mod grants;
pub mod store;

pub use access::{effective_permissions, effective_scope, filter_by_query, scope_satisfies};
pub use grants::{CategoryState, PermissionGrants, RoleDraft};
pub use store::{HttpRoleStore, RoleStore};
