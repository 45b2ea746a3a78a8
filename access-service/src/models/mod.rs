pub mod catalog;
pub mod permission;
pub mod role;

pub use permission::{Permission, PermissionCategory, PermissionScope};
pub use role::{Role, UserRoleAssignment};
