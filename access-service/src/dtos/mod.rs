pub mod role;

pub use role::{RoleData, RolePermissionData};
