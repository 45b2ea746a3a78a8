use portal_core::error::AppError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RoleError {
    #[error("Role name is required")]
    EmptyRoleName,

    #[error("System roles cannot be deleted")]
    SystemRoleImmutable,
}

impl From<RoleError> for AppError {
    fn from(err: RoleError) -> Self {
        AppError::Validation(err.to_string())
    }
}
