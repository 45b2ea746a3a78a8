use portal_core::error::AppError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EditorError {
    #[error("Step title is required")]
    EmptyStepTitle,

    #[error("Template name is required")]
    EmptyTemplateName,

    #[error("At least one step is required")]
    NoSteps,

    #[error("Step index {index} out of bounds for {len} steps")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl From<EditorError> for AppError {
    fn from(err: EditorError) -> Self {
        AppError::Validation(err.to_string())
    }
}
