use std::collections::HashMap;

use thiserror::Error;

/// Map of field name to the validation messages reported for it, as returned
/// by the portal API on HTTP 422 responses.
pub type FieldErrors = HashMap<String, Vec<String>>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Validation failed")]
    FieldValidation(FieldErrors),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl AppError {
    /// Per-field messages when the error carries them, for form display.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AppError::FieldValidation(fields) => Some(fields),
            _ => None,
        }
    }

    /// Whether the caller may retry the same payload unchanged. Only save
    /// failures qualify; validation errors need a corrected payload first.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Persistence(_))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errs: validator::ValidationErrors) -> Self {
        let fields = errs
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let messages = errors
                    .iter()
                    .map(|e| match &e.message {
                        Some(message) => message.to_string(),
                        None => e.code.to_string(),
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();
        AppError::FieldValidation(fields)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Persistence(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Debug, Validate)]
    struct Form {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
    }

    #[test]
    fn test_validator_errors_become_field_map() {
        let form = Form {
            name: String::new(),
        };
        let err: AppError = form.validate().unwrap_err().into();

        let fields = err.field_errors().expect("field errors");
        assert_eq!(fields["name"], vec!["Name is required".to_string()]);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_persistence_errors_are_retryable() {
        let err = AppError::Persistence("upstream unavailable".into());
        assert!(err.is_retryable());
        assert!(err.field_errors().is_none());
    }
}
