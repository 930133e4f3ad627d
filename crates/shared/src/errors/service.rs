use crate::errors::repository::RepositoryError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Sales for more than one band today: {0:?}")]
    MixedBands(Vec<String>),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Flat view over the nested error enums, for callers that only need to branch
/// on what went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    InsufficientStock,
    InvariantViolation,
    MixedBands,
    Storage,
    Internal,
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::Sqlx(_) => ErrorKind::Storage,
                RepositoryError::NotFound(_) => ErrorKind::NotFound,
                RepositoryError::InsufficientStock { .. } => ErrorKind::InsufficientStock,
                RepositoryError::InvariantViolation { .. } => ErrorKind::InvariantViolation,
            },
            ServiceError::Validation(_) => ErrorKind::Validation,
            ServiceError::MixedBands(_) => ErrorKind::MixedBands,
            ServiceError::Internal(_) => ErrorKind::Internal,
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages = Vec::new();

        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| match error.code.as_ref() {
                        "length" => "Invalid length".to_string(),
                        "range" => "Value out of range".to_string(),
                        "custom" => "Custom validation failed".to_string(),
                        _ => format!("Invalid {field}"),
                    });
                messages.push(format!("{field}: {message}"));
            }
        }

        messages.sort();
        ServiceError::Validation(messages)
    }
}
