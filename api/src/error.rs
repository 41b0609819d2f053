use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

/// One failed constraint on one input field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CoreError {
    /// Input violated the stage schema. Itemized per field so the caller
    /// can surface every problem at once.
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    /// The requested root record does not exist. Absent upstream chain
    /// records are encoded as `None`, never as this error.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Unexpected persistence failure. Surfaced opaquely, never retried.
    #[error("database error: {0}")]
    Db(#[from] DbErr),
}

pub type CoreResult<T> = Result<T, CoreError>;
