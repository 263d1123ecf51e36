use thiserror::Error;

use crate::edit::FieldErrors;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Session storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

#[derive(Error, Debug, PartialEq)]
pub enum EditError {
    #[error("Please fix the errors before saving: {0}")]
    Invalid(FieldErrors),
}
