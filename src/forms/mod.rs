//! Form definitions backing the search routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod search;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("city and query cannot be empty")]
    EmptyField,

    #[error("invalid platform: {0}")]
    InvalidPlatform(String),
}
