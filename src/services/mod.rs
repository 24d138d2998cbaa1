use thiserror::Error;

pub mod main;
pub mod search;

/// User-facing message shown for any failed search.
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to fetch deals. Please try again.";

/// Errors surfaced by the service layer to route handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Submitted search parameters were rejected.
    #[error("{0}")]
    Form(String),

    /// The outbound search call failed; the cause is logged, not exposed.
    #[error("{}", SEARCH_FAILED_MESSAGE)]
    SearchFailed,
}

pub type ServiceResult<T> = Result<T, ServiceError>;
