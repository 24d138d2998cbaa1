use thiserror::Error;

/// Failures of the outbound search call.
#[derive(Debug, Error)]
pub enum SearchClientError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Search service returned HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Unable to decode search response: {0}")]
    ResponseParse(String),
}

pub type SearchClientResult<T> = Result<T, SearchClientError>;

impl From<reqwest::Error> for SearchClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SearchClientError::ResponseParse(err.to_string())
        } else {
            SearchClientError::Transport(err.to_string())
        }
    }
}
