//! Outbound access to the search-augmented text generation service.

use async_trait::async_trait;

use crate::search_client::errors::SearchClientResult;

pub mod errors;
pub mod gemini;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Raw answer of one search call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroundedAnswer {
    /// Free-form answer text, empty when the model returned nothing.
    pub text: String,
    /// Grounding source URLs in the order the service returned them.
    pub links: Vec<String>,
}

/// Performs exactly one search call per invocation.
#[async_trait]
pub trait DealSearcher: Send + Sync {
    async fn search(&self, prompt: &str) -> SearchClientResult<GroundedAnswer>;
}
