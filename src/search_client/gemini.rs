//! Gemini `generateContent` client with the Google Search tool enabled.
//!
//! The search tool cannot be combined with `responseSchema` or
//! `responseMimeType`, so the request carries only the prompt and the tool.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::search_client::errors::{SearchClientError, SearchClientResult};
use crate::search_client::{DealSearcher, GroundedAnswer};

pub const GEMINI_DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const GEMINI_DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize_base_url(&base_url.into()),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn generate_content_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl DealSearcher for GeminiClient {
    async fn search(&self, prompt: &str) -> SearchClientResult<GroundedAnswer> {
        log::debug!("Sending Gemini generateContent request to model {}", self.model);

        let http_response = self
            .client
            .post(self.generate_content_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest::grounded(prompt))
            .send()
            .await?;

        let status = http_response.status();
        if !status.is_success() {
            let body = match http_response.text().await {
                Ok(text) => text,
                Err(err) => format!("unable to read error body: {err}"),
            };
            return Err(SearchClientError::HttpStatus {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        let body = http_response.text().await?;
        let response: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|err| SearchClientError::ResponseParse(err.to_string()))?;

        let answer = response.into_answer();
        log::info!(
            "Gemini answered with {} characters and {} grounding links",
            answer.text.chars().count(),
            answer.links.len()
        );
        Ok(answer)
    }
}

fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        GEMINI_DEFAULT_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

fn extract_error_message(body: &str) -> String {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .and_then(|error| error.message)
        .filter(|message| !message.trim().is_empty());

    match message {
        Some(message) => message,
        None if body.trim().is_empty() => "empty error response".to_string(),
        None => body.trim().chars().take(512).collect(),
    }
}

// Request types

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    tools: Vec<Tool>,
}

impl<'a> GenerateContentRequest<'a> {
    fn grounded(prompt: &'a str) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            tools: vec![Tool {
                google_search: GoogleSearch {},
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

// Response types

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default, rename = "groundingMetadata")]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
struct GroundingMetadata {
    #[serde(default, rename = "groundingChunks")]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    #[serde(default)]
    web: Option<WebChunk>,
}

#[derive(Debug, Deserialize)]
struct WebChunk {
    #[serde(default)]
    uri: Option<String>,
}

impl GenerateContentResponse {
    /// Only the first candidate is used; a missing candidate is an empty answer.
    fn into_answer(self) -> GroundedAnswer {
        let Some(candidate) = self.candidates.into_iter().next() else {
            return GroundedAnswer::default();
        };

        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter(|part| !part.thought)
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        let links = candidate
            .grounding_metadata
            .map(|metadata| {
                metadata
                    .grounding_chunks
                    .into_iter()
                    .filter_map(|chunk| chunk.web.and_then(|web| web.uri))
                    .filter(|uri| !uri.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        GroundedAnswer { text, links }
    }
}

// Error envelope

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}
