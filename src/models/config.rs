//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::search_client::gemini::{GEMINI_DEFAULT_BASE_URL, GEMINI_DEFAULT_MODEL};

fn default_gemini_base_url() -> String {
    GEMINI_DEFAULT_BASE_URL.to_string()
}

fn default_gemini_model() -> String {
    GEMINI_DEFAULT_MODEL.to_string()
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Signs the flash message cookies; at least 64 bytes.
    pub secret: String,
    pub gemini_api_key: String,
    #[serde(default = "default_gemini_base_url")]
    pub gemini_base_url: String,
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
}
