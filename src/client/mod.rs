//! Blocking client for the chat completion and image generation endpoints.

pub mod error;

use std::fmt;
use std::time::Instant;

use reqwest::blocking::Client;
use reqwest::header;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

pub use error::RequestError;

use crate::config::{Config, ConfigError, EnvSource, API_KEY_ENV};
use crate::core::Result;
use crate::image::ImageRequest;
use crate::llm::ChatRequest;

const CHAT_COMPLETIONS_PATH: &str = "chat/completions";
const IMAGE_GENERATIONS_PATH: &str = "images/generations";

/// API client holding the resolved credential and default headers.
///
/// Everything is fixed at construction; each call is one independent POST.
/// Uses `reqwest::blocking`, so it must not be created or used from inside
/// an async runtime.
#[derive(Clone)]
pub struct OpenAIClient {
    client: Client,
    config: Config,
}

impl fmt::Debug for OpenAIClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAIClient")
            .field("base_url", &self.config.base_url)
            .finish()
    }
}

impl OpenAIClient {
    /// Create a client, reading `OPENAI_API_KEY` when `api_key` is `None` or empty
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Self::with_config(Config::from_env(api_key)?)
    }

    /// Create a client, falling back to `env` for the API key
    pub fn with_env(api_key: Option<String>, env: &impl EnvSource) -> Result<Self> {
        Self::with_config(Config::resolve(api_key, env)?)
    }

    /// Create a client from already resolved settings
    pub fn with_config(config: Config) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(ConfigError::MissingApiKey(API_KEY_ENV.to_string()).into());
        }

        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|e| ConfigError::InvalidApiKey(e.to_string()))?;
        auth.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ConfigError::ClientBuildFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Endpoint root every request is sent below
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Send a chat completion request and return the decoded response body.
    ///
    /// The body is not projected; the answer text lives at
    /// `choices[0].message.content`.
    pub fn chat_completion(&self, request: &ChatRequest) -> Result<Value> {
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            "Creating chat completion"
        );
        self.post(CHAT_COMPLETIONS_PATH, request)
    }

    /// Send an image generation request and return the decoded response body.
    ///
    /// Generated images live under `data[i].url` or `data[i].b64_json`.
    pub fn create_image(&self, request: &ImageRequest) -> Result<Value> {
        debug!(
            size = %request.size,
            n = request.n,
            format = %request.response_format,
            "Creating image"
        );
        self.post(IMAGE_GENERATIONS_PATH, request)
    }

    fn post<T: Serialize + ?Sized>(&self, path: &str, payload: &T) -> Result<Value> {
        let url = self.config.endpoint(path);
        let start = Instant::now();

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .map_err(RequestError::Transport)?;

        let status = response.status();
        let body = response.text().map_err(RequestError::Transport)?;

        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "API request failed");
            return Err(RequestError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let value: Value = serde_json::from_str(&body).map_err(RequestError::Decode)?;

        debug!(
            %url,
            status = status.as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Request completed"
        );

        Ok(value)
    }
}
