//! Gemini generation endpoint client
//!
//! One synchronous-in-spirit call per prompt: a single POST to the
//! `generateContent` endpoint with the API key as a query parameter, no
//! retries and no streaming. The [`TextGenerator`] trait is the seam the
//! planner is written against, so tests can substitute a scripted
//! generator for the real client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

use crate::Result;
use crate::config::GeminiConfig;
use crate::error::TripPlannerError;

/// Anything that can turn a prompt into generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a single prompt, returning it verbatim.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Client for the Gemini `generateContent` endpoint
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

/// Request envelope for `generateContent`
#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

/// Response envelope from `generateContent`
///
/// Every level defaults to empty so a shape deviation surfaces as a
/// handled parse failure rather than a decode error.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    /// Create a new client from validated configuration
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| TripPlannerError::config("Gemini API key is not configured"))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent("TripPlanner/0.1.0")
            .build()
            .map_err(|e| TripPlannerError::general(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        debug!("Sending generation request ({} prompt chars)", prompt.len());

        let response = self
            .client
            .post(self.endpoint_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Network error reaching generation endpoint: {e}");
                TripPlannerError::api(format!("Network error: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = format!(
                "API request failed with status {}: {}",
                status.as_u16(),
                error_text
            );
            error!("{message}");
            return Err(TripPlannerError::api(message));
        }

        let generated: GenerateContentResponse = response.json().await.map_err(|e| {
            error!("Failed to decode generation response: {e}");
            TripPlannerError::parse(format!("Invalid generation response: {e}"))
        })?;

        // First candidate, first part, returned verbatim
        generated
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| {
                error!("Generation response contained no candidates or parts");
                TripPlannerError::parse("Generation response contained no text")
            })
    }
}
