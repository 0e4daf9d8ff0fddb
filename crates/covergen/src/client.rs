use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use crate::templates::{build_prompt, object_description, PromptTemplate};

const DEFAULT_MODEL: &str = "gemini-3-pro-image-preview";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Errors from the image-generation gateway.
#[derive(Debug, thiserror::Error)]
pub enum CoverGenError {
    /// The provider returned a non-success status.
    #[error("Image provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    /// The request could not be sent or timed out.
    #[error("Image provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered 200 but the response carried no image payload.
    #[error("No image in provider response")]
    MissingImage,
}

/// Provider settings, from `GOOGLE_API_KEY` plus optional overrides
/// (`COVERGEN_MODEL`, `COVERGEN_TIMEOUT_SECS`).
#[derive(Debug, Clone)]
pub struct CoverGenConfig {
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl CoverGenConfig {
    /// Load from environment variables. Returns `None` when no API key is
    /// configured; the HTTP layer reports that as a configuration error.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("GOOGLE_API_KEY").ok()?;
        let model = std::env::var("COVERGEN_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        let timeout_secs = std::env::var("COVERGEN_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Some(Self {
            api_key,
            model,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Inputs for one cover generation.
#[derive(Debug, Clone)]
pub struct CoverRequest {
    pub title: String,
    pub category: Option<String>,
    pub summary: Option<String>,
    pub template: PromptTemplate,
    pub custom_prompt: Option<String>,
}

/// Client for the Gemini image-generation API.
pub struct CoverGenerator {
    http: reqwest::Client,
    config: CoverGenConfig,
    base_url: String,
}

impl CoverGenerator {
    pub fn new(config: CoverGenConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("reqwest client construction cannot fail with static options");
        Self {
            http,
            config,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    /// Override the provider base URL (used by tests against a local stub).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Generate a cover image and return its base64-encoded PNG payload.
    pub async fn generate(&self, request: &CoverRequest) -> Result<String, CoverGenError> {
        let description = object_description(
            &request.title,
            request.category.as_deref(),
            request.summary.as_deref(),
        );
        let prompt = build_prompt(
            request.template,
            &description,
            request.category.as_deref(),
            request.custom_prompt.as_deref(),
        );

        tracing::info!(
            template = ?request.template,
            prompt_len = prompt.len(),
            "Requesting cover image"
        );

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.config.model, self.config.api_key
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "imageConfig": { "aspectRatio": "16:9", "imageSize": "2K" }
            }
        });

        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CoverGenError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let payload: GenerateContentResponse = response.json().await?;
        extract_image(payload).ok_or(CoverGenError::MissingImage)
    }
}

// ---------------------------------------------------------------------------
// Provider response shape
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct InlineData {
    data: String,
}

/// First inline image payload in the response, if any.
fn extract_image(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .find_map(|p| p.inline_data)
        .map(|d| d.data)
}
