//! Gemini `generateContent` image client.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::{GenerationConfig, PROMPT_PLACEHOLDER};

use super::error::GenerationError;
use super::provider::ImageGenerator;
use super::types::{Base64Image, NonEmptyPrompt};

pub struct GeminiClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    api_key_env: String,
    style_template: String,
    aspect_ratio: String,
}

impl GeminiClient {
    /// Build a client from the generation config.
    ///
    /// A missing API key is not an error here: it is reported on the first
    /// `generate` call so the UI can surface it.
    pub fn from_config(config: &GenerationConfig) -> Result<Self, GenerationError> {
        let mut builder =
            Client::builder().connect_timeout(Duration::from_secs(config.connect_timeout_seconds));
        if let Some(secs) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(GenerationError::Client)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.resolve_api_key(),
            api_key_env: config.api_key_env.clone(),
            style_template: config.style_template.clone(),
            aspect_ratio: config.aspect_ratio.clone(),
        })
    }

    /// Full URL of the generate endpoint.
    pub fn url(&self) -> String {
        format!("{}/{}:generateContent", self.endpoint, self.model)
    }

    /// The text sent to the model for `prompt`.
    pub fn styled_prompt(&self, prompt: &NonEmptyPrompt) -> String {
        self.style_template
            .replace(PROMPT_PLACEHOLDER, prompt.as_str())
    }

    async fn generate_impl(&self, prompt: &NonEmptyPrompt) -> Result<Base64Image, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GenerationError::MissingApiKey {
                env_var: self.api_key_env.clone(),
            })?;

        let body = GenerateContentRequest::new(self.styled_prompt(prompt), &self.aspect_ratio);
        let start = Instant::now();

        tracing::info!(model = %self.model, "sending generation request");

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(GenerationError::Unreachable)?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(GenerationError::Unreachable)?;

        tracing::info!(
            status = status.as_u16(),
            latency_ms = start.elapsed().as_millis() as u64,
            "generation request finished"
        );

        if !status.is_success() {
            return Err(GenerationError::Rejected {
                status: status.as_u16(),
                message: parse_error_message(&text),
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| GenerationError::Malformed(e.to_string()))?;

        extract_image(parsed)
    }
}

#[async_trait]
impl ImageGenerator for GeminiClient {
    fn name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &NonEmptyPrompt) -> Result<Base64Image, GenerationError> {
        self.generate_impl(prompt).await
    }
}

/// Pull the first inline image out of a successful response.
fn extract_image(response: GenerateContentResponse) -> Result<Base64Image, GenerationError> {
    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(GenerationError::Blocked(format!(
            "The description was blocked by the safety filter ({reason}). Try rephrasing it."
        )));
    }

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(GenerationError::NoImage { detail: None });
    };

    let parts = candidate.content.map(|c| c.parts).unwrap_or_default();
    let mut model_text = Vec::new();
    for part in parts {
        if let Some(inline) = part.inline_data {
            if inline.data.trim().is_empty() {
                continue;
            }
            base64::engine::general_purpose::STANDARD
                .decode(inline.data.trim())
                .map_err(|e| GenerationError::Malformed(format!("image payload is not base64: {e}")))?;
            return Ok(Base64Image::new(inline.data.trim()));
        }
        if let Some(text) = part.text {
            model_text.push(text);
        }
    }

    let detail = if model_text.is_empty() {
        candidate.finish_reason
    } else {
        Some(model_text.join(" "))
    };
    Err(GenerationError::NoImage { detail })
}

/// Extract `error.message` from a Google API error body.
fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error.message)
        .filter(|message| !message.trim().is_empty())
}

// Request/Response types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    generation_config: RequestGenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestGenerationConfig {
    response_modalities: Vec<String>,
    image_config: RequestImageConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestImageConfig {
    aspect_ratio: String,
}

impl GenerateContentRequest {
    fn new(text: String, aspect_ratio: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text }],
            }],
            generation_config: RequestGenerationConfig {
                response_modalities: vec!["IMAGE".to_string()],
                image_config: RequestImageConfig {
                    aspect_ratio: aspect_ratio.to_string(),
                },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    text: Option<String>,
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct InlineData {
    #[serde(default)]
    data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}
