// src/services/gemini.rs
use async_trait::async_trait;
use reqwest::header::HeaderValue;
use serde::{Deserialize, Serialize};

use super::chat_session::{ChatModel, ModelError};
use crate::persona::GenerationConfig;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn system(text: &str) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: text.to_string() }],
        }
    }

    pub fn user(text: &str) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part { text: text.to_string() }],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

// Non-text parts (function calls, inline data) come back without `text`.
#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts joined in order.
    pub fn text(&self) -> Result<String, ModelError> {
        let Some(candidate) = self.candidates.first() else {
            return match self.prompt_feedback.as_ref().and_then(|f| f.block_reason.clone()) {
                Some(reason) => Err(ModelError::Blocked(reason)),
                None => Err(ModelError::EmptyResponse),
            };
        };

        let texts: Vec<&str> = candidate
            .content
            .iter()
            .flat_map(|c| c.parts.iter())
            .filter_map(|p| p.text.as_deref())
            .collect();

        if texts.is_empty() {
            return Err(ModelError::EmptyResponse);
        }
        Ok(texts.concat())
    }
}

#[derive(Clone)]
enum ApiKey {
    Missing,
    Invalid,
    Valid(HeaderValue),
}

/// Client for the Generative Language `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: ApiKey,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = match self.api_key {
            ApiKey::Missing => "missing",
            ApiKey::Invalid => "invalid",
            ApiKey::Valid(_) => "<redacted>",
        };
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &key)
            .finish()
    }
}

impl GeminiClient {
    /// Credential problems never fail construction; they fail each call instead.
    pub fn new(api_key: Option<&str>, base_url: impl Into<String>) -> Result<Self, ModelError> {
        let api_key = match api_key {
            None => ApiKey::Missing,
            Some(key) => match HeaderValue::from_str(key) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    ApiKey::Valid(value)
                }
                Err(_) => {
                    tracing::error!("GEMINI_API_KEY is not a valid header value; chat calls will fail.");
                    ApiKey::Invalid
                }
            },
        };

        // No request timeout: a stalled upstream stalls only its own request.
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl ChatModel for GeminiClient {
    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<String, ModelError> {
        let key = match &self.api_key {
            ApiKey::Missing => return Err(ModelError::MissingApiKey),
            ApiKey::Invalid => return Err(ModelError::InvalidApiKey),
            ApiKey::Valid(key) => key.clone(),
        };

        let response = self
            .http
            .post(self.endpoint(model))
            .header(API_KEY_HEADER, key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ModelError::Api { status, message });
        }

        let body: GenerateContentResponse = response.json().await?;
        tracing::debug!(candidates = body.candidates.len(), "gemini reply received");
        body.text()
    }
}
