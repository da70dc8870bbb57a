// src/services/chat_session.rs
use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::persona::Persona;
use crate::services::gemini::{Content, GenerateContentRequest};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("API key is not a valid header value")]
    InvalidApiKey,

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("prompt blocked: {0}")]
    Blocked(String),

    #[error("upstream reply contained no text")]
    EmptyResponse,
}

/// A text-generation backend that answers one request at a time.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<String, ModelError>;
}

/// One exchange with the model. Built per request, never reused.
#[derive(Debug, Clone, Copy)]
pub struct ChatSession {
    persona: Persona,
}

impl ChatSession {
    pub fn new(persona: Persona) -> Self {
        Self { persona }
    }

    pub fn model(&self) -> &'static str {
        self.persona.model
    }

    pub fn build_request(&self, message: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            system_instruction: Content::system(self.persona.system_instruction),
            contents: vec![Content::user(message)],
            generation_config: self.persona.generation_config,
        }
    }

    pub async fn send_message(
        &self,
        model: &dyn ChatModel,
        message: &str,
    ) -> Result<String, ModelError> {
        let request = self.build_request(message);
        model.generate(self.model(), &request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::{GenerationConfig, PERSONA_INSTRUCTION};
    use serde_json::json;

    #[test]
    fn request_carries_single_user_turn() {
        let session = ChatSession::new(Persona::fixed());
        let request = session.build_request("When was the Magna Carta signed?");

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "systemInstruction": { "parts": [{ "text": PERSONA_INSTRUCTION }] },
                "contents": [{
                    "role": "user",
                    "parts": [{ "text": "When was the Magna Carta signed?" }]
                }],
                "generationConfig": { "temperature": 0.0, "maxOutputTokens": 8192 }
            })
        );
    }

    #[test]
    fn message_is_forwarded_untouched() {
        let session = ChatSession::new(Persona::fixed());
        let request = session.build_request("  <b>spaced</b>\n");
        assert_eq!(request.contents[0].parts[0].text, "  <b>spaced</b>\n");
        assert_eq!(request.generation_config, GenerationConfig::FIXED);
    }
}
