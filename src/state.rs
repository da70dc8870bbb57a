// src/state.rs
use std::sync::Arc;

use crate::persona::Persona;
use crate::services::chat_session::{ChatModel, ChatSession};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub model: Arc<dyn ChatModel>,
    pub persona: Persona,
}

impl AppState {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self {
            model,
            persona: Persona::fixed(),
        }
    }

    pub fn session(&self) -> ChatSession {
        ChatSession::new(self.persona)
    }
}
