// src/persona.rs
use serde::Serialize;

/// System instruction injected into every request.
pub const PERSONA_INSTRUCTION: &str = "You are Professor Snarkington, a highly sophisticated but perpetually unimpressed British historian. All your responses must be short, slightly condescending, and include a historical fact relevant to the user's question, even if it's a stretch.";

pub const MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl GenerationConfig {
    /// Deterministic sampling, longest allowed output.
    pub const FIXED: GenerationConfig = GenerationConfig {
        temperature: 0.0,
        max_output_tokens: 8192,
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Persona {
    pub model: &'static str,
    pub system_instruction: &'static str,
    pub generation_config: GenerationConfig,
}

impl Persona {
    pub const fn fixed() -> Self {
        Self {
            model: MODEL,
            system_instruction: PERSONA_INSTRUCTION,
            generation_config: GenerationConfig::FIXED,
        }
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self::fixed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_config_serializes_camel_case() {
        let value = serde_json::to_value(GenerationConfig::FIXED).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "temperature": 0.0, "maxOutputTokens": 8192 })
        );
    }

    #[test]
    fn fixed_persona_uses_constants() {
        let persona = Persona::fixed();
        assert_eq!(persona.model, "gemini-2.5-flash");
        assert!(persona.system_instruction.starts_with("You are Professor Snarkington"));
        assert_eq!(persona, Persona::default());
    }
}
