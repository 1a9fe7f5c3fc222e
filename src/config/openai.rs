use super::constant::{DEFAULT_MODEL_ID, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_TIMEOUT_SECS};
use std::env;

#[derive(Clone, Debug)]
pub struct OpenAIConfig {
    pub openai_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub default_model: String,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            openai_key: String::new(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            timeout_secs: DEFAULT_OPENAI_TIMEOUT_SECS,
            default_model: DEFAULT_MODEL_ID.to_string(),
        }
    }
}

impl OpenAIConfig {
    pub fn init_from_env(&mut self) -> Result<(), String> {
        self.openai_key =
            env::var("OPENAI_KEY").map_err(|_| "OPENAI_KEY not set in environment".to_string())?;

        if let Ok(base_url) = env::var("OPENAI_BASE_URL") {
            self.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Ok(timeout) = env::var("OPENAI_TIMEOUT_SECS") {
            self.timeout_secs = timeout
                .parse::<u64>()
                .map_err(|_| "OPENAI_TIMEOUT_SECS is not a valid u64".to_string())?;
        }

        if let Ok(model) = env::var("DEFAULT_MODEL_ID") {
            if model.trim().is_empty() {
                return Err("DEFAULT_MODEL_ID must not be empty".to_string());
            }
            self.default_model = model;
        }

        Ok(())
    }
}
