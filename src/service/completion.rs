use crate::service::prompt::PromptTemplate;
use serde_json::Value;

/// Structured completion backend. Implementations render `prompt` with
/// `text`, ask `model` for output matching the prompt's schema and return
/// the parsed JSON.
#[async_trait::async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(
        &self,
        prompt: &PromptTemplate,
        text: &str,
        model: &str,
    ) -> Result<Value, String>;
}
