use crate::config::openai::OpenAIConfig;
use crate::service::completion::CompletionService;
use crate::service::prompt::PromptTemplate;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::info;

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
    refusal: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

/// OpenAI-compatible chat completions client using structured outputs.
#[derive(Clone)]
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAIClient {
    pub fn new(config: &OpenAIConfig) -> Result<Self, String> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| format!("Failed to build OpenAI http client: {}", e))?;
        Ok(Self {
            client,
            api_key: config.openai_key.clone(),
            base_url: config.base_url.clone(),
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait::async_trait]
impl CompletionService for OpenAIClient {
    async fn complete(
        &self,
        prompt: &PromptTemplate,
        text: &str,
        model: &str,
    ) -> Result<Value, String> {
        let model = normalize_model_id(model);
        info!("Invoking '{}' with model '{}'", prompt.name, model);

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&build_request_body(prompt, text, model))
            .send()
            .await
            .map_err(|e| format!("OpenAI response failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| format!("Response parsing as text failed: {}", e))?;
            return Err(format!("OpenAI returned {}: {}", status, body));
        }

        let completion = response
            .json::<ChatCompletion>()
            .await
            .map_err(|e| format!("Failed to parse OpenAI response as json: {}", e))?;
        extract_structured_output(completion)
    }
}

/// Strips the `provider/` prefix the UI puts on model ids.
pub fn normalize_model_id(model: &str) -> &str {
    match model.split_once('/') {
        Some((_, name)) if !name.is_empty() => name,
        _ => model,
    }
}

fn build_request_body(prompt: &PromptTemplate, text: &str, model: &str) -> Value {
    json!({
        "model": model,
        "messages": [{
            "role": "user",
            "content": prompt.render(text)
        }],
        "response_format": {
            "type": "json_schema",
            "json_schema": {
                "name": prompt.name,
                "strict": true,
                "schema": prompt.output_schema
            }
        }
    })
}

fn extract_structured_output(completion: ChatCompletion) -> Result<Value, String> {
    let choice = completion
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| "OpenAI response contained no choices".to_string())?;

    if let Some(refusal) = choice.message.refusal {
        return Err(format!("Model refused the request: {}", refusal));
    }
    if choice.finish_reason.as_deref() == Some("length") {
        return Err("Model output was truncated".to_string());
    }

    let content = choice
        .message
        .content
        .ok_or_else(|| "OpenAI response contained no content".to_string())?;
    serde_json::from_str(&content).map_err(|e| format!("Model output is not valid json: {}", e))
}
