use crate::dto::request::DesignGenerationRequest;
use crate::dto::response::{DesignIdeasResponse, DesignPromptsResponse};
use crate::service::design;
use crate::utils::error::{format_error, AppError, AppResult};
use crate::ServiceState;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use std::sync::Arc;
use tracing::{error, info};

const IDEAS_FAILURE: &str = "Failed to generate design ideas";
const PROMPTS_FAILURE: &str = "Failed to generate design prompts";

/// Parsed and validated request: the input text and the model to ask.
struct Generation {
    text: String,
    model: String,
}

fn parse_request(
    state: &ServiceState,
    body: Result<Bytes, BytesRejection>,
    failure: &str,
) -> AppResult<Generation> {
    let body = body.map_err(|rejection| format_error(failure, &rejection, rejection.status()))?;
    let value: serde_json::Value = serde_json::from_slice(&body)
        .map_err(|e| format_error(failure, e, StatusCode::INTERNAL_SERVER_ERROR))?;
    // Serde would otherwise read a JSON array positionally into the struct.
    if !value.is_object() {
        return Err(format_error(
            failure,
            "request body is not a JSON object",
            StatusCode::INTERNAL_SERVER_ERROR,
        ));
    }
    let req: DesignGenerationRequest = serde_json::from_value(value)
        .map_err(|e| format_error(failure, e, StatusCode::INTERNAL_SERVER_ERROR))?;

    if let Err(report) = req.validate() {
        error!("Rejected design request: {}", report);
        return Err(AppError::bad_request("Text is required"));
    }

    let text = req.text.unwrap_or_default();
    let model = req
        .model_id
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| state.config.openai.default_model.clone());
    info!(
        "🧾 Text: {}, Model name: {}, Profile attached: {}",
        text,
        model,
        req.user_profile.is_some()
    );

    Ok(Generation { text, model })
}

pub async fn generate_design_ideas(
    State(state): State<Arc<ServiceState>>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Json<DesignIdeasResponse>> {
    info!("📥 Generate design ideas request");
    let Generation { text, model } = parse_request(&state, body, IDEAS_FAILURE)?;

    Ok(Json(
        design::generate_design_ideas(state.ai.as_ref(), &text, &model).await,
    ))
}

pub async fn generate_design_prompts(
    State(state): State<Arc<ServiceState>>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Json<DesignPromptsResponse>> {
    info!("📥 Generate design prompts request");
    let Generation { text, model } = parse_request(&state, body, PROMPTS_FAILURE)?;

    Ok(Json(
        design::generate_design_prompts(state.ai.as_ref(), &text, &model).await,
    ))
}
