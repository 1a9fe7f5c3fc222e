use crate::dto::response::SearchResponse;
use crate::service::search::search_designs;
use crate::utils::error::{format_error, AppError, AppResult};
use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use tracing::info;

const SEARCH_FAILURE: &str = "Failed to search";

/// First non-empty `q` in the query string. Repeated keys are allowed.
fn query_text(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .find(|(key, value)| key == "q" && !value.is_empty())
        .map(|(_, value)| value)
}

pub async fn search(
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<SearchResponse>> {
    let Query(pairs) =
        query.map_err(|rejection| format_error(SEARCH_FAILURE, &rejection, rejection.status()))?;
    let q = query_text(pairs)
        .ok_or_else(|| AppError::bad_request("Query parameter is required"))?;
    info!("🔎 Design search for '{}'", q);

    Ok(Json(search_designs(&q)))
}
