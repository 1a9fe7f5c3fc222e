use crate::dto::request::ActionPanelQuery;
use crate::dto::response::ActionPanelResponse;
use crate::entity::action::PanelState;
use crate::service::action::action_panel;
use crate::utils::error::{format_error, AppResult};
use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};

pub async fn list_actions(
    query: Result<Query<ActionPanelQuery>, QueryRejection>,
) -> AppResult<Json<ActionPanelResponse>> {
    let Query(query) = query.map_err(|rejection| {
        format_error("Invalid action panel query", &rejection, rejection.status())
    })?;

    Ok(Json(action_panel(PanelState {
        is_loading: query.loading,
        has_profile: query.has_profile,
    })))
}
