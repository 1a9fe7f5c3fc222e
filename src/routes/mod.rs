pub mod action;
pub mod design;
pub mod search;
use std::sync::Arc;

use crate::config::constant::MAX_BODY_BYTES;
use crate::ServiceState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

/// Every API route behind the shared body limit, permissive CORS for the
/// browser UI, and request tracing.
pub fn create_router(state: Arc<ServiceState>) -> Router {
    let router = Router::new();
    let router = design::add_routers(router);
    let router = search::add_routers(router);
    let router = action::add_routers(router);
    let router = router.layer(DefaultBodyLimit::max(MAX_BODY_BYTES));
    router
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
}
