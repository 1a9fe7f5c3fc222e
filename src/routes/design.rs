use std::sync::Arc;

use crate::config::constant::{DESIGN_IDEAS_ENDPOINT, DESIGN_PROMPTS_ENDPOINT};
use crate::controllers::design;
use crate::ServiceState;
use axum::routing::post;

pub fn add_routers(router: axum::Router<Arc<ServiceState>>) -> axum::Router<Arc<ServiceState>> {
    router
        .route(DESIGN_IDEAS_ENDPOINT, post(design::generate_design_ideas))
        .route(DESIGN_PROMPTS_ENDPOINT, post(design::generate_design_prompts))
}
