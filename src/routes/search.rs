use std::sync::Arc;

use crate::controllers::search;
use crate::ServiceState;
use axum::routing::get;

pub fn add_routers(router: axum::Router<Arc<ServiceState>>) -> axum::Router<Arc<ServiceState>> {
    router.route("/api/search", get(search::search))
}
