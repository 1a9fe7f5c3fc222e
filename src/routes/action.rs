use std::sync::Arc;

use crate::controllers::action;
use crate::ServiceState;
use axum::routing::get;

pub fn add_routers(router: axum::Router<Arc<ServiceState>>) -> axum::Router<Arc<ServiceState>> {
    router.route("/api/actions", get(action::list_actions))
}
