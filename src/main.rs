use design_assistant_service::{
    config::ServiceConfig, routes::create_router, utils::openai::OpenAIClient, ServiceState,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    let mut config = ServiceConfig::default();
    config.init_from_env()?;
    config.tracing.init_subscriber()?;

    let ai = OpenAIClient::new(&config.openai)?;
    let addr = config
        .server
        .get_socket_addr()
        .map_err(|e| format!("Invalid server address: {}", e))?;
    let http_addr = config.server.get_http_addr();
    let state = Arc::new(ServiceState {
        config,
        ai: Arc::new(ai),
    });

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", addr, e))?;
    info!("🚀 Design assistant service listening on {}", http_addr);

    axum::serve(listener, create_router(state))
        .await
        .map_err(|e| format!("Server error: {}", e))
}
