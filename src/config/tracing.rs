use super::constant::DEFAULT_LOG_FILTER;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Clone, Debug)]
pub struct TracingConfig {
    pub filter: String,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl TracingConfig {
    pub fn init_from_env(&mut self) -> Result<(), String> {
        if let Ok(filter) = env::var("RUST_LOG") {
            EnvFilter::try_new(&filter).map_err(|e| format!("RUST_LOG is invalid: {}", e))?;
            self.filter = filter;
        }
        Ok(())
    }

    pub fn init_subscriber(&self) -> Result<(), String> {
        let env_layer = EnvFilter::try_new(&self.filter)
            .map_err(|e| format!("Failed to build tracing filter: {}", e))?;
        tracing_subscriber::registry()
            .with(env_layer)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .map_err(|e| format!("Failed to initialize tracing: {}", e))
    }
}
