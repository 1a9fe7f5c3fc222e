pub mod constant;
pub mod openai;
pub mod server;
pub mod tracing;

use dotenv::dotenv;

#[derive(Clone, Default, Debug)]
pub struct ServiceConfig {
    pub server: server::ServerConfig,
    pub openai: openai::OpenAIConfig,
    pub tracing: tracing::TracingConfig,
}

impl ServiceConfig {
    pub fn init_from_env(&mut self) -> Result<(), String> {
        dotenv().ok();
        self.server.init_from_env()?;
        self.openai.init_from_env()?;
        self.tracing.init_from_env()?;
        Ok(())
    }
}
