pub mod config;
pub mod controllers;
pub mod dto;
pub mod entity;
pub mod routes;
pub mod service;
pub mod utils;

use config::ServiceConfig;
use service::completion::CompletionService;
use std::sync::Arc;

pub struct ServiceState {
    pub config: ServiceConfig,
    pub ai: Arc<dyn CompletionService>,
}
