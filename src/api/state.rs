use std::sync::Arc;

use reqwest::Client;

use crate::core::AppConfig;
use crate::schedule::Clock;

pub struct AppState {
    pub config: AppConfig,
    // Shared so upstream connections are pooled across requests
    pub http: Client,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: AppConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            http: Client::new(),
            clock,
        }
    }
}
