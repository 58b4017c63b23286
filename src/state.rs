use crate::config::Config;
use crate::security::SecurityPolicy;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub policy: Arc<SecurityPolicy>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            policy: Arc::new(SecurityPolicy::from_config(config)),
        }
    }
}
