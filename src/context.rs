//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::{HttpTransport, ResourceClient};
use crate::config::ApiConfig;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> ApiConfig {
        self.config.get_value()
    }

    /// Client for the configured API base
    pub fn client(&self) -> ResourceClient<HttpTransport> {
        ResourceClient::new(HttpTransport::new(self.config.with_value(|c| c.api_base.clone())))
    }

    /// Public URL of an uploaded file
    pub fn upload_url(&self, filename: &str) -> String {
        self.config.with_value(|c| c.upload_url(filename))
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
