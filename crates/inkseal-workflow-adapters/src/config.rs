use std::env;

#[derive(Debug, Clone)]
pub struct WorkflowAdapterConfig {
    pub service_base_url: String,
    pub request_timeout_ms: u64,
}

impl Default for WorkflowAdapterConfig {
    fn default() -> Self {
        Self {
            // The signing service's development address.
            service_base_url: "http://127.0.0.1:8000".to_owned(),
            request_timeout_ms: 15_000,
        }
    }
}

impl WorkflowAdapterConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var("INKSEAL_SERVICE_URL") {
            if !url.trim().is_empty() {
                config.service_base_url = url;
            }
        }
        if let Ok(raw) = env::var("INKSEAL_TIMEOUT_MS") {
            if let Ok(ms) = raw.parse() {
                config.request_timeout_ms = ms;
            }
        }
        config
    }
}
