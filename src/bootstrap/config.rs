use std::env;

use crate::presentation::viewport;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub compact_breakpoint: f32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_base_url = env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8888".into())
            .trim_end_matches('/')
            .to_string();
        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            anyhow::bail!(
                "API_BASE_URL must be a full origin (e.g., https://app.example.com)"
            );
        }
        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);
        let compact_breakpoint = env::var("COMPACT_BREAKPOINT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(viewport::COMPACT_BREAKPOINT);

        Ok(Self {
            api_base_url,
            request_timeout_secs,
            compact_breakpoint,
        })
    }
}
