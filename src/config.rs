// Configuration for SentiScope
use anyhow::Result;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

// Uploaded files are cut to this many space-delimited tokens before analysis,
// mirroring the service's own truncation window.
pub const FILE_TOKEN_LIMIT: usize = 150;

pub const MAX_DEBUG_LOGS: usize = 1000;
pub const EVENT_POLL_MS: u64 = 50;

const DEFAULT_ENDPOINT: &str = "https://sentimentanalysisbackend-kog3.onrender.com";
const ENDPOINT_ENV_VAR: &str = "SENTISCOPE_ENDPOINT";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub endpoint: Option<String>,
}

impl FileConfig {
    pub fn load() -> Result<Self> {
        let path = config_file_path();
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sentiscope")
        .join("config.toml")
}

/// Resolve the service base URL: CLI flag, then env var, then config file,
/// then the built-in default. Trailing slashes are stripped so the request
/// path can always be appended.
pub fn resolve_endpoint(cli_endpoint: Option<&str>) -> String {
    let raw = cli_endpoint
        .map(str::to_string)
        .or_else(|| env::var(ENDPOINT_ENV_VAR).ok())
        .or_else(|| FileConfig::load().ok().and_then(|c| c.endpoint))
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    raw.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_wins_and_slash_is_stripped() {
        let url = resolve_endpoint(Some("http://localhost:9000/"));
        assert_eq!(url, "http://localhost:9000");
    }
}
