use std::env;
use std::time::Duration;

use crate::error::{QueryError, Result};

pub const DEFAULT_SERVER_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "llama2";

pub const SERVER_URL_VAR: &str = "OLLAMA_SERVER_URL";
pub const MODEL_VAR: &str = "OLLAMA_MODEL";
pub const TIMEOUT_VAR: &str = "OLLAMA_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_url: String,
    pub model: String,
    /// `None` waits for the server indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let server_url = get(SERVER_URL_VAR).unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let model = get(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let timeout = match get(TIMEOUT_VAR) {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| QueryError::Config {
                    var: TIMEOUT_VAR,
                    reason: format!("{:?} is not a whole number of seconds ({})", raw, e),
                })?;
                if secs == 0 {
                    return Err(QueryError::Config {
                        var: TIMEOUT_VAR,
                        reason: "must be greater than zero".to_string(),
                    });
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            server_url,
            model,
            timeout,
        })
    }

    pub fn chat_url(&self) -> String {
        format!("{}/api/chat", self.server_url.trim_end_matches('/'))
    }
}
