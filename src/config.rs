use std::env;

use tracing::warn;

/// Target fetched when no override is configured.
pub const DEFAULT_URL: &str = "http://10.0.0.1/json_cmd.php";

/// Maximum number of body bytes kept by the accumulator.
pub const DEFAULT_MAX_BODY: usize = 1024;

/// Fetch settings: compile-time defaults, overridable from the environment.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub url: String,
    pub max_body: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            max_body: DEFAULT_MAX_BODY,
        }
    }
}

impl FetchConfig {
    /// Resolve configuration from `.env` and the process environment.
    ///
    /// `JSONFETCH_URL` overrides the target URL and `JSONFETCH_MAXSIZE` the
    /// body cap. A malformed size override is logged and ignored.
    pub fn from_env() -> Self {
        // Load .env first (silently fail if not found)
        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Ok(url) = env::var("JSONFETCH_URL") {
            config.url = url;
        }

        if let Ok(raw) = env::var("JSONFETCH_MAXSIZE") {
            match raw.parse::<usize>() {
                Ok(max) => config.max_body = max,
                Err(e) => {
                    warn!(
                        target = "jsonfetch::config",
                        value = %raw,
                        error = %e,
                        "ignoring malformed JSONFETCH_MAXSIZE"
                    );
                }
            }
        }

        config
    }
}
