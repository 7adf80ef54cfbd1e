use crate::pipeline::generation::{ModelSelection, DEFAULT_API_BASE};

/// Application-level constants
pub const APP_NAME: &str = "Zycare";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Upload cap for `/analyze-with-image` and every other body (10 MB).
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "zycare_lib=debug,tower_http=info,info"
    } else {
        "zycare_lib=info,warn"
    }
}

/// Runtime settings read from the environment (after `.env` loading).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    pub api_key: Option<String>,
    pub api_base: String,
    pub models: ModelSelection,
    pub request_timeout_secs: u64,
    pub host: String,
    pub port: u16,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            models: ModelSelection::default(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServiceSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Blank values count as unset;
    /// unparseable numbers fall back to the default with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            api_key: get("GROQ_API_KEY"),
            api_base: get("GROQ_API_BASE").unwrap_or(defaults.api_base),
            models: ModelSelection {
                text: get("ZYCARE_TEXT_MODEL").unwrap_or(defaults.models.text),
                vision: get("ZYCARE_VISION_MODEL").unwrap_or(defaults.models.vision),
                speech: get("ZYCARE_SPEECH_MODEL").unwrap_or(defaults.models.speech),
            },
            request_timeout_secs: parse_or(
                "ZYCARE_REQUEST_TIMEOUT_SECS",
                get("ZYCARE_REQUEST_TIMEOUT_SECS"),
                defaults.request_timeout_secs,
            ),
            host: get("HOST").unwrap_or(defaults.host),
            port: parse_or("PORT", get("PORT"), defaults.port),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr + Copy + std::fmt::Display>(
    key: &str,
    raw: Option<String>,
    default: T,
) -> T {
    match raw {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, %default, "Invalid setting, using default");
            default
        }),
    }
}
