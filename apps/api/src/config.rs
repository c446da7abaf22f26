use anyhow::{Context, Result};

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_LOCATION: &str = "Taiwan";

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Empty in mock mode.
    pub openai_api_key: String,
    pub model: String,
    pub openai_base_url: String,
    pub llm_timeout_secs: u64,
    /// Used by job search when the request carries no location.
    pub default_location: String,
    pub port: u16,
    pub mock_mode: bool,
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let mock_mode = std::env::var("MOCK_MODE")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let openai_api_key = if mock_mode {
            std::env::var("OPENAI_API_KEY").unwrap_or_default()
        } else {
            require_env("OPENAI_API_KEY")?
        };

        let max_upload_mb: usize = parse_env("MAX_UPLOAD_MB", 10)
            .context("MAX_UPLOAD_MB must be a whole number of megabytes")?;

        Ok(Config {
            openai_api_key,
            model: env_or("OPENAI_MODEL", DEFAULT_MODEL),
            openai_base_url: env_or("OPENAI_BASE_URL", DEFAULT_BASE_URL),
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 120)
                .context("LLM_TIMEOUT_SECS must be a number of seconds")?,
            default_location: env_or("DEFAULT_LOCATION", DEFAULT_LOCATION),
            port: parse_env("PORT", 5000).context("PORT must be a valid port number")?,
            mock_mode,
            max_upload_bytes: max_upload_mb * 1024 * 1024,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => Ok(raw.trim().parse::<T>()?),
        _ => Ok(default),
    }
}

/// `1`, `true`, `yes` and `on` (any case) switch a flag on.
fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
impl Config {
    /// Mock-mode configuration with defaults, for router and handler tests.
    pub fn for_tests() -> Self {
        Config {
            openai_api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            llm_timeout_secs: 5,
            default_location: DEFAULT_LOCATION.to_string(),
            port: 0,
            mock_mode: true,
            max_upload_bytes: 1024 * 1024,
            rust_log: "debug".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_accepts_common_truthy_values() {
        for raw in ["1", "true", "TRUE", "Yes", "on", " on "] {
            assert!(parse_flag(raw), "{raw:?} should be on");
        }
    }

    #[test]
    fn test_parse_flag_rejects_everything_else() {
        for raw in ["", "0", "false", "off", "no", "enabled"] {
            assert!(!parse_flag(raw), "{raw:?} should be off");
        }
    }
}
