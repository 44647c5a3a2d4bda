//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Provider
//!
//! ```bash
//! export GEMINI_API_KEY="..."          # or the legacy API_KEY; unset means demo mode
//! export GEMINI_MODEL="gemini-2.5-flash"
//! ```
//!
//! ## Store
//!
//! Either a full URL or individual components:
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379/0"
//!
//! export REDIS_HOST="localhost"
//! export REDIS_PORT="6379"
//! export REDIS_PASSWORD=""
//! export REDIS_DB="0"
//! ```
//!
//! Without either, accounts and history live in process memory.
//!
//! ## Optional Variables
//!
//! - `GEMINI_BASE_URL` - API root (default: Google's public endpoint)
//! - `PROVIDER_TIMEOUT_SECONDS` - Per-request provider timeout (default: 120)
//! - `ANALYSIS_DEMO_DELAY_MS` / `RECOMMENDATION_DEMO_DELAY_MS` - Demo mode delays (default: 2500 / 3000)
//! - `STORE_KEY_PREFIX` - Redis key namespace (default: `bizinsight:`)
//! - `CREDENTIAL_SECRET` - HMAC key for stored password digests
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::infrastructure::provider::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Used when `CREDENTIAL_SECRET` is unset. Fine for local runs only.
pub const DEV_CREDENTIAL_SECRET: &str = "bizinsight-dev-secret";

const MAX_DEMO_DELAY_MS: u64 = 60_000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// `None` puts the service in demo mode.
    pub api_key: Option<String>,
    pub model: String,
    pub provider_base_url: String,
    pub provider_timeout_seconds: u64,
    pub analysis_demo_delay_ms: u64,
    pub recommendation_demo_delay_ms: u64,
    pub redis_url: Option<String>,
    pub store_key_prefix: String,
    /// HMAC key for password digests. Changing it invalidates every stored account.
    pub credential_secret: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number, got '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but does not parse.
    pub fn from_env() -> Result<Self> {
        let api_key = Self::load_api_key();
        let redis_url = Self::load_redis_url();

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let provider_base_url =
            env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let provider_timeout_seconds = parse_or("PROVIDER_TIMEOUT_SECONDS", 120)?;
        let analysis_demo_delay_ms = parse_or("ANALYSIS_DEMO_DELAY_MS", 2500)?;
        let recommendation_demo_delay_ms = parse_or("RECOMMENDATION_DEMO_DELAY_MS", 3000)?;

        let store_key_prefix =
            env::var("STORE_KEY_PREFIX").unwrap_or_else(|_| "bizinsight:".to_string());
        let credential_secret = env::var("CREDENTIAL_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEV_CREDENTIAL_SECRET.to_string());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            api_key,
            model,
            provider_base_url,
            provider_timeout_seconds,
            analysis_demo_delay_ms,
            recommendation_demo_delay_ms,
            redis_url,
            store_key_prefix,
            credential_secret,
            listen_addr,
            log_level,
            log_format,
        })
    }

    /// Loads the provider key.
    ///
    /// Priority:
    /// 1. `GEMINI_API_KEY`
    /// 2. `API_KEY`
    ///
    /// Blank values count as absent.
    fn load_api_key() -> Option<String> {
        ["GEMINI_API_KEY", "API_KEY"]
            .iter()
            .filter_map(|name| env::var(name).ok())
            .map(|v| v.trim().to_string())
            .find(|v| !v.is_empty())
    }

    /// Loads Redis URL with fallback to component-based configuration.
    ///
    /// Priority:
    /// 1. `REDIS_URL` environment variable
    /// 2. Constructed from `REDIS_HOST`, `REDIS_PORT`, `REDIS_PASSWORD`, `REDIS_DB`
    ///
    /// Returns `None` if Redis is not configured.
    fn load_redis_url() -> Option<String> {
        if let Ok(url) = env::var("REDIS_URL") {
            return Some(url);
        }

        let host = env::var("REDIS_HOST").ok()?;
        let port = env::var("REDIS_PORT").unwrap_or_else(|_| "6379".to_string());
        let password = env::var("REDIS_PASSWORD").ok().filter(|p| !p.is_empty());
        let db = env::var("REDIS_DB").unwrap_or_else(|_| "0".to_string());

        Some(match password {
            Some(pwd) => format!("redis://:{}@{}:{}/{}", pwd, host, port, db),
            None => format!("redis://{}:{}/{}", host, port, db),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` has no port
    /// - the Redis URL has an unsupported scheme
    /// - the provider timeout is zero
    /// - a demo delay exceeds 60 seconds
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if let Some(ref redis_url) = self.redis_url
            && !redis_url.starts_with("redis://")
            && !redis_url.starts_with("rediss://")
        {
            anyhow::bail!(
                "REDIS_URL must start with 'redis://' or 'rediss://', got '{}'",
                mask_connection_string(redis_url)
            );
        }

        if self.provider_timeout_seconds == 0 {
            anyhow::bail!("PROVIDER_TIMEOUT_SECONDS must be greater than 0");
        }

        for (name, value) in [
            ("ANALYSIS_DEMO_DELAY_MS", self.analysis_demo_delay_ms),
            ("RECOMMENDATION_DEMO_DELAY_MS", self.recommendation_demo_delay_ms),
        ] {
            if value > MAX_DEMO_DELAY_MS {
                anyhow::bail!(
                    "{} must be at most {}, got {}",
                    name,
                    MAX_DEMO_DELAY_MS,
                    value
                );
            }
        }

        Ok(())
    }

    /// Returns whether a live provider is configured.
    pub fn is_live(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_seconds)
    }

    pub fn analysis_demo_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_demo_delay_ms)
    }

    pub fn recommendation_demo_delay(&self) -> Duration {
        Duration::from_millis(self.recommendation_demo_delay_ms)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        match self.api_key {
            Some(ref key) => tracing::info!(
                "  Provider: {} (key {}) at {}",
                self.model,
                mask_secret(key),
                self.provider_base_url
            ),
            None => tracing::info!(
                "  Provider: demo mode (delays {}ms / {}ms)",
                self.analysis_demo_delay_ms,
                self.recommendation_demo_delay_ms
            ),
        }

        if let Some(ref redis_url) = self.redis_url {
            tracing::info!("  Store: {} (redis)", mask_connection_string(redis_url));
        } else {
            tracing::info!("  Store: in-memory");
        }

        if self.credential_secret == DEV_CREDENTIAL_SECRET {
            tracing::warn!("  CREDENTIAL_SECRET not set, using the development default");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks sensitive information in connection strings for logging.
///
/// Replaces password with `***` in URLs like:
/// - `redis://:password@host:port/db` → `redis://:***@host:port/db`
fn mask_connection_string(url: &str) -> String {
    if let Some(start) = url.find("://") {
        let rest = &url[start + 3..];

        if let Some(at_pos) = rest.find('@') {
            let credentials = &rest[..at_pos];
            let host_part = &rest[at_pos..];

            if let Some(colon_pos) = credentials.rfind(':') {
                let username = &credentials[..colon_pos];
                return format!("{}://{}:***{}", &url[..start], username, host_part);
            }
        }
    }

    url.to_string()
}

/// Keeps the last four characters of a secret.
fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "***".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("***{}", tail)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable fails to parse or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "GEMINI_API_KEY",
        "API_KEY",
        "GEMINI_MODEL",
        "PROVIDER_TIMEOUT_SECONDS",
        "ANALYSIS_DEMO_DELAY_MS",
        "REDIS_URL",
        "REDIS_HOST",
        "REDIS_PORT",
        "REDIS_PASSWORD",
        "REDIS_DB",
        "CREDENTIAL_SECRET",
    ];

    fn clear_env() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    fn base_config() -> Config {
        Config {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            provider_base_url: DEFAULT_BASE_URL.to_string(),
            provider_timeout_seconds: 120,
            analysis_demo_delay_ms: 2500,
            recommendation_demo_delay_ms: 3000,
            redis_url: None,
            store_key_prefix: "bizinsight:".to_string(),
            credential_secret: "test-secret".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_mask_connection_string() {
        assert_eq!(
            mask_connection_string("redis://:password@localhost:6379/0"),
            "redis://:***@localhost:6379/0"
        );
        assert_eq!(
            mask_connection_string("redis://localhost:6379/0"),
            "redis://localhost:6379/0"
        );
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("AIzaSyABCDEF1234"), "***1234");
        assert_eq!(mask_secret("abc"), "***");
    }

    #[test]
    fn test_validate() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        config.log_format = "xml".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "127.0.0.1:3000".to_string();

        config.redis_url = Some("http://localhost:6379".to_string());
        assert!(config.validate().is_err());
        config.redis_url = Some("rediss://localhost:6379".to_string());
        assert!(config.validate().is_ok());

        config.provider_timeout_seconds = 0;
        assert!(config.validate().is_err());
        config.provider_timeout_seconds = 30;

        config.recommendation_demo_delay_ms = 60_001;
        assert!(config.validate().is_err());
        config.recommendation_demo_delay_ms = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_defaults_mean_demo_mode() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert!(!config.is_live());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.analysis_demo_delay(), Duration::from_millis(2500));
        assert_eq!(config.recommendation_demo_delay(), Duration::from_millis(3000));
        assert_eq!(config.provider_timeout(), Duration::from_secs(120));
        assert_eq!(config.credential_secret, DEV_CREDENTIAL_SECRET);
        assert!(config.redis_url.is_none());
    }

    #[test]
    #[serial]
    fn test_api_key_priority_and_blank_values() {
        clear_env();

        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("GEMINI_API_KEY", "   ");
            env::set_var("API_KEY", "legacy-key");
        }
        assert_eq!(Config::load_api_key().as_deref(), Some("legacy-key"));

        unsafe {
            env::set_var("GEMINI_API_KEY", "primary-key");
        }
        assert_eq!(Config::load_api_key().as_deref(), Some("primary-key"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_number_is_an_error() {
        clear_env();

        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("PROVIDER_TIMEOUT_SECONDS", "soon");
        }
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("PROVIDER_TIMEOUT_SECONDS"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_redis_url_from_components() {
        clear_env();

        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("REDIS_HOST", "redis-host");
            env::set_var("REDIS_PORT", "6380");
            env::set_var("REDIS_DB", "1");
        }
        assert_eq!(
            Config::load_redis_url().unwrap(),
            "redis://redis-host:6380/1"
        );

        unsafe {
            env::set_var("REDIS_PASSWORD", "secret");
        }
        assert_eq!(
            Config::load_redis_url().unwrap(),
            "redis://:secret@redis-host:6380/1"
        );

        unsafe {
            env::set_var("REDIS_PASSWORD", "");
        }
        assert_eq!(
            Config::load_redis_url().unwrap(),
            "redis://redis-host:6380/1"
        );

        unsafe {
            env::set_var("REDIS_URL", "redis://from-url:6379/0");
        }
        assert!(Config::load_redis_url().unwrap().contains("from-url"));

        clear_env();
    }
}
