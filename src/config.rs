//! Service configuration loaded from environment variables.
//!
//! All settings come from environment variables (or a `.env` file via
//! `dotenvy`). When the Supabase project is not configured the service
//! falls back to an in-memory source, optionally seeded from a file.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Connection settings for the Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseSettings {
    /// Project URL (e.g. `https://xyz.supabase.co`).
    pub url: String,
    /// Public anon key.
    pub anon_key: String,
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`CatalogConfig::from_env`].
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Remote backend, `None` when `SUPABASE_URL` or `SUPABASE_ANON_KEY`
    /// is missing.
    pub supabase: Option<SupabaseSettings>,

    /// JSON seed for the in-memory source.
    pub events_seed_file: Option<PathBuf>,

    /// Timeout in seconds for a single request to the data source.
    pub fetch_timeout_secs: u64,

    /// Capacity of each listing's criteria broadcast channel.
    pub criteria_bus_capacity: usize,

    /// Log output format.
    pub log_format: LogFormat,
}

impl CatalogConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()?;

        let supabase = match (non_empty_env("SUPABASE_URL"), non_empty_env("SUPABASE_ANON_KEY")) {
            (Some(url), Some(anon_key)) => Some(SupabaseSettings { url, anon_key }),
            _ => None,
        };

        let events_seed_file = non_empty_env("EVENTS_SEED_FILE").map(PathBuf::from);
        let fetch_timeout_secs = parse_env("FETCH_TIMEOUT_SECS", 10);
        let criteria_bus_capacity = parse_env("CRITERIA_BUS_CAPACITY", 16);
        let log_format = parse_log_format(std::env::var("LOG_FORMAT").ok().as_deref());

        Ok(Self {
            listen_addr,
            supabase,
            events_seed_file,
            fetch_timeout_secs,
            criteria_bus_capacity,
            log_format,
        })
    }

    /// Request timeout for the data source.
    #[must_use]
    pub const fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            supabase: None,
            events_seed_file: None,
            fetch_timeout_secs: 10,
            criteria_bus_capacity: 16,
            log_format: LogFormat::Pretty,
        }
    }
}

/// Returns the variable's value unless it is unset or blank.
fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Accepts `"json"` (case-insensitive); anything else is pretty output.
fn parse_log_format(value: Option<&str>) -> LogFormat {
    match value {
        Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
        _ => LogFormat::Pretty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_parsing() {
        assert_eq!(parse_log_format(Some("json")), LogFormat::Json);
        assert_eq!(parse_log_format(Some("JSON")), LogFormat::Json);
        assert_eq!(parse_log_format(Some("pretty")), LogFormat::Pretty);
        assert_eq!(parse_log_format(None), LogFormat::Pretty);
    }

    #[test]
    fn missing_variable_uses_default() {
        let value: u64 = parse_env("ATHLOS_TEST_UNSET_VARIABLE", 42);
        assert_eq!(value, 42);
        assert!(non_empty_env("ATHLOS_TEST_UNSET_VARIABLE").is_none());
    }

    #[test]
    fn default_has_no_remote_backend() {
        let config = CatalogConfig::default();
        assert!(config.supabase.is_none());
        assert_eq!(config.fetch_timeout(), Duration::from_secs(10));
    }
}
