use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub cache_ttl: Duration,
    pub cache_max_capacity: u64,
    /// Newline-delimited JSON events; stdin when unset.
    pub events_path: Option<PathBuf>,
    /// Stop at the first failed event instead of logging and moving on.
    pub halt_on_error: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:ledger.db".to_string(),
            cache_ttl: Duration::from_secs(60),
            cache_max_capacity: 10_000,
            events_path: None,
            halt_on_error: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();
        let defaults = Self::default();

        let database_url = env::var("DATABASE_URL").unwrap_or(defaults.database_url);
        let cache_ttl = env::var("CACHE_TTL")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.cache_ttl);
        let cache_max_capacity = env::var("CACHE_MAX_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.cache_max_capacity);
        let events_path = env::var("EVENTS_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let halt_on_error = env::var("HALT_ON_ERROR")
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.halt_on_error);

        Self {
            database_url,
            cache_ttl,
            cache_max_capacity,
            events_path,
            halt_on_error,
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" 1 "));
        assert!(parse_flag("YES"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("off"));
    }

    #[test]
    fn defaults_point_at_a_local_database() {
        let config = Config::default();
        assert_eq!(config.database_url, "sqlite:ledger.db");
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert!(config.events_path.is_none());
        assert!(!config.halt_on_error);
    }
}
