use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Profile Map";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default bind address for the HTTP API.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Environment variables read at startup.
pub const ENV_BIND_ADDR: &str = "PROFILE_MAP_BIND";
pub const ENV_MAP_API_KEY: &str = "GOOGLE_MAPS_API_KEY";
pub const ENV_MAP_API_KEY_FALLBACK: &str = "VITE_GOOGLE_MAPS_API_KEY";
pub const ENV_STATIC_DIR: &str = "PROFILE_MAP_STATIC_DIR";

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "profile_map_lib=info,profile_map=info,tower_http=warn"
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {var} value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Startup configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Mapping service credential. Validity is judged by `MapStatus`.
    pub map_api_key: Option<String>,
    /// Browser frontend assets served at `/` when set.
    pub static_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary lookup so tests never touch the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: ENV_BIND_ADDR,
                value: bind_raw.clone(),
                reason: e.to_string(),
            })?;

        let map_api_key = lookup(ENV_MAP_API_KEY).or_else(|| lookup(ENV_MAP_API_KEY_FALLBACK));

        let static_dir = lookup(ENV_STATIC_DIR)
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            map_api_key,
            static_dir,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            map_api_key: None,
            static_dir: None,
        }
    }
}
