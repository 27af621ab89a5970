use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub storage: StorageConfig,
    pub sources: SourceConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "5050".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let data_path = PathBuf::from(
            env::var("POSTCODE_DATA_PATH").unwrap_or_else(|_| "postcodes.json".to_string()),
        );
        let backup_dir = env::var("POSTCODE_BACKUP_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_backup_dir(&data_path));
        let update_log_path = PathBuf::from(
            env::var("POSTCODE_UPDATE_LOG").unwrap_or_else(|_| "update_logs.json".to_string()),
        );
        let update_log_limit = parse_number("POSTCODE_UPDATE_LOG_LIMIT", 50)?;
        let minimum_dataset_size = parse_number("POSTCODE_MIN_DATASET", 10)?;

        let csv_tables = env::var("POSTCODE_SOURCE_CSV").ok().map(PathBuf::from);
        let text_document = env::var("POSTCODE_SOURCE_TEXT").ok().map(PathBuf::from);
        let include_official_tables = parse_bool("POSTCODE_OFFICIAL_TABLES", true)?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            storage: StorageConfig {
                data_path,
                backup_dir,
                update_log_path,
                update_log_limit,
                minimum_dataset_size,
            },
            sources: SourceConfig {
                csv_tables,
                text_document,
                include_official_tables,
            },
        })
    }
}

fn default_backup_dir(data_path: &Path) -> PathBuf {
    match data_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn parse_number(key: &'static str, default: usize) -> Result<usize, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidNumber { key }),
        Err(_) => Ok(default),
    }
}

fn parse_bool(key: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidBool { key }),
        },
        Err(_) => Ok(default),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where the canonical snapshot, its backups and the update log live.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_path: PathBuf,
    pub backup_dir: PathBuf,
    pub update_log_path: PathBuf,
    pub update_log_limit: usize,
    /// Below this many postcodes the merge engine seeds the fallback set.
    pub minimum_dataset_size: usize,
}

/// Optional classification inputs beyond the built-in official tables.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub csv_tables: Option<PathBuf>,
    pub text_document: Option<PathBuf>,
    pub include_official_tables: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { key: &'static str },
    InvalidBool { key: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { key } => {
                write!(f, "{key} must be a non-negative integer")
            }
            ConfigError::InvalidBool { key } => write!(f, "{key} must be true or false"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidNumber { .. }
            | ConfigError::InvalidBool { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "POSTCODE_DATA_PATH",
            "POSTCODE_BACKUP_DIR",
            "POSTCODE_UPDATE_LOG",
            "POSTCODE_UPDATE_LOG_LIMIT",
            "POSTCODE_MIN_DATASET",
            "POSTCODE_SOURCE_CSV",
            "POSTCODE_SOURCE_TEXT",
            "POSTCODE_OFFICIAL_TABLES",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5050);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.storage.data_path, PathBuf::from("postcodes.json"));
        assert_eq!(config.storage.backup_dir, PathBuf::from("."));
        assert_eq!(config.storage.update_log_limit, 50);
        assert_eq!(config.storage.minimum_dataset_size, 10);
        assert!(config.sources.include_official_tables);
        assert!(config.sources.csv_tables.is_none());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 5050));
        reset_env();
    }

    #[test]
    fn backup_dir_follows_data_path_parent() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("POSTCODE_DATA_PATH", "/var/lib/postcodes/postcodes.json");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(
            config.storage.backup_dir,
            PathBuf::from("/var/lib/postcodes")
        );
        reset_env();
    }

    #[test]
    fn rejects_malformed_numbers_and_flags() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("POSTCODE_UPDATE_LOG_LIMIT", "many");
        let err = AppConfig::load().expect_err("limit must be numeric");
        assert!(matches!(
            err,
            ConfigError::InvalidNumber {
                key: "POSTCODE_UPDATE_LOG_LIMIT"
            }
        ));

        reset_env();
        env::set_var("POSTCODE_OFFICIAL_TABLES", "maybe");
        let err = AppConfig::load().expect_err("flag must be boolean");
        assert!(matches!(err, ConfigError::InvalidBool { .. }));
        reset_env();
    }
}
