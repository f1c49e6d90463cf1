/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATABASE_URI | sqlite:app.db | SQLite connection string |
/// | HTTP_HOST | 0.0.0.0 | Listen address |
/// | HTTP_PORT | 5555 | HTTP port |
/// | ENVIRONMENT | development | Runtime environment |
/// | LOG_LEVEL | info | Log level |
/// | LOG_DIR | (unset) | Directory for daily log files |
///
/// # Example
///
/// ```ignore
/// DATABASE_URI=sqlite:/data/pizza.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection string
    pub database_uri: String,
    /// HTTP listen address
    pub http_host: String,
    /// HTTP port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Log level when `RUST_LOG` is unset
    pub log_level: String,
    /// Log file directory, stdout only when unset
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_uri: std::env::var("DATABASE_URI").unwrap_or(defaults.database_uri),
            http_host: std::env::var("HTTP_HOST").unwrap_or(defaults.http_host),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.http_port),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }

    /// `host:port` the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_uri: "sqlite:app.db".into(),
            http_host: "0.0.0.0".into(),
            http_port: 5555,
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.database_uri, "sqlite:app.db");
        assert_eq!(config.bind_addr(), "0.0.0.0:5555");
        assert_eq!(config.environment, "development");
        assert_eq!(config.log_level, "info");
        assert!(config.log_dir.is_none());
    }
}
