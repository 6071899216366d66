use std::path::PathBuf;

use homelogger_db::demo::DEFAULT_DEMO_DATA_PATH;

/// Default cap on request bodies (uploads included): 50 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8083`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// SQLite database file.
    pub database_path: PathBuf,
    /// Directory holding uploaded file bytes.
    pub uploads_dir: PathBuf,
    /// Maximum accepted request body size in bytes.
    pub max_upload_bytes: usize,
    /// Seed demo data on startup.
    pub demo_mode: bool,
    /// JSON file used for demo seeding.
    pub demo_data_path: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                              |
    /// |------------------------|--------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                            |
    /// | `PORT`                 | `8083`                               |
    /// | `CORS_ORIGINS`         | `*`                                  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                 |
    /// | `DATA_DIR`             | `./data`                             |
    /// | `DATABASE_PATH`        | `$DATA_DIR/db/homelogger.db`         |
    /// | `MAX_UPLOAD_BYTES`     | `52428800`                           |
    /// | `DEMO_MODE`            | `false` (`true` or `1` enables)      |
    /// | `DEMO_DATA_PATH`       | `crates/db/demo/sample_data.json`    |
    ///
    /// Uploads always live in `$DATA_DIR/uploads`.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8083".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let data_dir = PathBuf::from(std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".into()));

        let database_path = std::env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("db").join("homelogger.db"));

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .map(|v| v.parse().expect("MAX_UPLOAD_BYTES must be a valid usize"))
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        let demo_mode = std::env::var("DEMO_MODE")
            .map(|v| is_enabled(&v))
            .unwrap_or(false);

        let demo_data_path = PathBuf::from(
            std::env::var("DEMO_DATA_PATH").unwrap_or_else(|_| DEFAULT_DEMO_DATA_PATH.into()),
        );

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_path,
            uploads_dir: data_dir.join("uploads"),
            max_upload_bytes,
            demo_mode,
            demo_data_path,
        }
    }

    /// `true` when CORS should accept any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn is_enabled(value: &str) -> bool {
    matches!(value.trim(), "true" | "1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_flag_accepts_true_and_one() {
        assert!(is_enabled("true"));
        assert!(is_enabled("1"));
        assert!(!is_enabled("yes"));
        assert!(!is_enabled("false"));
        assert!(!is_enabled(""));
    }
}
