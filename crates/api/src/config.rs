use std::path::PathBuf;

use moviehub_core::upload::DEFAULT_MAX_UPLOAD_BYTES;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Largest accepted poster or clip upload in bytes (default: 10 MiB).
    pub max_upload_bytes: usize,
    /// Where uploaded posters and clips are stored.
    pub storage: StorageConfig,
}

/// Object storage backend selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// Files on local disk, served by this server under `/storage`.
    Local {
        root: PathBuf,
        public_base_url: String,
    },
    /// A hosted storage REST API.
    Http { api_url: String, api_key: String },
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                         |
    /// |------------------------|---------------------------------|
    /// | `HOST`                 | `0.0.0.0`                       |
    /// | `PORT`                 | `3000`                          |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`         |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                            |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`                      |
    /// | `STORAGE_BACKEND`      | `local`                         |
    /// | `STORAGE_ROOT`         | `storage`                       |
    /// | `STORAGE_PUBLIC_URL`   | `http://localhost:3000/storage` |
    /// | `STORAGE_API_URL`      | (required for `http`)           |
    /// | `STORAGE_API_KEY`      | (required for `http`)           |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .map(|v| v.parse().expect("MAX_UPLOAD_BYTES must be a valid usize"))
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            max_upload_bytes,
            storage: StorageConfig::from_env(),
        }
    }
}

impl StorageConfig {
    /// Load the storage backend from `STORAGE_*` environment variables.
    ///
    /// Panics on an unknown backend or a missing `http` credential so
    /// misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let backend = std::env::var("STORAGE_BACKEND").unwrap_or_else(|_| "local".into());

        match backend.trim().to_ascii_lowercase().as_str() {
            "local" => Self::Local {
                root: std::env::var("STORAGE_ROOT")
                    .unwrap_or_else(|_| "storage".into())
                    .into(),
                public_base_url: std::env::var("STORAGE_PUBLIC_URL")
                    .unwrap_or_else(|_| "http://localhost:3000/storage".into()),
            },
            "http" => Self::Http {
                api_url: std::env::var("STORAGE_API_URL")
                    .expect("STORAGE_API_URL must be set when STORAGE_BACKEND=http"),
                api_key: std::env::var("STORAGE_API_KEY")
                    .expect("STORAGE_API_KEY must be set when STORAGE_BACKEND=http"),
            },
            other => panic!("Unknown STORAGE_BACKEND '{other}'. Must be one of: local, http"),
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
