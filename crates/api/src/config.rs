use detailworks_core::rate_limit::{DEFAULT_LIMIT, DEFAULT_WINDOW_SECS};

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
    /// Path of the content store JSON document.
    pub content_store_path: String,
    /// Directory scanned for unorganized media files.
    pub media_dir: String,
    /// Base URL of the external blog CMS API.
    pub cms_base_url: String,
    /// Contact endpoint rate limit: requests per window per client IP.
    pub contact_rate_limit: u32,
    /// Contact endpoint rate-limit window in seconds.
    pub contact_rate_window_secs: i64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                       |
    /// |----------------------------|-------------------------------|
    /// | `HOST`                     | `0.0.0.0`                     |
    /// | `PORT`                     | `3000`                        |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`       |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                          |
    /// | `CONTENT_STORE_PATH`       | `data/content-store.json`     |
    /// | `MEDIA_DIR`                | `public/media`                |
    /// | `CMS_BASE_URL`             | `http://localhost:8055/api`   |
    /// | `CONTACT_RATE_LIMIT`       | `5`                           |
    /// | `CONTACT_RATE_WINDOW_SECS` | `60`                          |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let content_store_path =
            std::env::var("CONTENT_STORE_PATH").unwrap_or_else(|_| "data/content-store.json".into());

        let media_dir = std::env::var("MEDIA_DIR").unwrap_or_else(|_| "public/media".into());

        let cms_base_url =
            std::env::var("CMS_BASE_URL").unwrap_or_else(|_| "http://localhost:8055/api".into());

        let contact_rate_limit: u32 = std::env::var("CONTACT_RATE_LIMIT")
            .unwrap_or_else(|_| DEFAULT_LIMIT.to_string())
            .parse()
            .expect("CONTACT_RATE_LIMIT must be a valid u32");

        let contact_rate_window_secs: i64 = std::env::var("CONTACT_RATE_WINDOW_SECS")
            .unwrap_or_else(|_| DEFAULT_WINDOW_SECS.to_string())
            .parse()
            .expect("CONTACT_RATE_WINDOW_SECS must be a valid i64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            content_store_path,
            media_dir,
            cms_base_url,
            contact_rate_limit,
            contact_rate_window_secs,
        }
    }
}
