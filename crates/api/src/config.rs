use folio_core::site::normalize_site_url;

use crate::auth::jwt::JwtConfig;

/// Credentials of the single administrator account.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Login name (default: `admin`).
    pub username: String,
    /// Argon2id PHC string of the admin password.
    pub password_hash: String,
}

impl AdminConfig {
    /// Load admin credentials from the environment.
    ///
    /// # Panics
    ///
    /// Panics if `ADMIN_PASSWORD_HASH` is not set or is empty.
    pub fn from_env() -> Self {
        let username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into());
        let password_hash = std::env::var("ADMIN_PASSWORD_HASH")
            .expect("ADMIN_PASSWORD_HASH must be set in the environment");
        assert!(
            !password_hash.is_empty(),
            "ADMIN_PASSWORD_HASH must not be empty"
        );
        Self {
            username,
            password_hash,
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// Defaults suit local development; override via environment variables in
/// production.
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
    /// Public base URL without trailing slash, used by robots.txt and the sitemap.
    pub site_url: String,
    /// JWT token configuration.
    pub jwt: JwtConfig,
    /// Admin login credentials.
    pub admin: AdminConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                    |
    /// |--------------------------|----------------------------|
    /// | `HOST`                   | `0.0.0.0`                  |
    /// | `PORT`                   | `3000`                     |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                       |
    /// | `SITE_URL`               | `http://localhost:3000`    |
    /// | `ADMIN_USERNAME`         | `admin`                    |
    /// | `ADMIN_PASSWORD_HASH`    | required                   |
    /// | `JWT_SECRET`             | required                   |
    /// | `JWT_ACCESS_EXPIRY_MINS` | `60`                       |
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

        let site_url = normalize_site_url(
            &std::env::var("SITE_URL").unwrap_or_else(|_| "http://localhost:3000".into()),
        );

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            site_url,
            jwt: JwtConfig::from_env(),
            admin: AdminConfig::from_env(),
        }
    }
}
