//! Server configuration and environment variable handling.

use std::env;

/// Origins allowed to call the API directly from a browser.
///
/// Deployments going through the frontend's server-side proxy never hit
/// CORS; this list only matters for direct browser calls.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "https://www.oramax.space",
    "https://oramax.space",
    "http://localhost:3000",
];

/// Path prefix under which every endpoint is mounted.
pub const DEFAULT_API_PREFIX: &str = "/exoplanet";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host (default: 0.0.0.0)
    pub host: String,
    /// Bind port (default: 8080)
    pub port: u16,
    /// Path prefix for all routes (default: /exoplanet)
    pub api_prefix: String,
    /// CORS origin allow-list
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Create a server configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0): bind host
    /// - `PORT` (optional, default: 8080): bind port
    /// - `API_PREFIX` (optional, default: /exoplanet): route prefix,
    ///   normalized to a leading slash and no trailing slash
    /// - `ALLOWED_ORIGINS` (optional): comma-separated CORS origin
    ///   allow-list, defaulting to the oramax.space origins plus
    ///   localhost:3000
    ///
    /// Every variable has a usable default, so this never fails; values
    /// that fail to parse fall back to their default.
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);
        let api_prefix = env::var("API_PREFIX")
            .map(|p| normalize_prefix(&p))
            .unwrap_or_else(|_| DEFAULT_API_PREFIX.to_string());
        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_else(|_| {
                DEFAULT_ALLOWED_ORIGINS
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            });

        Self {
            host,
            port,
            api_prefix,
            allowed_origins,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Force a leading slash and strip trailing slashes; an empty or
/// all-slash value falls back to the default prefix.
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_PREFIX.to_string()
    } else {
        format!("/{trimmed}")
    }
}
