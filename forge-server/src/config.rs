//! Server configuration, loaded from environment variables at startup.

/// Runtime configuration for forge-server.
///
/// Every field has a sensible default so the server works out-of-the-box
/// without any environment variables set.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind (default: `"0.0.0.0"`).
    pub host: String,

    /// TCP port to listen on (default: `5000`, read from `PORT`).
    pub port: u16,

    /// Mount point of the workout routes (default: `"/api"`).
    /// An empty string or `"/"` mounts them at the root.
    pub api_prefix: String,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Comma-separated list of allowed CORS origins. `None` allows any origin.
    pub cors_allowed_origins: Option<String>,

    /// Start with the sample `Pushups` record in the store.
    pub seed_sample: bool,

    /// Serve the OpenAPI document at `/api-docs/openapi.json`.
    pub enable_docs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build [`Config`] from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: env_or(&lookup, "FORGE_HOST", "0.0.0.0"),
            port: parse_env(&lookup, "PORT", 5000),
            api_prefix: normalize_prefix(&env_or(&lookup, "FORGE_API_PREFIX", "/api")),
            log_level: env_or(&lookup, "FORGE_LOG", "info"),
            log_json: flag(&lookup, "FORGE_LOG_JSON", false),
            cors_allowed_origins: lookup("FORGE_CORS_ORIGINS").filter(|s| !s.trim().is_empty()),
            seed_sample: flag(&lookup, "FORGE_SEED_SAMPLE", true),
            enable_docs: flag(&lookup, "FORGE_ENABLE_DOCS", true),
        }
    }

    /// `host:port` string suitable for [`std::net::SocketAddr`] parsing.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_owned())
}

fn parse_env<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> bool {
    lookup(key)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}

/// `"api/"` -> `"/api"`, `"/"` -> `""`.
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
