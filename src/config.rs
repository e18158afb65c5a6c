use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the Apple Music developer token.
pub const TOKEN_ENV_VAR: &str = "JUKEBOX_APPLE_MUSIC_TOKEN";
/// Environment variable selecting the catalog storefront.
pub const STOREFRONT_ENV_VAR: &str = "JUKEBOX_STOREFRONT";

const DEFAULT_STOREFRONT: &str = "us";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 9_000;

/// Configuration shared by the catalog sources.
///
/// Both fields that matter operationally are optional: without a developer
/// token the Apple Music source is disabled entirely (it reports no
/// candidates rather than failing), and the storefront defaults to `"us"`.
///
/// # Examples
///
/// ```rust
/// use birthday_jukebox::JukeboxConfig;
///
/// let config = JukeboxConfig::from_env();
/// if config.developer_token.is_none() {
///     println!("Apple Music catalog disabled; iTunes search only");
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JukeboxConfig {
    /// Bearer token for the Apple Music catalog; `None` disables that source
    pub developer_token: Option<String>,
    /// Storefront/country code used by both catalogs
    pub storefront: String,
    /// Per-request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for JukeboxConfig {
    fn default() -> Self {
        Self {
            developer_token: None,
            storefront: DEFAULT_STOREFRONT.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl JukeboxConfig {
    /// Read configuration from the environment.
    ///
    /// Empty values are treated as absent.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            developer_token: std::env::var(TOKEN_ENV_VAR)
                .ok()
                .filter(|token| !token.is_empty()),
            storefront: std::env::var(STOREFRONT_ENV_VAR)
                .ok()
                .filter(|storefront| !storefront.is_empty())
                .unwrap_or(defaults.storefront),
            request_timeout_ms: defaults.request_timeout_ms,
        }
    }

    /// The per-request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
