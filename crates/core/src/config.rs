//! Process configuration loaded from environment variables.
//!
//! All secrets are supplied externally: the Supabase credentials and the
//! VWM session cookie. There are no defaults and no prompts; a missing
//! secret is a fatal startup error raised before any network call.

/// Environment variable holding the Supabase project URL.
pub const ENV_SUPABASE_URL: &str = "SUPABASE_URL";

/// Environment variable holding the Supabase service key.
pub const ENV_SUPABASE_KEY: &str = "SUPABASE_KEY";

/// Environment variable holding the raw VWM session cookie.
pub const ENV_VINCONS_COOKIE: &str = "VINCONS_COOKIE";

/// Optional override for the VWM portal base URL.
pub const ENV_VWM_BASE_URL: &str = "VWM_BASE_URL";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
}

/// Connection and auth secrets for one sync run.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Supabase project URL (e.g. `https://xyz.supabase.co`).
    pub supabase_url: String,
    /// Supabase service key, used for both PostgREST auth headers.
    pub supabase_key: String,
    /// Raw `cookie` header value for an authenticated VWM session,
    /// captured externally and never refreshed here.
    pub vincons_cookie: String,
    /// Override for the VWM portal host, if set.
    pub vwm_base_url: Option<String>,
}

impl SyncConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var          | Required |
    /// |------------------|----------|
    /// | `SUPABASE_URL`   | yes      |
    /// | `SUPABASE_KEY`   | yes      |
    /// | `VINCONS_COOKIE` | yes      |
    /// | `VWM_BASE_URL`   | no       |
    ///
    /// A required variable that is unset or empty yields
    /// [`ConfigError::MissingVar`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            supabase_url: require(ENV_SUPABASE_URL)?,
            supabase_key: require(ENV_SUPABASE_KEY)?,
            vincons_cookie: require(ENV_VINCONS_COOKIE)?,
            vwm_base_url: optional(ENV_VWM_BASE_URL),
        })
    }
}

/// Read a required variable. Empty values count as missing.
fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingVar(name))
}

/// Read an optional variable. Empty values count as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
