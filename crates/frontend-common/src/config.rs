//! Frontend configuration

use std::time::Duration;

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// How long the login acknowledgment stays up before the landing page
    pub const LOGIN_REDIRECT_DELAY_MS: u64 = 1_000;

    pub const fn login_redirect_delay() -> Duration {
        Duration::from_millis(Self::LOGIN_REDIRECT_DELAY_MS)
    }
}

/// API endpoint configuration
pub struct ApiConfig;

impl ApiConfig {
    /// Base URL of the ParkSpot backend when nothing else is configured
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:4000";
}

/// Search configuration
pub struct SearchConfig;

impl SearchConfig {
    /// Key that submits the search while the city input has focus
    pub const COMMIT_KEY: &'static str = "Enter";
}
