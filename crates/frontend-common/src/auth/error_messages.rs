//! User-facing messages shown next to the control that caused them

pub const LOGIN_SUCCEEDED: &str = "Login successful";
pub const LOGIN_FAILED: &str = "Login failed";
pub const SEARCH_FAILED: &str = "Failed to fetch lots.";
pub const BLANK_CITY: &str = "Please enter a city name";
pub const MISSING_CREDENTIALS: &str = "Please enter your email and password";

/// Prefer the server's own wording; it is written for end users
pub fn get_user_friendly_error(server_message: Option<&str>, fallback: &str) -> String {
    server_message
        .filter(|message| !message.trim().is_empty())
        .unwrap_or(fallback)
        .to_string()
}
