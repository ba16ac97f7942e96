//! Client configuration and initialization

use crate::config::ApiConfig;
pub use parkspot_http::ClientError;
use parkspot_http::ParkingClient;
use std::time::Duration;

/// Connection settings for the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub base_url: String,
    /// `None` waits as long as the server takes
    pub timeout: Option<Duration>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: ApiConfig::DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

/// Build the credentialed client every flow of one session shares
pub fn create_client(settings: &ApiSettings) -> Result<ParkingClient, ClientError> {
    let mut builder = ParkingClient::builder().base_url(&settings.base_url);
    if let Some(timeout) = settings.timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_build() {
        let client = create_client(&ApiSettings::default()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:4000");
    }

    #[test]
    fn test_bad_base_url_is_rejected() {
        let settings = ApiSettings {
            base_url: "localhost without scheme".into(),
            timeout: None,
        };
        assert!(matches!(
            create_client(&settings),
            Err(ClientError::Configuration(_))
        ));
    }
}
