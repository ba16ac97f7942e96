//! Account API client methods

use super::{ClientError, ParkingClient};
use crate::types::{Identity, LoginRequest, UserResponse};
use reqwest::Method;

impl ParkingClient {
    /// Exchange credentials for a session; the session cookie lands in the jar
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, ClientError> {
        tracing::debug!(email, "logging in");
        let request = self
            .request(Method::POST, "/api/user/login")
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            });
        let response: UserResponse = self.execute(request).await?;
        Ok(response.user)
    }

    /// End the server side session
    pub async fn logout(&self) -> Result<(), ClientError> {
        tracing::debug!("logging out");
        let request = self.request(Method::GET, "/api/user/logout");
        self.execute_empty(request).await
    }

    /// Ask the server who the current session belongs to
    pub async fn current_user(&self) -> Result<Identity, ClientError> {
        let request = self.request(Method::GET, "/api/user/me");
        let response: UserResponse = self.execute(request).await?;
        Ok(response.user)
    }
}
