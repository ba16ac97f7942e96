//! The remote operations the flows depend on

use crate::error::{AuthError, LogoutTransportError, SearchError};
use async_trait::async_trait;
use parkspot_http::{Identity, Lot, ParkingClient};

/// ParkSpot backend as seen by the flows.
///
/// Every call carries the current session proof. Nothing is retried here;
/// re-submitting is the user's decision.
#[async_trait]
pub trait ParkingApi: Send + Sync {
    /// Exchange credentials for a session
    async fn login(&self, email: &str, password: &str) -> Result<Identity, AuthError>;

    /// End the server side session
    async fn logout(&self) -> Result<(), LogoutTransportError>;

    /// Lots of a city, in server order. An empty list is a successful search.
    async fn search_lots_by_city(&self, city: &str) -> Result<Vec<Lot>, SearchError>;

    /// Who the current session belongs to, `None` when there is no session
    async fn current_user(&self) -> Result<Option<Identity>, AuthError>;
}

#[async_trait]
impl ParkingApi for ParkingClient {
    async fn login(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        Ok(ParkingClient::login(self, email, password).await?)
    }

    async fn logout(&self) -> Result<(), LogoutTransportError> {
        Ok(ParkingClient::logout(self).await?)
    }

    async fn search_lots_by_city(&self, city: &str) -> Result<Vec<Lot>, SearchError> {
        Ok(self.get_lots_by_city(city).await?)
    }

    async fn current_user(&self) -> Result<Option<Identity>, AuthError> {
        match ParkingClient::current_user(self).await {
            Ok(identity) => Ok(Some(identity)),
            Err(err) if err.is_unauthenticated() => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

// Mock implementation for testing
#[cfg(test)]
pub mod mock {
    use super::*;
    use mockall::mock;

    mock! {
        pub ParkingApi {}

        #[async_trait]
        impl ParkingApi for ParkingApi {
            async fn login(&self, email: &str, password: &str) -> Result<Identity, AuthError>;
            async fn logout(&self) -> Result<(), LogoutTransportError>;
            async fn search_lots_by_city(&self, city: &str) -> Result<Vec<Lot>, SearchError>;
            async fn current_user(&self) -> Result<Option<Identity>, AuthError>;
        }
    }
}

