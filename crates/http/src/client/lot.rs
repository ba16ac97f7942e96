//! Lot API client methods

use super::{ClientError, ParkingClient};
use crate::types::{CitySearchRequest, CitySearchResponse, Lot};
use reqwest::Method;

impl ParkingClient {
    /// List the lots of a city, in server order
    pub async fn get_lots_by_city(&self, city: &str) -> Result<Vec<Lot>, ClientError> {
        tracing::debug!(city, "searching lots");
        let request = self
            .request(Method::POST, "/api/lot/getLotsByCity")
            .json(&CitySearchRequest {
                city: city.to_string(),
            });
        let response: CitySearchResponse = self.execute(request).await?;
        Ok(response.lots_city)
    }
}
