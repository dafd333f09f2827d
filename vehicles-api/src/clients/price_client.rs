//! Price lookup client
//!
//! Fetches the price of a vehicle from the pricing service. The orchestrator
//! decides what happens when this fails; the client only reports it.

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::utils::errors::{AppError, AppResult};

#[async_trait]
pub trait PriceLookup: Send + Sync {
    /// Formatted price string for the vehicle, e.g. `"USD 23140.50"`.
    async fn get_price(&self, vehicle_id: Uuid) -> AppResult<String>;
}

/// Wire shape of `GET /prices/{id}` on the pricing service.
#[derive(Debug, Deserialize)]
struct PriceResponse {
    currency: String,
    price: String,
}

pub struct HttpPriceClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpPriceClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self { base_url, client }
    }
}

#[async_trait]
impl PriceLookup for HttpPriceClient {
    async fn get_price(&self, vehicle_id: Uuid) -> AppResult<String> {
        let url = format!("{}/prices/{}", self.base_url, vehicle_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("pricing service unreachable: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ExternalApi(format!(
                "pricing service returned {} for vehicle {}",
                status, vehicle_id
            )));
        }

        let price: PriceResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalApi(format!("invalid pricing response: {}", e)))?;

        Ok(format!("{} {}", price.currency, price.price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_response_formats_as_currency_and_amount() {
        let response: PriceResponse =
            serde_json::from_str(r#"{"vehicle_id":"00000000-0000-0000-0000-000000000000","currency":"USD","price":"23140.50"}"#)
                .unwrap();
        assert_eq!(
            format!("{} {}", response.currency, response.price),
            "USD 23140.50"
        );
    }
}
