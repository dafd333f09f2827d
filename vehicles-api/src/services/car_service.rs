//! Car enrichment orchestrator
//!
//! Composes the store with the price and maps collaborators into complete
//! vehicle views, and governs create/update/delete semantics.
//!
//! Two policies are fixed here:
//! - every read path re-enriches unconditionally, `list()` included; price
//!   and address are transient, so storage never has a fresher value than
//!   the collaborators;
//! - a failed enrichment degrades the read to a partial record (price left
//!   empty, location left at its bare coordinates) instead of failing the
//!   whole request. The failure is logged at warn level.
//!
//! The orchestrator holds no shared mutable state; each call works only on
//! data passed in and data returned from its collaborators.

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use crate::clients::{AddressLookup, PriceLookup};
use crate::models::car::{Car, CarInput};
use crate::repositories::CarStore;
use crate::utils::errors::{not_found_error, AppResult};

pub struct CarService {
    store: Arc<dyn CarStore>,
    prices: Arc<dyn PriceLookup>,
    maps: Arc<dyn AddressLookup>,
}

impl CarService {
    pub fn new(
        store: Arc<dyn CarStore>,
        prices: Arc<dyn PriceLookup>,
        maps: Arc<dyn AddressLookup>,
    ) -> Self {
        Self {
            store,
            prices,
            maps,
        }
    }

    /// All vehicles, each enriched with transient price and address data.
    pub async fn list(&self) -> AppResult<Vec<Car>> {
        let cars = self.store.find_all().await?;

        let mut enriched = Vec::with_capacity(cars.len());
        for car in cars {
            enriched.push(self.enrich(car).await);
        }
        Ok(enriched)
    }

    /// A single vehicle by id, enriched. NotFound when the id does not
    /// resolve.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Car> {
        let car = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Car", &id.to_string()))?;

        Ok(self.enrich(car).await)
    }

    /// Create a vehicle (no id) or merge an update onto an existing one
    /// (id supplied). An id that does not resolve is NotFound. Returns the
    /// persisted record without re-enrichment.
    pub async fn save(&self, id: Option<Uuid>, input: CarInput) -> AppResult<Car> {
        match id {
            Some(id) => {
                let mut existing = self
                    .store
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| not_found_error("Car", &id.to_string()))?;

                existing.merge(input);
                self.store.save(existing).await
            }
            None => self.store.save(Car::from_input(input)).await,
        }
    }

    /// Remove a vehicle. NotFound when the id does not resolve. No
    /// enrichment happens here.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Car", &id.to_string()))?;

        self.store.delete(id).await
    }

    /// Attach transient price and address data to a stored record. Both
    /// lookups are best-effort: a failure leaves the field unpopulated.
    async fn enrich(&self, mut car: Car) -> Car {
        if let Some(id) = car.id {
            match self.prices.get_price(id).await {
                Ok(price) => car.price = Some(price),
                Err(e) => warn!("price enrichment failed for car {}: {}", id, e),
            }
        }

        match self.maps.get_address(car.location.clone()).await {
            Ok(location) => car.location = location,
            Err(e) => warn!(
                "address enrichment failed for car {:?}: {}",
                car.id, e
            ),
        }

        car
    }
}
