//! In-memory car store
//!
//! Backs the service when no `DATABASE_URL` is configured, and every test.
//! It enforces the same invariant as the PostgreSQL schema: transient
//! fields (price, address) are scrubbed on write, so reads never see them
//! populated from storage.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::car::Car;
use crate::repositories::car_repository::CarStore;
use crate::utils::errors::{not_found_error, AppResult};

#[derive(Default)]
pub struct InMemoryCarStore {
    cars: RwLock<HashMap<Uuid, Car>>,
}

impl InMemoryCarStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Drop the fields the real schema has no columns for.
fn scrub_transient(car: &mut Car) {
    car.price = None;
    car.location.address = None;
    car.location.city = None;
    car.location.state = None;
    car.location.zip = None;
}

#[async_trait]
impl CarStore for InMemoryCarStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Car>> {
        Ok(self.cars.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Car>> {
        let mut cars: Vec<Car> = self.cars.read().await.values().cloned().collect();
        cars.sort_by_key(|car| car.created_at);
        Ok(cars)
    }

    async fn save(&self, mut car: Car) -> AppResult<Car> {
        let id = match car.id {
            Some(id) => {
                if !self.cars.read().await.contains_key(&id) {
                    return Err(not_found_error("Car", &id.to_string()));
                }
                id
            }
            None => {
                let id = Uuid::new_v4();
                car.id = Some(id);
                id
            }
        };

        scrub_transient(&mut car);
        self.cars.write().await.insert(id, car.clone());
        Ok(car)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        match self.cars.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(not_found_error("Car", &id.to_string())),
        }
    }
}
