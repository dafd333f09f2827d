//! In-memory price table
//!
//! Vehicle identifiers are v4 UUIDs assigned by the vehicles service, so a
//! table seeded ahead of time can never know them. Instead the repository
//! derives a stable pseudo-random price from the identifier itself and
//! memoizes it: the same vehicle always quotes the same price, across
//! lookups and across restarts.

use std::collections::HashMap;

use rand::{rngs::StdRng, Rng, SeedableRng};
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::price::Price;

const CURRENCY: &str = "USD";

/// Quoted prices range from $5,000.00 to $59,999.99, in cents.
const MIN_CENTS: i64 = 500_000;
const MAX_CENTS: i64 = 6_000_000;

#[derive(Default)]
pub struct PriceRepository {
    prices: RwLock<HashMap<Uuid, Decimal>>,
}

impl PriceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the price for a vehicle, deriving and memoizing it on first
    /// access.
    pub async fn get(&self, vehicle_id: Uuid) -> Price {
        if let Some(amount) = self.prices.read().await.get(&vehicle_id) {
            return Price {
                vehicle_id,
                currency: CURRENCY.to_string(),
                price: *amount,
            };
        }

        let amount = synthesize_price(vehicle_id);
        self.prices.write().await.insert(vehicle_id, amount);
        tracing::debug!("quoted {} {} for vehicle {}", CURRENCY, amount, vehicle_id);

        Price {
            vehicle_id,
            currency: CURRENCY.to_string(),
            price: amount,
        }
    }

    /// All prices quoted so far.
    pub async fn list(&self) -> Vec<Price> {
        self.prices
            .read()
            .await
            .iter()
            .map(|(vehicle_id, amount)| Price {
                vehicle_id: *vehicle_id,
                currency: CURRENCY.to_string(),
                price: *amount,
            })
            .collect()
    }
}

/// Derive a stable price from the identifier: the UUID seeds the RNG, so the
/// result is deterministic per vehicle.
fn synthesize_price(vehicle_id: Uuid) -> Decimal {
    let (hi, lo) = vehicle_id.as_u64_pair();
    let mut rng = StdRng::seed_from_u64(hi ^ lo);
    let cents = rng.gen_range(MIN_CENTS..MAX_CENTS);
    Decimal::new(cents, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesized_price_is_stable_per_id() {
        let id = Uuid::new_v4();
        assert_eq!(synthesize_price(id), synthesize_price(id));
    }

    #[test]
    fn synthesized_price_is_in_range_with_cents() {
        for _ in 0..100 {
            let price = synthesize_price(Uuid::new_v4());
            assert!(price >= Decimal::new(MIN_CENTS, 2));
            assert!(price < Decimal::new(MAX_CENTS, 2));
            assert_eq!(price.scale(), 2);
        }
    }

    #[tokio::test]
    async fn repeated_lookups_return_the_same_price() {
        let repository = PriceRepository::new();
        let id = Uuid::new_v4();

        let first = repository.get(id).await;
        let second = repository.get(id).await;

        assert_eq!(first, second);
        assert_eq!(first.currency, "USD");
    }

    #[tokio::test]
    async fn list_contains_quoted_prices() {
        let repository = PriceRepository::new();
        let id = Uuid::new_v4();

        assert!(repository.list().await.is_empty());
        let quoted = repository.get(id).await;

        let all = repository.list().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], quoted);
    }
}
