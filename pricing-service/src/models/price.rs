//! Price model
//!
//! A price is read-only reference data: the vehicle service never mutates
//! it, it only looks it up by vehicle identifier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Price of a single vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub vehicle_id: Uuid,
    pub currency: String,
    pub price: Decimal,
}
