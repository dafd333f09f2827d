//! Car model
//!
//! A car is persisted without its price and address: those are recomputed
//! from the remote collaborators on every read that needs them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Condition of the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Condition {
    New,
    Used,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::New => write!(f, "NEW"),
            Condition::Used => write!(f, "USED"),
        }
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(Condition::New),
            "USED" => Ok(Condition::Used),
            other => Err(format!("unknown condition '{}'", other)),
        }
    }
}

/// Vehicle manufacturer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub code: i32,
    pub name: String,
}

/// Descriptive attributes of a vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Details {
    pub manufacturer: Manufacturer,
    pub model: String,
    pub mileage: i32,
    pub external_color: String,
    pub body: String,
    pub engine: String,
    pub fuel_type: String,
    pub model_year: i32,
    pub production_year: i32,
    pub number_of_doors: i32,
}

/// Where the vehicle sits. Only the coordinates are persisted; the address
/// fields are filled in by the maps collaborator at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            address: None,
            city: None,
            state: None,
            zip: None,
        }
    }
}

/// A vehicle record. `id` is None until the store assigns one on first
/// persist. `price` is transient and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: Option<Uuid>,
    pub condition: Condition,
    pub details: Details,
    pub location: Location,
    #[serde(default)]
    pub price: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// The mutable subset of a car carried by create and update requests:
/// everything except identity, transient fields, and timestamps.
#[derive(Debug, Clone)]
pub struct CarInput {
    pub condition: Condition,
    pub details: Details,
    pub location: Location,
}

impl Car {
    /// Build a fresh, not-yet-persisted record from request input.
    pub fn from_input(input: CarInput) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            condition: input.condition,
            details: input.details,
            location: input.location,
            price: None,
            created_at: now,
            modified_at: now,
        }
    }

    /// Merge an update onto this record: details, location, and condition
    /// are replaced, `modified_at` is refreshed, everything else is kept.
    pub fn merge(&mut self, input: CarInput) {
        self.condition = input.condition;
        self.details = input.details;
        self.location = input.location;
        self.modified_at = Utc::now();
    }
}
