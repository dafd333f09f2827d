//! Request payloads for the car endpoints
//!
//! Validation happens here, at the request layer; the enrichment
//! orchestrator only ever sees well-formed input. Any address or price
//! supplied by the caller is dropped on conversion, those fields are
//! transient and recomputed on reads.

use serde::Deserialize;
use validator::Validate;

use crate::models::car::{CarInput, Condition, Details, Location, Manufacturer};

#[derive(Debug, Deserialize, Validate)]
pub struct CarRequest {
    pub condition: Condition,
    #[validate]
    pub details: DetailsRequest,
    #[validate]
    pub location: LocationRequest,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ManufacturerRequest {
    pub code: i32,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct DetailsRequest {
    #[validate]
    pub manufacturer: ManufacturerRequest,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 0))]
    pub mileage: i32,

    #[validate(length(min = 1, max = 50))]
    pub external_color: String,

    #[validate(length(min = 1, max = 50))]
    pub body: String,

    #[validate(length(min = 1, max = 100))]
    pub engine: String,

    #[validate(length(min = 1, max = 50))]
    pub fuel_type: String,

    #[validate(range(min = 1900, max = 2100))]
    pub model_year: i32,

    #[validate(range(min = 1900, max = 2100))]
    pub production_year: i32,

    #[validate(range(min = 0, max = 10))]
    pub number_of_doors: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LocationRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,
}

impl CarRequest {
    /// Convert the validated payload into domain input. Only coordinates
    /// survive from the location; transient fields start empty.
    pub fn into_input(self) -> CarInput {
        CarInput {
            condition: self.condition,
            details: Details {
                manufacturer: Manufacturer {
                    code: self.details.manufacturer.code,
                    name: self.details.manufacturer.name,
                },
                model: self.details.model,
                mileage: self.details.mileage,
                external_color: self.details.external_color,
                body: self.details.body,
                engine: self.details.engine,
                fuel_type: self.details.fuel_type,
                model_year: self.details.model_year,
                production_year: self.details.production_year,
                number_of_doors: self.details.number_of_doors,
            },
            location: Location::new(self.location.lat, self.location.lon),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_payload() -> serde_json::Value {
        json!({
            "condition": "USED",
            "details": {
                "manufacturer": { "code": 101, "name": "Chevrolet" },
                "model": "Impala",
                "mileage": 32280,
                "external_color": "white",
                "body": "sedan",
                "engine": "3.6L V6",
                "fuel_type": "Gasoline",
                "model_year": 2018,
                "production_year": 2018,
                "number_of_doors": 4
            },
            "location": { "lat": 40.730610, "lon": -73.935242 }
        })
    }

    #[test]
    fn valid_payload_passes_validation() {
        let request: CarRequest = serde_json::from_value(sample_payload()).unwrap();
        assert!(request.validate().is_ok());

        let input = request.into_input();
        assert_eq!(input.details.model, "Impala");
        assert!(input.location.address.is_none());
    }

    #[test]
    fn out_of_range_latitude_is_rejected() {
        let mut payload = sample_payload();
        payload["location"]["lat"] = json!(200.0);
        let request: CarRequest = serde_json::from_value(payload).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn negative_mileage_is_rejected() {
        let mut payload = sample_payload();
        payload["details"]["mileage"] = json!(-5);
        let request: CarRequest = serde_json::from_value(payload).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn unknown_condition_fails_deserialization() {
        let mut payload = sample_payload();
        payload["condition"] = json!("WRECKED");
        assert!(serde_json::from_value::<CarRequest>(payload).is_err());
    }
}
