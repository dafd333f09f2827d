//! Clients for the remote collaborators
//!
//! Stateless, injected into the orchestrator at construction so tests can
//! substitute fakes.

pub mod maps_client;
pub mod price_client;

pub use maps_client::{AddressLookup, HttpMapsClient};
pub use price_client::{HttpPriceClient, PriceLookup};
