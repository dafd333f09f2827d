//! Pricing microservice
//!
//! Exposes the price of a vehicle by its identifier. Prices are reference
//! data held in memory; nothing here is durable.

pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
