//! Vehicles catalog microservice
//!
//! CRUD over vehicle records, enriched at read time with transient price
//! and address data fetched from the pricing and maps collaborators.

pub mod clients;
pub mod config;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
