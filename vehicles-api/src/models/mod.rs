//! Domain models
//!
//! These structs map to the `cars` table, minus the transient fields
//! (price, address) which are never persisted.

pub mod car;
