//! Vehicle storage
//!
//! The orchestrator talks to storage through the `CarStore` trait so it can
//! be constructed with substitutable fakes. `PostgresCarStore` backs the
//! service in production; `InMemoryCarStore` backs tests and development
//! without a database.

pub mod car_repository;
pub mod memory;

pub use car_repository::{CarStore, PostgresCarStore};
pub use memory::InMemoryCarStore;
