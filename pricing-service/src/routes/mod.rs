pub mod price_routes;

pub use price_routes::create_router;
