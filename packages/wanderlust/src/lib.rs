//! The wanderlust travel app: its route table and the views the routes render.

pub mod destinations;
pub mod routes;
pub mod views;

pub use routes::router;
