pub mod app;
pub mod catalog;
pub mod config;
pub mod design;
pub mod error;
pub mod handlers;
pub mod models;
pub mod resources;
pub mod routes;

// Re-export key functions for convenience
pub use app::{create_app, init_tracing};
