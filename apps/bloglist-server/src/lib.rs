//! Bloglist server: assembles the module crates into one axum service.

pub mod app;
pub mod config;

pub use app::build_router;
pub use config::AppConfig;
