pub mod error;
pub mod model;
pub mod repo;
pub mod service;
pub mod stats;
