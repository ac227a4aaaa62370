//! Blogs module: CRUD over user-owned blog records plus pure aggregate
//! statistics.
//!
//! Reads are public; every mutation goes through the ownership guard before
//! the store is touched.

pub mod api;
pub mod domain;
pub mod infra;

pub use domain::model::Blog;
pub use domain::repo::BlogRepository;
pub use domain::service::BlogsService;
pub use domain::stats;
pub use infra::storage::memory::InMemoryBlogRepository;
