//! Users module: registration and listing of user accounts.
//!
//! Owns the credential store contract (`UserRepository`) and the rule that a
//! password hash, never a plaintext password, is what gets persisted.

pub mod api;
pub mod domain;
pub mod infra;

pub use domain::model::{BlogSummary, User};
pub use domain::repo::{BlogDirectory, UserRepository};
pub use domain::service::UsersService;
pub use infra::storage::memory::InMemoryUserRepository;
