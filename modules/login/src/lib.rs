//! Login module: verifies username/password pairs and issues bearer tokens.
//!
//! The failure mode is deliberately flat: unknown username and wrong
//! password produce the same error, so a caller cannot probe which usernames
//! exist.

pub mod api;
pub mod domain;

pub use domain::service::{Credentials, LoginService, Session};
