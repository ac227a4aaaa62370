//! Access-control core for the bloglist service.
//!
//! Everything with real authorization invariants lives here: signed bearer
//! tokens, password hashing, per-request identity resolution and the
//! ownership guard for mutating operations. Route wiring and persistence
//! stay in the module crates; this crate holds no per-request mutable state
//! beyond the token secret, which is read-only after construction.

pub mod claims;
pub mod context;
pub mod errors;
pub mod extract;
pub mod guard;
pub mod password;
pub mod token;

pub use claims::Claims;
pub use context::AuthContext;
pub use errors::AuthError;
pub use extract::auth_context_middleware;
pub use guard::AuthorizationGuard;
pub use password::PasswordHasher;
pub use token::TokenService;
