//! Shared HTTP surface types for bloglist modules.

pub mod extract;
pub mod problem;

pub use extract::ApiJson;
pub use problem::Problem;

/// Result type handlers return; errors are already `Problem` responses.
pub type ApiResult<T> = Result<T, Problem>;
