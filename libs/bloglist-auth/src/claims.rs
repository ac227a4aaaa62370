use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token payload: the authenticated subject plus issue time.
///
/// Tokens carry no expiry. That is a deliberate, documented property of the
/// service, not an oversight; anything that needs expiring tokens is a
/// separate extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user this token was issued to.
    pub sub: Uuid,
    /// Unix timestamp of issuance.
    pub iat: i64,
}
