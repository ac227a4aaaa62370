use secrecy::{ExposeSecret, SecretString};

/// Per-request identity material, produced by the identity-resolver
/// middleware and consumed by the authorization guard.
///
/// Carries only the *raw* bearer token; whether it is valid is decided later,
/// at the point where a protected operation actually needs the identity.
/// Lifetime is one request. The token is wrapped in `SecretString` so `Debug`
/// redacts it.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    token: Option<SecretString>,
}

impl AuthContext {
    /// Context for a request that presented a bearer token.
    #[must_use]
    pub fn bearer(token: impl Into<SecretString>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Context for a request without a usable Authorization header. Absence
    /// is a valid, common outcome, not an error.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// The raw token, if one was presented.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_ref().map(ExposeSecret::expose_secret)
    }
}
