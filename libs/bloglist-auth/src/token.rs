use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use uuid::Uuid;

use crate::claims::Claims;
use crate::errors::AuthError;

/// Issues and verifies signed bearer tokens.
///
/// Stateless: the only configuration is the shared HS256 secret, injected at
/// construction and never mutated afterwards. No other component mints
/// tokens.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let secret = secret.expose_secret().as_bytes();

        // Tokens are expiry-less, so `exp` must be neither required nor
        // validated.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Issue a signed token for the given user.
    ///
    /// # Errors
    /// Returns `AuthError::Encoding` if signing fails.
    pub fn issue(&self, user_id: Uuid) -> Result<String, AuthError> {
        let claims = Claims {
            sub: user_id,
            iat: Utc::now().timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(AuthError::Encoding)
    }

    /// Verify a token and return the subject it was issued to.
    ///
    /// # Errors
    /// Returns `AuthError::InvalidToken` for a bad signature, structural
    /// garbage or an empty token. The sub-reason is never exposed.
    pub fn verify(&self, token: &str) -> Result<Uuid, AuthError> {
        if token.is_empty() {
            return Err(AuthError::InvalidToken);
        }

        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims.sub)
            .map_err(|err| {
                tracing::debug!(error = %err, "token verification failed");
                AuthError::InvalidToken
            })
    }
}
