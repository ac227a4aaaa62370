use std::sync::Arc;

use uuid::Uuid;

use crate::context::AuthContext;
use crate::errors::AuthError;
use crate::token::TokenService;

/// Ownership-based authorization for mutating operations.
///
/// Reads are public by design; only create/update/delete go through the
/// guard. Authorization must complete before any store mutation is attempted
/// (check-then-act), and the guard itself never touches the stores.
#[derive(Clone)]
pub struct AuthorizationGuard {
    tokens: Arc<TokenService>,
}

impl AuthorizationGuard {
    #[must_use]
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }

    /// Authorize a mutation of a resource owned by `owner_id`.
    ///
    /// An absent token and a token that fails verification are deliberately
    /// indistinguishable to the caller; only an ownership mismatch is
    /// recorded separately, and even that collapses to the same generic 401
    /// at the HTTP boundary.
    ///
    /// # Errors
    /// `AuthError::InvalidToken` if no usable token was presented,
    /// `AuthError::Unauthorized` if the verified caller is not the owner.
    pub fn authorize_mutation(
        &self,
        ctx: &AuthContext,
        owner_id: Uuid,
    ) -> Result<Uuid, AuthError> {
        let caller = self.resolve_caller(ctx)?;

        if caller == owner_id {
            Ok(caller)
        } else {
            tracing::debug!(%caller, %owner_id, "ownership check failed");
            Err(AuthError::Unauthorized)
        }
    }

    /// Authorize creation of a new resource.
    ///
    /// Any valid token qualifies; the created resource's owner becomes the
    /// caller.
    ///
    /// # Errors
    /// `AuthError::InvalidToken` if no valid token was presented.
    pub fn authorize_creation(&self, ctx: &AuthContext) -> Result<Uuid, AuthError> {
        self.resolve_caller(ctx)
    }

    fn resolve_caller(&self, ctx: &AuthContext) -> Result<Uuid, AuthError> {
        let token = ctx.token().ok_or(AuthError::InvalidToken)?;
        self.tokens.verify(token)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn guard() -> (AuthorizationGuard, Arc<TokenService>) {
        let tokens = Arc::new(TokenService::new(&SecretString::from("guard-secret")));
        (AuthorizationGuard::new(tokens.clone()), tokens)
    }

    #[test]
    fn owner_token_is_allowed() {
        let (guard, tokens) = guard();
        let owner = Uuid::new_v4();
        let ctx = AuthContext::bearer(tokens.issue(owner).unwrap());

        assert_eq!(guard.authorize_mutation(&ctx, owner).unwrap(), owner);
    }

    #[test]
    fn other_users_token_is_denied() {
        let (guard, tokens) = guard();
        let owner = Uuid::new_v4();
        let other = Uuid::new_v4();
        let ctx = AuthContext::bearer(tokens.issue(other).unwrap());

        assert!(matches!(
            guard.authorize_mutation(&ctx, owner),
            Err(AuthError::Unauthorized)
        ));
    }

    #[test]
    fn absent_token_is_denied() {
        let (guard, _) = guard();

        assert!(matches!(
            guard.authorize_mutation(&AuthContext::anonymous(), Uuid::new_v4()),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn garbage_token_is_denied() {
        let (guard, _) = guard();
        let ctx = AuthContext::bearer("garbage".to_owned());

        assert!(matches!(
            guard.authorize_mutation(&ctx, Uuid::new_v4()),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn creation_accepts_any_valid_token() {
        let (guard, tokens) = guard();
        let caller = Uuid::new_v4();
        let ctx = AuthContext::bearer(tokens.issue(caller).unwrap());

        assert_eq!(guard.authorize_creation(&ctx).unwrap(), caller);
        assert!(matches!(
            guard.authorize_creation(&AuthContext::anonymous()),
            Err(AuthError::InvalidToken)
        ));
    }
}
