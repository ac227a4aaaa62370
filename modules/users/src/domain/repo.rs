use async_trait::async_trait;
use uuid::Uuid;

use super::error::DomainError;
use super::model::{BlogSummary, User};

/// Credential store contract.
///
/// The rest of the system treats persistence as an external collaborator; it
/// only ever needs these operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Persist a new user. Fails with `UsernameTaken` if the username is
    /// already in use; uniqueness is enforced under the store's own lock.
    async fn insert(&self, user: User) -> Result<User, DomainError>;

    /// Record that the user now owns `blog_id`.
    async fn attach_blog(&self, user_id: Uuid, blog_id: Uuid) -> Result<(), DomainError>;

    /// Record that the user no longer owns `blog_id`.
    async fn detach_blog(&self, user_id: Uuid, blog_id: Uuid) -> Result<(), DomainError>;
}

/// Lookup of owned-blog summaries, used to populate user listings.
///
/// Implemented by the blogs module's store; declared here so the users
/// module does not depend on it.
#[async_trait]
pub trait BlogDirectory: Send + Sync {
    async fn summaries_for(&self, ids: &[Uuid]) -> Vec<BlogSummary>;
}
