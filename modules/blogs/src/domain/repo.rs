use async_trait::async_trait;
use uuid::Uuid;

use super::error::DomainError;
use super::model::Blog;

/// Resource store contract for blog records.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Blog>, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, DomainError>;

    /// Insert or replace the record with `blog.id`.
    async fn save(&self, blog: Blog) -> Result<Blog, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<(), DomainError>;
}
