use std::sync::Arc;

use bloglist_auth::{AuthContext, AuthorizationGuard};
use bloglist_users::UserRepository;
use uuid::Uuid;

use super::error::DomainError;
use super::model::{Blog, BlogPatch, NewBlog};
use super::repo::BlogRepository;

/// Orchestrates blog operations.
///
/// Reads are public. For mutations the ordering invariant is strict:
/// authorization completes successfully before any store mutation is
/// attempted. After a mutation the owner's blog list is brought in line with
/// the resource store (add on create, remove on delete); the guard itself
/// never sees the user store.
pub struct BlogsService {
    repo: Arc<dyn BlogRepository>,
    users: Arc<dyn UserRepository>,
    guard: AuthorizationGuard,
}

impl BlogsService {
    #[must_use]
    pub fn new(
        repo: Arc<dyn BlogRepository>,
        users: Arc<dyn UserRepository>,
        guard: AuthorizationGuard,
    ) -> Self {
        Self { repo, users, guard }
    }

    /// List all blogs. Public.
    ///
    /// # Errors
    /// Propagates store failures.
    pub async fn list(&self) -> Result<Vec<Blog>, DomainError> {
        self.repo.find_all().await
    }

    /// Fetch one blog by id. Public.
    ///
    /// # Errors
    /// `BlogNotFound` if no record has this id.
    pub async fn get(&self, id: Uuid) -> Result<Blog, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::BlogNotFound { id })
    }

    /// Create a blog owned by the authenticated caller.
    ///
    /// # Errors
    /// `Denied` without a valid token, `Validation` for a missing title or
    /// url.
    pub async fn create(&self, ctx: &AuthContext, new_blog: NewBlog) -> Result<Blog, DomainError> {
        let owner = self.guard.authorize_creation(ctx)?;

        validate_required("title", &new_blog.title)?;
        validate_required("url", &new_blog.url)?;

        let blog = Blog {
            id: Uuid::new_v4(),
            title: new_blog.title,
            author: new_blog.author,
            url: new_blog.url,
            likes: new_blog.likes.unwrap_or(0),
            user_id: owner,
        };

        let saved = self.repo.save(blog).await?;
        self.users.attach_blog(owner, saved.id).await?;

        tracing::info!(blog_id = %saved.id, %owner, "blog created");
        Ok(saved)
    }

    /// Update a blog. Only the owner may do this; absent patch fields keep
    /// their stored values.
    ///
    /// # Errors
    /// `BlogNotFound`, `Denied`, or `Validation` when a patched required
    /// field becomes empty.
    pub async fn update(
        &self,
        ctx: &AuthContext,
        id: Uuid,
        patch: BlogPatch,
    ) -> Result<Blog, DomainError> {
        let mut blog = self.get(id).await?;
        self.guard.authorize_mutation(ctx, blog.user_id)?;

        if let Some(title) = patch.title {
            validate_required("title", &title)?;
            blog.title = title;
        }
        if let Some(url) = patch.url {
            validate_required("url", &url)?;
            blog.url = url;
        }
        if let Some(author) = patch.author {
            blog.author = Some(author);
        }
        if let Some(likes) = patch.likes {
            blog.likes = likes;
        }

        self.repo.save(blog).await
    }

    /// Delete a blog. Only the owner may do this.
    ///
    /// # Errors
    /// `BlogNotFound` or `Denied`.
    pub async fn delete(&self, ctx: &AuthContext, id: Uuid) -> Result<(), DomainError> {
        let blog = self.get(id).await?;
        let caller = self.guard.authorize_mutation(ctx, blog.user_id)?;

        self.repo.delete(id).await?;
        self.users.detach_blog(caller, id).await?;

        tracing::info!(blog_id = %id, owner = %caller, "blog deleted");
        Ok(())
    }
}

fn validate_required(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    Ok(())
}
