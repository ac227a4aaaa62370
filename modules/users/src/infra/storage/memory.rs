use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::model::User;
use crate::domain::repo::UserRepository;

/// In-memory credential store.
///
/// Username uniqueness is enforced under the write lock, so concurrent
/// registrations of the same name cannot both succeed.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read();
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let mut users: Vec<User> = self.users.read().values().cloned().collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }

    async fn insert(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write();

        if users.values().any(|u| u.username == user.username) {
            return Err(DomainError::username_taken(user.username));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn attach_blog(&self, user_id: Uuid, blog_id: Uuid) -> Result<(), DomainError> {
        let mut users = self.users.write();
        let user = users
            .get_mut(&user_id)
            .ok_or(DomainError::UserNotFound { id: user_id })?;

        if !user.blogs.contains(&blog_id) {
            user.blogs.push(blog_id);
        }
        Ok(())
    }

    async fn detach_blog(&self, user_id: Uuid, blog_id: Uuid) -> Result<(), DomainError> {
        let mut users = self.users.write();
        let user = users
            .get_mut(&user_id)
            .ok_or(DomainError::UserNotFound { id: user_id })?;

        user.blogs.retain(|id| *id != blog_id);
        Ok(())
    }
}
