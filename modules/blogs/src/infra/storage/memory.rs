use async_trait::async_trait;
use bloglist_users::{BlogDirectory, BlogSummary};
use parking_lot::RwLock;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::model::Blog;
use crate::domain::repo::BlogRepository;

/// In-memory resource store.
///
/// Backed by a Vec so that listings keep insertion order; the aggregate
/// statistics rely on that order for their tie-breaks.
#[derive(Default)]
pub struct InMemoryBlogRepository {
    blogs: RwLock<Vec<Blog>>,
}

impl InMemoryBlogRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn find_all(&self) -> Result<Vec<Blog>, DomainError> {
        Ok(self.blogs.read().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, DomainError> {
        Ok(self.blogs.read().iter().find(|b| b.id == id).cloned())
    }

    async fn save(&self, blog: Blog) -> Result<Blog, DomainError> {
        let mut blogs = self.blogs.write();

        match blogs.iter_mut().find(|b| b.id == blog.id) {
            Some(existing) => *existing = blog.clone(),
            None => blogs.push(blog.clone()),
        }
        Ok(blog)
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.blogs.write().retain(|b| b.id != id);
        Ok(())
    }
}

#[async_trait]
impl BlogDirectory for InMemoryBlogRepository {
    async fn summaries_for(&self, ids: &[Uuid]) -> Vec<BlogSummary> {
        let blogs = self.blogs.read();
        ids.iter()
            .filter_map(|id| blogs.iter().find(|b| b.id == *id))
            .map(|b| BlogSummary {
                id: b.id,
                title: b.title.clone(),
                author: b.author.clone(),
                url: b.url.clone(),
                likes: b.likes,
            })
            .collect()
    }
}
