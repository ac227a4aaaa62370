use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::model::{Blog, BlogPatch, NewBlog};

/// Outward blog representation.
#[derive(Debug, Serialize)]
pub struct BlogDto {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
    pub user_id: Uuid,
}

/// Creation request body. The owner is never taken from the body.
#[derive(Debug, Deserialize)]
pub struct CreateBlogReq {
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    pub url: String,
    #[serde(default)]
    pub likes: Option<u64>,
}

/// Update request body. Every field is optional; absent fields keep their
/// stored values.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBlogReq {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub likes: Option<u64>,
}

impl From<Blog> for BlogDto {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id,
            title: blog.title,
            author: blog.author,
            url: blog.url,
            likes: blog.likes,
            user_id: blog.user_id,
        }
    }
}

impl From<CreateBlogReq> for NewBlog {
    fn from(req: CreateBlogReq) -> Self {
        Self {
            title: req.title,
            author: req.author,
            url: req.url,
            likes: req.likes,
        }
    }
}

impl From<UpdateBlogReq> for BlogPatch {
    fn from(req: UpdateBlogReq) -> Self {
        Self {
            title: req.title,
            author: req.author,
            url: req.url,
            likes: req.likes,
        }
    }
}
