use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::model::{BlogSummary, User};
use crate::domain::service::PopulatedUser;

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct CreateUserReq {
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    pub password: String,
}

/// Outward user representation. Deliberately has no field for the password
/// hash.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub blogs: Vec<BlogSummaryDto>,
}

#[derive(Debug, Serialize)]
pub struct BlogSummaryDto {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
}

impl From<BlogSummary> for BlogSummaryDto {
    fn from(summary: BlogSummary) -> Self {
        Self {
            id: summary.id,
            title: summary.title,
            author: summary.author,
            url: summary.url,
            likes: summary.likes,
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            blogs: Vec::new(),
        }
    }
}

impl From<PopulatedUser> for UserDto {
    fn from(populated: PopulatedUser) -> Self {
        let mut dto = UserDto::from(populated.user);
        dto.blogs = populated.blogs.into_iter().map(Into::into).collect();
        dto
    }
}
