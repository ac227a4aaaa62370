use uuid::Uuid;

/// A registered user account.
///
/// `password_hash` is internal state: it never crosses the REST boundary and
/// is never the plaintext password. `blogs` tracks the ids of the blogs this
/// user owns; the blogs module keeps it consistent on create/delete.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
    pub password_hash: String,
    pub blogs: Vec<Uuid>,
}

/// Resolved summary of an owned blog, used when listing users with their
/// blogs populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogSummary {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
}
