use uuid::Uuid;

/// A blog record.
///
/// `user_id` is set once at creation from the authenticated caller and is
/// immutable afterwards; updates may touch every other field except `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
    pub user_id: Uuid,
}

/// Input for creating a blog. The owner is not part of the input; it is
/// always the authenticated caller.
#[derive(Debug, Clone)]
pub struct NewBlog {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: Option<u64>,
}

/// Partial update of a blog. Absent fields keep their stored values;
/// `id` and `user_id` cannot be changed.
#[derive(Debug, Clone, Default)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
}
