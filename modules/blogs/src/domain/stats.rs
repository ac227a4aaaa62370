//! Pure aggregate statistics over a list of blogs.
//!
//! All functions are total over well-formed input, never touch I/O, and
//! leave the input untouched. Tie-breaks are input-order stable: the first
//! entry (or first author) to reach the maximum wins, and later entries
//! replace it only when strictly greater. Aggregation is Vec-backed rather
//! than map-backed so the result never depends on hash iteration order.

use super::model::Blog;

/// Favorite blog: the entry with the strictly greatest likes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteBlog {
    pub title: String,
    pub author: Option<String>,
    pub likes: u64,
}

/// The author with the most blog entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MostBlogs {
    pub author: String,
    pub blogs: usize,
}

/// The author with the greatest summed likes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MostLikes {
    pub author: String,
    pub likes: u64,
}

/// Sum of likes across all blogs; 0 for an empty list.
#[must_use]
pub fn total_likes(blogs: &[Blog]) -> u64 {
    blogs.iter().map(|blog| blog.likes).sum()
}

/// The blog with the strictly greatest likes; `None` for an empty list.
#[must_use]
pub fn favorite_blog(blogs: &[Blog]) -> Option<FavoriteBlog> {
    blogs
        .iter()
        .fold(None::<&Blog>, |fav, blog| match fav {
            Some(current) if blog.likes <= current.likes => Some(current),
            _ => Some(blog),
        })
        .map(|blog| FavoriteBlog {
            title: blog.title.clone(),
            author: blog.author.clone(),
            likes: blog.likes,
        })
}

/// The author appearing most often; `None` for an empty list.
#[must_use]
pub fn most_blogs(blogs: &[Blog]) -> Option<MostBlogs> {
    let counts = aggregate_by_author(blogs, |_| 1u64);

    counts.into_iter().reduce(max_by_value).map(|(author, count)| MostBlogs {
        author,
        blogs: usize::try_from(count).unwrap_or(usize::MAX),
    })
}

/// The author with the greatest summed likes; `None` for an empty list.
#[must_use]
pub fn most_likes(blogs: &[Blog]) -> Option<MostLikes> {
    let totals = aggregate_by_author(blogs, |blog| blog.likes);

    totals
        .into_iter()
        .reduce(max_by_value)
        .map(|(author, likes)| MostLikes { author, likes })
}

/// Group blogs by author in first-seen order, summing `value` per entry.
/// Blogs without an author are grouped under the empty string.
fn aggregate_by_author(blogs: &[Blog], value: impl Fn(&Blog) -> u64) -> Vec<(String, u64)> {
    let mut groups: Vec<(String, u64)> = Vec::new();

    for blog in blogs {
        let author = blog.author.as_deref().unwrap_or("");
        match groups.iter_mut().find(|(name, _)| name == author) {
            Some((_, total)) => *total += value(blog),
            None => groups.push((author.to_owned(), value(blog))),
        }
    }

    groups
}

/// Keep the earlier entry unless the later one is strictly greater.
fn max_by_value(best: (String, u64), candidate: (String, u64)) -> (String, u64) {
    if candidate.1 > best.1 { candidate } else { best }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn blog(title: &str, author: &str, likes: u64) -> Blog {
        Blog {
            id: Uuid::new_v4(),
            title: title.to_owned(),
            author: Some(author.to_owned()),
            url: "http://example.com".to_owned(),
            likes,
            user_id: Uuid::nil(),
        }
    }

    /// The well-known six-blog fixture.
    fn blog_list() -> Vec<Blog> {
        vec![
            blog("React patterns", "Michael Chan", 7),
            blog("Go To Statement Considered Harmful", "Edsger W. Dijkstra", 5),
            blog("Canonical string reduction", "Edsger W. Dijkstra", 12),
            blog("First class tests", "Robert C. Martin", 10),
            blog("TDD harms architecture", "Robert C. Martin", 0),
            blog("Type wars", "Robert C. Martin", 2),
        ]
    }

    mod total_likes {
        use super::*;

        #[test]
        fn of_empty_list_is_zero() {
            assert_eq!(total_likes(&[]), 0);
        }

        #[test]
        fn of_one_blog_equals_its_likes() {
            let blogs = [blog("Go To", "Edsger W. Dijkstra", 5)];
            assert_eq!(total_likes(&blogs), 5);
        }

        #[test]
        fn of_multiple_blogs_is_summed() {
            let blogs = [
                blog("a", "x", 5),
                blog("b", "y", 8),
                blog("c", "z", 2),
            ];
            assert_eq!(total_likes(&blogs), 15);
        }
    }

    mod favorite_blog {
        use super::*;

        #[test]
        fn of_empty_list_is_none() {
            assert_eq!(favorite_blog(&[]), None);
        }

        #[test]
        fn of_one_blog_is_that_blog() {
            let blogs = [blog("A", "X", 5)];
            assert_eq!(
                favorite_blog(&blogs),
                Some(FavoriteBlog {
                    title: "A".to_owned(),
                    author: Some("X".to_owned()),
                    likes: 5,
                })
            );
        }

        #[test]
        fn picks_the_most_liked_blog() {
            let blogs = [
                blog("a", "x", 5),
                blog("b", "y", 8),
                blog("c", "z", 2),
            ];
            assert_eq!(favorite_blog(&blogs).unwrap().likes, 8);
        }

        #[test]
        fn first_seen_wins_on_ties() {
            let blogs = [blog("first", "x", 8), blog("second", "y", 8)];
            assert_eq!(favorite_blog(&blogs).unwrap().title, "first");
        }
    }

    mod most_blogs {
        use super::*;

        #[test]
        fn of_empty_list_is_none() {
            assert_eq!(most_blogs(&[]), None);
        }

        #[test]
        fn finds_the_most_frequent_author() {
            assert_eq!(
                most_blogs(&blog_list()),
                Some(MostBlogs {
                    author: "Robert C. Martin".to_owned(),
                    blogs: 3,
                })
            );
        }

        #[test]
        fn tie_goes_to_first_author_in_input_order() {
            let blogs = [
                blog("a", "x", 0),
                blog("b", "y", 0),
                blog("c", "x", 0),
                blog("d", "y", 0),
            ];
            assert_eq!(most_blogs(&blogs).unwrap().author, "x");
        }
    }

    mod most_likes {
        use super::*;

        #[test]
        fn of_empty_list_is_none() {
            assert_eq!(most_likes(&[]), None);
        }

        #[test]
        fn sums_likes_per_author() {
            assert_eq!(
                most_likes(&blog_list()),
                Some(MostLikes {
                    author: "Edsger W. Dijkstra".to_owned(),
                    likes: 17,
                })
            );
        }

        #[test]
        fn tie_goes_to_first_author_in_input_order() {
            let blogs = [blog("a", "x", 5), blog("b", "y", 5)];
            assert_eq!(most_likes(&blogs).unwrap().author, "x");
        }

        #[test]
        fn input_is_left_untouched() {
            let blogs = blog_list();
            let before = blogs.clone();
            let _ = most_likes(&blogs);
            let _ = most_blogs(&blogs);
            let _ = favorite_blog(&blogs);
            let _ = total_likes(&blogs);
            assert_eq!(blogs, before);
        }
    }
}
