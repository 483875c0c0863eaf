//! Post records and the post-with-author projection used by the list page

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::User;

/// Post record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub author_id: i64,
}

/// Post joined with its author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author: User,
}

/// Insert payload for a post.
///
/// Title and body are stored exactly as given, empty strings included.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}

impl NewPost {
    pub fn new(title: impl Into<String>, body: impl Into<String>, author: &User) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            author_id: author.id,
            created_at: Utc::now(),
        }
    }
}

/// Flat row shape of the posts/users join.
#[derive(Debug, FromRow)]
pub(crate) struct PostAuthorRow {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub author_id: i64,
    pub author_email: String,
    pub author_name: String,
    pub author_created_at: DateTime<Utc>,
}

impl From<PostAuthorRow> for PostWithAuthor {
    fn from(r: PostAuthorRow) -> Self {
        Self {
            post: Post {
                id: r.id,
                title: r.title,
                body: r.body,
                created_at: r.created_at,
                author_id: r.author_id,
            },
            author: User {
                id: r.author_id,
                email: r.author_email,
                name: r.author_name,
                created_at: r.author_created_at,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User {
            id: 7,
            email: "a@x.io".into(),
            name: "alice".into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn new_post_takes_author_id() {
        let post = NewPost::new("", "", &alice());
        assert_eq!(post.author_id, 7);
        assert!(post.title.is_empty());
        assert!(post.body.is_empty());
    }

    #[test]
    fn row_splits_into_post_and_author() {
        let now = Utc::now();
        let row = PostAuthorRow {
            id: 1,
            title: "Hi".into(),
            body: "there".into(),
            created_at: now,
            author_id: 7,
            author_email: "a@x.io".into(),
            author_name: "alice".into(),
            author_created_at: now,
        };

        let pwa = PostWithAuthor::from(row);
        assert_eq!(pwa.post.author_id, pwa.author.id);
        assert_eq!(pwa.author.name, "alice");
        assert_eq!(pwa.post.title, "Hi");
    }
}
