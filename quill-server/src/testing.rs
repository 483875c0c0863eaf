//! Test doubles shared by unit tests

use async_trait::async_trait;

use crate::models::{NewPost, NewUser, Post, PostWithAuthor, User};
use crate::store::{Backend, BlogStore, SqliteStore, StoreError};

/// Store whose every query fails as if the pool were gone.
///
/// `post_exists` can be pinned to a fixed answer so seeding gets past its
/// first check.
pub(crate) struct BrokenStore {
    posts: Option<bool>,
}

impl BrokenStore {
    pub(crate) fn with_posts(posts: bool) -> Self {
        Self { posts: Some(posts) }
    }

    pub(crate) fn failing_everything() -> Self {
        Self { posts: None }
    }
}

fn broken() -> StoreError {
    StoreError::Sqlx(sqlx::Error::PoolClosed)
}

#[async_trait]
impl BlogStore for BrokenStore {
    fn backend(&self) -> Backend {
        Backend::Sqlite
    }

    async fn migrate(&self) -> Result<(), StoreError> {
        Err(broken())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(broken())
    }

    async fn post_exists(&self) -> Result<bool, StoreError> {
        self.posts.ok_or_else(broken)
    }

    async fn user_by_name(&self, _name: &str) -> Result<User, StoreError> {
        Err(broken())
    }

    async fn oldest_user(&self) -> Result<User, StoreError> {
        Err(broken())
    }

    async fn create_user(&self, _user: &NewUser) -> Result<User, StoreError> {
        Err(broken())
    }

    async fn create_post(&self, _post: &NewPost) -> Result<Post, StoreError> {
        Err(broken())
    }

    async fn posts_with_author(&self) -> Result<Vec<PostWithAuthor>, StoreError> {
        Err(broken())
    }

    async fn count_users(&self) -> Result<i64, StoreError> {
        Err(broken())
    }

    async fn count_posts(&self) -> Result<i64, StoreError> {
        Err(broken())
    }

    async fn close(&self) {}
}

/// In-memory store where everything works except inserting posts.
#[derive(Clone)]
pub(crate) struct RejectingPosts {
    inner: SqliteStore,
}

impl RejectingPosts {
    pub(crate) fn new(inner: SqliteStore) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl BlogStore for RejectingPosts {
    fn backend(&self) -> Backend {
        self.inner.backend()
    }

    async fn migrate(&self) -> Result<(), StoreError> {
        self.inner.migrate().await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.inner.ping().await
    }

    async fn post_exists(&self) -> Result<bool, StoreError> {
        self.inner.post_exists().await
    }

    async fn user_by_name(&self, name: &str) -> Result<User, StoreError> {
        self.inner.user_by_name(name).await
    }

    async fn oldest_user(&self) -> Result<User, StoreError> {
        self.inner.oldest_user().await
    }

    async fn create_user(&self, user: &NewUser) -> Result<User, StoreError> {
        self.inner.create_user(user).await
    }

    async fn create_post(&self, _post: &NewPost) -> Result<Post, StoreError> {
        Err(broken())
    }

    async fn posts_with_author(&self) -> Result<Vec<PostWithAuthor>, StoreError> {
        self.inner.posts_with_author().await
    }

    async fn count_users(&self) -> Result<i64, StoreError> {
        self.inner.count_users().await
    }

    async fn count_posts(&self) -> Result<i64, StoreError> {
        self.inner.count_posts().await
    }

    async fn close(&self) {
        self.inner.close().await
    }
}
