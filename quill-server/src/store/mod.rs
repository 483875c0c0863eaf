//! Data access layer - connection pools, migrations and the blog store
//!
//! # Design Principles
//!
//! - One pooled handle shared by every request - no Arc<Mutex<Connection>>
//! - The post list is a single JOIN - no N+1 author lookups
//! - Rely on DB constraints for uniqueness - no check-then-insert
//! - "No rows" is `StoreError::NotFound`, never a generic failure

pub mod migrations;
pub mod pool;
pub mod sql;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::models::{NewPost, NewUser, Post, PostWithAuthor, User};

pub use pool::{create_pg_pool, create_sqlite_pool, DEFAULT_MAX_CONNECTIONS};
pub use sql::{PgStore, SqliteStore};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{resource} not found: {key}")]
    NotFound { resource: &'static str, key: String },

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("unsupported data source scheme '{0}' (expected postgres:// or sqlite:)")]
    InvalidDsn(String),

    #[error("database error: {0}")]
    Sqlx(sqlx::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Self::Conflict(db.message().to_owned())
            }
            _ => Self::Sqlx(e),
        }
    }
}

/// Backing database selected by the data source string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    /// Pick the backend from the DSN scheme.
    ///
    /// Only the scheme is echoed back on error so credentials never reach logs.
    pub fn from_dsn(dsn: &str) -> Result<Self, StoreError> {
        if dsn.starts_with("postgres://") || dsn.starts_with("postgresql://") {
            Ok(Self::Postgres)
        } else if dsn.starts_with("sqlite:") {
            Ok(Self::Sqlite)
        } else {
            let scheme = dsn.split(':').next().unwrap_or_default();
            Err(StoreError::InvalidDsn(scheme.to_owned()))
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Postgres => f.write_str("postgres"),
            Self::Sqlite => f.write_str("sqlite"),
        }
    }
}

/// Typed create/query operations over users and posts.
///
/// Implementations are cheap to share: the handle wraps a connection pool
/// and is used concurrently by every request.
#[async_trait]
pub trait BlogStore: Send + Sync {
    fn backend(&self) -> Backend;

    /// Create tables and indexes if they do not exist yet.
    async fn migrate(&self) -> Result<(), StoreError>;

    /// Round-trip a trivial query.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Whether at least one post exists.
    async fn post_exists(&self) -> Result<bool, StoreError>;

    /// Look a user up by unique name. Missing users are `NotFound`.
    async fn user_by_name(&self, name: &str) -> Result<User, StoreError>;

    /// The first user ever created (smallest id). Empty table is `NotFound`.
    async fn oldest_user(&self) -> Result<User, StoreError>;

    /// Insert a user. Duplicate email or name is `Conflict`.
    async fn create_user(&self, user: &NewUser) -> Result<User, StoreError>;

    /// Insert a post for an existing author.
    async fn create_post(&self, post: &NewPost) -> Result<Post, StoreError>;

    /// All posts with their authors, most recent first.
    async fn posts_with_author(&self) -> Result<Vec<PostWithAuthor>, StoreError>;

    async fn count_users(&self) -> Result<i64, StoreError>;

    async fn count_posts(&self) -> Result<i64, StoreError>;

    /// Close the underlying pool.
    async fn close(&self);
}

/// Shared data-access handle
pub type SharedStore = Arc<dyn BlogStore>;

/// Open a pooled store for the given data source string.
///
/// # Example
///
/// ```ignore
/// let store = connect("sqlite://blog.db", 5).await?;
/// store.migrate().await?;
/// ```
pub async fn connect(dsn: &str, max_connections: u32) -> Result<SharedStore, StoreError> {
    let backend = Backend::from_dsn(dsn)?;
    tracing::debug!(%backend, max_connections, "opening store");

    let store: SharedStore = match backend {
        Backend::Postgres => Arc::new(PgStore::new(create_pg_pool(dsn, max_connections).await?)),
        Backend::Sqlite => Arc::new(SqliteStore::new(
            create_sqlite_pool(dsn, max_connections).await?,
        )),
    };
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_from_scheme() {
        assert_eq!(
            Backend::from_dsn("postgres://u:p@localhost/blog").unwrap(),
            Backend::Postgres
        );
        assert_eq!(
            Backend::from_dsn("postgresql://localhost/blog").unwrap(),
            Backend::Postgres
        );
        assert_eq!(Backend::from_dsn("sqlite::memory:").unwrap(), Backend::Sqlite);
        assert_eq!(Backend::from_dsn("sqlite://blog.db").unwrap(), Backend::Sqlite);
    }

    #[test]
    fn unknown_scheme_hides_credentials() {
        let err = Backend::from_dsn("mysql://root:secret@db/blog").unwrap_err();
        assert!(matches!(&err, StoreError::InvalidDsn(s) if s == "mysql"));
        assert!(!err.to_string().contains("secret"));
    }

    #[test]
    fn not_found_is_tagged() {
        let err = StoreError::NotFound {
            resource: "user",
            key: "alice".into(),
        };
        assert!(err.is_not_found());
        assert!(!StoreError::Conflict("dup".into()).is_not_found());
        assert_eq!(err.to_string(), "user not found: alice");
    }

    #[tokio::test]
    async fn connect_rejects_unknown_scheme() {
        let err = connect("mysql://localhost/blog", 1).await.err().unwrap();
        assert!(matches!(err, StoreError::InvalidDsn(_)));
    }
}
