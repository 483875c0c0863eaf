//! SQL-backed blog stores
//!
//! PostgreSQL and SQLite share the same queries (both accept `$N`
//! placeholders and `RETURNING`); only the pool type and schema differ, so
//! the store impl is stamped out once per backend.

use async_trait::async_trait;
use sqlx::{PgPool, SqlitePool};

use super::{migrations, Backend, BlogStore, StoreError};
use crate::models::post::PostAuthorRow;
use crate::models::{NewPost, NewUser, Post, PostWithAuthor, User};

const USER_BY_NAME: &str = "SELECT id, email, name, created_at FROM users WHERE name = $1";

const OLDEST_USER: &str = "SELECT id, email, name, created_at FROM users ORDER BY id ASC LIMIT 1";

const INSERT_USER: &str = r#"
    INSERT INTO users (email, name, created_at) VALUES ($1, $2, $3)
    RETURNING id, email, name, created_at
"#;

const INSERT_POST: &str = r#"
    INSERT INTO posts (title, body, created_at, author_id) VALUES ($1, $2, $3, $4)
    RETURNING id, title, body, created_at, author_id
"#;

// id breaks ties between posts stamped within the same clock tick
const POSTS_WITH_AUTHOR: &str = r#"
    SELECT
        p.id,
        p.title,
        p.body,
        p.created_at,
        p.author_id,
        u.email AS author_email,
        u.name AS author_name,
        u.created_at AS author_created_at
    FROM posts p
    JOIN users u ON u.id = p.author_id
    ORDER BY p.created_at DESC, p.id DESC
"#;

const ANY_POST: &str = "SELECT id FROM posts LIMIT 1";

macro_rules! sql_store {
    ($(#[$meta:meta])* $name:ident, $pool:ty, $backend:expr, $schema:expr) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            pool: $pool,
        }

        impl $name {
            pub fn new(pool: $pool) -> Self {
                Self { pool }
            }
        }

        #[async_trait]
        impl BlogStore for $name {
            fn backend(&self) -> Backend {
                $backend
            }

            async fn migrate(&self) -> Result<(), StoreError> {
                let backend = $backend;
                tracing::info!(%backend, "Running migrations...");
                for &statement in $schema {
                    sqlx::query(statement).execute(&self.pool).await?;
                }
                tracing::info!("Migrations complete");
                Ok(())
            }

            async fn ping(&self) -> Result<(), StoreError> {
                sqlx::query("SELECT 1").execute(&self.pool).await?;
                Ok(())
            }

            async fn post_exists(&self) -> Result<bool, StoreError> {
                let row: Option<i64> = sqlx::query_scalar(ANY_POST)
                    .fetch_optional(&self.pool)
                    .await?;
                Ok(row.is_some())
            }

            async fn user_by_name(&self, name: &str) -> Result<User, StoreError> {
                sqlx::query_as::<_, User>(USER_BY_NAME)
                    .bind(name)
                    .fetch_optional(&self.pool)
                    .await?
                    .ok_or_else(|| StoreError::NotFound {
                        resource: "user",
                        key: name.to_owned(),
                    })
            }

            async fn oldest_user(&self) -> Result<User, StoreError> {
                sqlx::query_as::<_, User>(OLDEST_USER)
                    .fetch_optional(&self.pool)
                    .await?
                    .ok_or_else(|| StoreError::NotFound {
                        resource: "user",
                        key: "any".to_owned(),
                    })
            }

            async fn create_user(&self, user: &NewUser) -> Result<User, StoreError> {
                let created = sqlx::query_as::<_, User>(INSERT_USER)
                    .bind(user.email())
                    .bind(user.name())
                    .bind(user.created_at())
                    .fetch_one(&self.pool)
                    .await?;
                tracing::debug!(user_id = created.id, name = %created.name, "user created");
                Ok(created)
            }

            async fn create_post(&self, post: &NewPost) -> Result<Post, StoreError> {
                let created = sqlx::query_as::<_, Post>(INSERT_POST)
                    .bind(&post.title)
                    .bind(&post.body)
                    .bind(post.created_at)
                    .bind(post.author_id)
                    .fetch_one(&self.pool)
                    .await?;
                tracing::debug!(post_id = created.id, author_id = created.author_id, "post created");
                Ok(created)
            }

            async fn posts_with_author(&self) -> Result<Vec<PostWithAuthor>, StoreError> {
                let rows = sqlx::query_as::<_, PostAuthorRow>(POSTS_WITH_AUTHOR)
                    .fetch_all(&self.pool)
                    .await?;
                Ok(rows.into_iter().map(PostWithAuthor::from).collect())
            }

            async fn count_users(&self) -> Result<i64, StoreError> {
                Ok(sqlx::query_scalar("SELECT COUNT(*) FROM users")
                    .fetch_one(&self.pool)
                    .await?)
            }

            async fn count_posts(&self) -> Result<i64, StoreError> {
                Ok(sqlx::query_scalar("SELECT COUNT(*) FROM posts")
                    .fetch_one(&self.pool)
                    .await?)
            }

            async fn close(&self) {
                self.pool.close().await;
            }
        }
    };
}

sql_store!(
    /// Blog store on a PostgreSQL pool
    PgStore,
    PgPool,
    Backend::Postgres,
    migrations::POSTGRES
);

sql_store!(
    /// Blog store on a SQLite pool
    SqliteStore,
    SqlitePool,
    Backend::Sqlite,
    migrations::SQLITE
);

impl SqliteStore {
    /// Fresh, migrated in-memory store.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let pool = super::create_sqlite_pool("sqlite::memory:", 1).await?;
        let store = Self::new(pool);
        store.migrate().await?;
        Ok(store)
    }
}
