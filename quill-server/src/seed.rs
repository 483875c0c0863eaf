//! Startup seeding
//!
//! Ensures the blog has at least one user and one post. Only acts when the
//! posts table is empty, so it runs on every startup.

use crate::models::{NewPost, NewUser, Post, User, ValidationError};
use crate::store::{BlogStore, StoreError};

/// Default user and first post written into an empty blog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub user_name: String,
    pub user_email: String,
    pub post_title: String,
    pub post_body: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            user_name: "quill".to_string(),
            user_email: "hello@quill.local".to_string(),
            post_title: "Hello world!".to_string(),
            post_body: "This is my first post".to_string(),
        }
    }
}

/// Seeding error, tagged by the step that failed
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed querying user '{name}': {source}")]
    QueryUser { name: String, source: StoreError },

    #[error("invalid default user: {0}")]
    InvalidUser(#[from] ValidationError),

    #[error("failed creating user '{name}': {source}")]
    CreateUser { name: String, source: StoreError },

    #[error("failed creating post: {0}")]
    CreatePost(StoreError),

    #[error("failed checking for posts: {0}")]
    CheckPosts(StoreError),
}

/// What `ensure_seeded` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Posts already existed; nothing was written.
    AlreadySeeded,
    Seeded {
        user: User,
        post: Post,
        /// False when an existing user with the default name was reused.
        created_user: bool,
    },
}

/// Seed only if no post exists yet.
pub async fn ensure_seeded(store: &dyn BlogStore, config: &SeedConfig) -> Result<SeedOutcome, SeedError> {
    if store.post_exists().await.map_err(SeedError::CheckPosts)? {
        tracing::debug!("posts present, skipping seed");
        return Ok(SeedOutcome::AlreadySeeded);
    }

    run(store, config).await
}

/// Ensure the default user exists, then write the first post for it.
///
/// A `NotFound` lookup selects the create path; any other lookup error
/// aborts.
pub async fn run(store: &dyn BlogStore, config: &SeedConfig) -> Result<SeedOutcome, SeedError> {
    let (user, created_user) = match store.user_by_name(&config.user_name).await {
        Ok(user) => (user, false),
        Err(e) if e.is_not_found() => {
            let new_user = NewUser::new(&config.user_name, &config.user_email)?;
            let user = store
                .create_user(&new_user)
                .await
                .map_err(|source| SeedError::CreateUser {
                    name: config.user_name.clone(),
                    source,
                })?;
            (user, true)
        }
        Err(source) => {
            return Err(SeedError::QueryUser {
                name: config.user_name.clone(),
                source,
            })
        }
    };

    let post = store
        .create_post(&NewPost::new(&config.post_title, &config.post_body, &user))
        .await
        .map_err(SeedError::CreatePost)?;

    tracing::info!(
        user = %user.name,
        created_user,
        post_id = post.id,
        "Seeded blog"
    );

    Ok(SeedOutcome::Seeded {
        user,
        post,
        created_user,
    })
}
