//! Author selection for new posts
//!
//! There is no login, so the author of a submitted post is picked by an
//! explicit policy instead of whatever row the database returns first.

use std::fmt;

use crate::models::User;
use crate::store::{BlogStore, StoreError};

/// Which user authors posts created through `POST /add`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthorPolicy {
    /// The first user ever created.
    #[default]
    Oldest,
    /// The user with this name.
    Named(String),
}

impl AuthorPolicy {
    /// `Named` when a name is given, `Oldest` otherwise.
    pub fn from_name(name: Option<String>) -> Self {
        name.map_or(Self::Oldest, Self::Named)
    }

    /// Resolve the author. No matching user is `StoreError::NotFound`.
    pub async fn select(&self, store: &dyn BlogStore) -> Result<User, StoreError> {
        match self {
            Self::Oldest => store.oldest_user().await,
            Self::Named(name) => store.user_by_name(name).await,
        }
    }
}

impl fmt::Display for AuthorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Oldest => f.write_str("oldest user"),
            Self::Named(name) => write!(f, "user '{}'", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewUser;
    use crate::store::SqliteStore;

    async fn two_users() -> (SqliteStore, User, User) {
        let store = SqliteStore::in_memory().await.unwrap();
        let alice = store
            .create_user(&NewUser::new("alice", "a@x.io").unwrap())
            .await
            .unwrap();
        let bob = store
            .create_user(&NewUser::new("bob", "b@x.io").unwrap())
            .await
            .unwrap();
        (store, alice, bob)
    }

    #[test]
    fn from_name() {
        assert_eq!(AuthorPolicy::from_name(None), AuthorPolicy::Oldest);
        assert_eq!(
            AuthorPolicy::from_name(Some("bob".into())),
            AuthorPolicy::Named("bob".into())
        );
    }

    #[tokio::test]
    async fn oldest_picks_first_created() {
        let (store, alice, _) = two_users().await;
        let author = AuthorPolicy::Oldest.select(&store).await.unwrap();
        assert_eq!(author, alice);
    }

    #[tokio::test]
    async fn named_picks_by_name() {
        let (store, _, bob) = two_users().await;
        let author = AuthorPolicy::Named("bob".into()).select(&store).await.unwrap();
        assert_eq!(author, bob);
    }

    #[tokio::test]
    async fn no_match_is_not_found() {
        let (store, _, _) = two_users().await;
        let err = AuthorPolicy::Named("carol".into())
            .select(&store)
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        let empty = SqliteStore::in_memory().await.unwrap();
        assert!(AuthorPolicy::Oldest.select(&empty).await.unwrap_err().is_not_found());
    }
}
