//! User records
//!
//! Email and name are unique across all users. The uniqueness itself is
//! enforced by the database; only the non-empty email rule is checked here.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::ValidationError;

/// User record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    email: String,
    name: String,
    created_at: DateTime<Utc>,
}

impl NewUser {
    /// Build a new user stamped with the current time.
    ///
    /// # Example
    /// ```
    /// use quill_server::models::NewUser;
    ///
    /// assert!(NewUser::new("alice", "a@x.io").is_ok());
    /// assert!(NewUser::new("alice", "").is_err());
    /// ```
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        if email.is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }

        Ok(Self {
            email,
            name: name.into(),
            created_at: Utc::now(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_email_rejected() {
        let err = NewUser::new("alice", "").unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "email" });
    }

    #[test]
    fn empty_name_allowed() {
        // only email carries the non-empty rule
        let user = NewUser::new("", "a@x.io").unwrap();
        assert_eq!(user.name(), "");
        assert_eq!(user.email(), "a@x.io");
    }
}
