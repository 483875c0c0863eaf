//! Domain models for users and posts
//!
//! Insert payloads (`NewUser`, `NewPost`) are validated at construction;
//! stored records (`User`, `Post`) come back from the store as-is.

pub mod post;
pub mod user;
pub mod validation;

pub use post::{NewPost, Post, PostWithAuthor};
pub use user::{NewUser, User};
pub use validation::ValidationError;
