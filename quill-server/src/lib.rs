//! quill-server: a small server-rendered blog
//!
//! Users write posts; `GET /` lists them newest first and `POST /add`
//! creates one. Storage is PostgreSQL or SQLite through sqlx.

pub mod author;
pub mod http;
pub mod models;
pub mod seed;
pub mod state;
pub mod store;
pub mod templates;

#[cfg(test)]
mod testing;

pub use author::AuthorPolicy;
pub use http::{build_router, run_server, ServerConfig};
pub use seed::{SeedConfig, SeedOutcome};
pub use state::AppState;
pub use store::{BlogStore, SharedStore, StoreError};
pub use templates::Templates;
