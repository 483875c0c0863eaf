//! Application state shared across handlers

use std::sync::Arc;
use std::time::Instant;

use crate::author::AuthorPolicy;
use crate::store::{BlogStore, SharedStore};
use crate::templates::Templates;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: SharedStore,
    templates: Templates,
    author_policy: AuthorPolicy,
    started_at: Instant,
}

impl AppState {
    pub fn new(store: SharedStore, templates: Templates, author_policy: AuthorPolicy) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store,
                templates,
                author_policy,
                started_at: Instant::now(),
            }),
        }
    }

    pub fn store(&self) -> &dyn BlogStore {
        self.inner.store.as_ref()
    }

    pub fn templates(&self) -> &Templates {
        &self.inner.templates
    }

    pub fn author_policy(&self) -> &AuthorPolicy {
        &self.inner.author_policy
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.inner.started_at.elapsed().as_secs()
    }
}
