//! HTML rendering for the post list
//!
//! The template set is parsed once at startup and shared read-only.

use serde::Serialize;
use tera::{Context, Tera};

use crate::models::PostWithAuthor;

/// Name of the post list template
pub const INDEX: &str = "index.html";

const INDEX_SOURCE: &str = include_str!("../templates/index.html");

/// Template error
#[derive(Debug, thiserror::Error)]
#[error("{}", error_chain(.0))]
pub struct TemplateError(#[from] tera::Error);

// tera keeps the useful detail (missing variable, bad filter) in the source chain
fn error_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Post as the list template sees it
#[derive(Serialize)]
struct PostView<'a> {
    id: i64,
    title: &'a str,
    body: &'a str,
    author: &'a str,
    created_at: String,
}

impl<'a> From<&'a PostWithAuthor> for PostView<'a> {
    fn from(p: &'a PostWithAuthor) -> Self {
        Self {
            id: p.post.id,
            title: &p.post.title,
            body: &p.post.body,
            author: &p.author.name,
            created_at: p.post.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        }
    }
}

/// Parsed template set
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Load the bundled templates.
    pub fn load() -> Result<Self, TemplateError> {
        Self::from_source(INDEX_SOURCE)
    }

    /// Build from a custom post list template.
    pub fn from_source(index: &str) -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.add_raw_template(INDEX, index)?;
        Ok(Self { tera })
    }

    /// Render the post list in the given order.
    pub fn render_index(&self, posts: &[PostWithAuthor]) -> Result<String, TemplateError> {
        let views: Vec<PostView<'_>> = posts.iter().map(PostView::from).collect();
        let mut context = Context::new();
        context.insert("posts", &views);
        Ok(self.tera.render(INDEX, &context)?)
    }
}
