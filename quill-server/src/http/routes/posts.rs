//! Post endpoints - the server-rendered list and the create form target

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::PostFields;
use crate::models::NewPost;
use crate::state::AppState;

/// GET / - all posts with authors, newest first
async fn list_posts(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let posts = state.store().posts_with_author().await?;
    // render fully before responding; a failed render never leaks partial HTML
    let page = state.templates().render_index(&posts)?;
    Ok(Html(page))
}

/// POST /add - create a post for the policy-selected author
async fn add_post(
    State(state): State<AppState>,
    form: PostFields,
) -> Result<impl IntoResponse, ApiError> {
    let author = state.author_policy().select(state.store()).await?;
    let post = state
        .store()
        .create_post(&NewPost::new(form.title, form.body, &author))
        .await?;

    tracing::info!(post_id = post.id, author = %author.name, "post added");
    Ok((StatusCode::FOUND, [(header::LOCATION, "/")]))
}

/// Post routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts))
        .route("/add", post(add_post))
}
