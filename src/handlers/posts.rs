use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::db::{NewPost, Post};
use crate::{ScribeError, router::ScribeState};

/// GET / -> static greeting payload.
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello there!" }))
}

/// GET /posts -> every post, in the store's natural order.
pub async fn list_posts(State(state): State<ScribeState>) -> Result<Json<Vec<Post>>, ScribeError> {
    let posts = state.storage.list_all().await?;
    Ok(Json(posts))
}

/// GET /posts/{id}
pub async fn get_post(
    State(state): State<ScribeState>,
    Path(id): Path<i64>,
) -> Result<Json<Post>, ScribeError> {
    let post = state
        .storage
        .get_by_id(id)
        .await?
        .ok_or(ScribeError::PostNotFound(id))?;
    Ok(Json(post))
}

/// DELETE /posts/{id} -> responds with the row that was removed.
pub async fn delete_post(
    State(state): State<ScribeState>,
    Path(id): Path<i64>,
) -> Result<Json<Post>, ScribeError> {
    let post = state
        .storage
        .delete_by_id(id)
        .await?
        .ok_or(ScribeError::PostNotFound(id))?;
    info!(id, "post deleted");
    Ok(Json(post))
}

/// Create request body. `title` stays an `Option` so the handler can answer
/// the missing-title case itself instead of leaving it to the deserializer's
/// rejection.
#[derive(Debug, Deserialize)]
pub struct CreatePost {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// POST /posts -> stores a post and responds with it, id assigned.
pub async fn create_post(
    State(state): State<ScribeState>,
    Json(body): Json<CreatePost>,
) -> Result<Json<Post>, ScribeError> {
    // Only presence is validated; whitespace-only titles pass.
    let title = body
        .title
        .filter(|t| !t.is_empty())
        .ok_or(ScribeError::TitleRequired)?;

    let post = state
        .storage
        .insert(NewPost {
            title,
            content: body.content,
        })
        .await?;
    info!(id = post.id, "post created");
    Ok(Json(post))
}
