// ABOUTME: HTTP request handlers for comment operations
// ABOUTME: Adding a comment from the detail page form and deleting one via JSON

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use serde::Deserialize;
use tracing::info;

use todoboard_core::validate_comment_create;

use crate::error::PageResult;
use crate::extract::{BodyRejection, FormOrJson};
use crate::response::{acknowledge, JsonResult};
use crate::state::AppState;

/// Request body for adding a comment
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub content: Option<String>,
}

/// Attach a comment to a todo and return to its detail page
pub async fn create_comment(
    State(state): State<AppState>,
    Path(todo_id): Path<i64>,
    body: Result<FormOrJson<CreateCommentRequest>, BodyRejection>,
) -> PageResult<Redirect> {
    let FormOrJson(request) = body?;
    let input = validate_comment_create(request.content)?;
    info!("Adding comment to todo: {}", todo_id);

    state.store.create_comment(todo_id, input).await?;

    Ok(Redirect::to(&format!("/todos/{}", todo_id)))
}

/// Delete a single comment
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<i64>,
) -> JsonResult {
    info!("Deleting comment: {}", comment_id);

    state.store.delete_comment(comment_id).await?;
    acknowledge()
}
