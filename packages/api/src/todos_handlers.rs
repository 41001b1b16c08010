// ABOUTME: HTTP request handlers for todo operations
// ABOUTME: List and detail pages, creation via form, and JSON mutation endpoints

use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
};
use serde::Deserialize;
use tracing::info;

use todoboard_core::{validate_description_update, validate_todo_create, TodoFilter};

use crate::error::{PageError, PageResult};
use crate::extract::{BodyRejection, FormOrJson};
use crate::response::{acknowledge, JsonResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListTodosQuery {
    pub filter: Option<String>,
}

/// List todos, optionally filtered by completion state
pub async fn list_todos(
    State(state): State<AppState>,
    Query(params): Query<ListTodosQuery>,
) -> PageResult<Html<String>> {
    let filter = TodoFilter::from_query(params.filter.as_deref());
    info!("Listing todos (filter: {})", filter);

    let todos = state.store.list_todos(filter).await?;
    let page = state.views.render_index(&todos, filter)?;

    Ok(Html(page))
}

/// Request body for creating a todo
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Create a todo and return to the list
pub async fn create_todo(
    State(state): State<AppState>,
    body: Result<FormOrJson<CreateTodoRequest>, BodyRejection>,
) -> PageResult<Redirect> {
    let FormOrJson(request) = body?;
    let input = validate_todo_create(request.title, request.description)?;
    info!("Creating todo: {}", input.title);

    state.store.create_todo(input).await?;

    Ok(Redirect::to("/"))
}

/// Show one todo with its comments
pub async fn get_todo(
    State(state): State<AppState>,
    Path(todo_id): Path<i64>,
) -> PageResult<Html<String>> {
    info!("Getting todo: {}", todo_id);

    let todo = state
        .store
        .get_todo(todo_id)
        .await?
        .ok_or(PageError::NotFound(todo_id))?;
    let comments = state.store.list_comments(todo_id).await?;
    let page = state.views.render_todo(&todo, &comments)?;

    Ok(Html(page))
}

/// Delete a todo; its comments go with it
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(todo_id): Path<i64>,
) -> JsonResult {
    info!("Deleting todo: {}", todo_id);

    state.store.delete_todo(todo_id).await?;
    acknowledge()
}

/// Flip the done flag
pub async fn toggle_todo(
    State(state): State<AppState>,
    Path(todo_id): Path<i64>,
) -> JsonResult {
    info!("Toggling todo: {}", todo_id);

    state.store.toggle_todo(todo_id).await?;
    acknowledge()
}

/// Request body for replacing a description
#[derive(Debug, Deserialize)]
pub struct UpdateDescriptionRequest {
    pub description: Option<String>,
}

/// Overwrite the description; an empty string clears it
pub async fn update_description(
    State(state): State<AppState>,
    Path(todo_id): Path<i64>,
    body: Result<FormOrJson<UpdateDescriptionRequest>, BodyRejection>,
) -> JsonResult {
    let FormOrJson(request) = body?;
    let description = validate_description_update(request.description)?;
    info!("Updating description of todo: {}", todo_id);

    state
        .store
        .update_description(todo_id, &description)
        .await?;
    acknowledge()
}
