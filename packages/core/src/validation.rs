// ABOUTME: Required-field validation for incoming todo and comment data
// ABOUTME: Runs before any storage call so bad input never reaches the database

use thiserror::Error;

use crate::types::{CommentCreateInput, TodoCreateInput};

/// A required field was missing or blank
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, ValidationError> {
    match value.as_deref().map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed.to_string()),
        _ => Err(ValidationError::new(field, format!("{} is required", field))),
    }
}

/// Validates a new todo. The title is trimmed; a blank description becomes `None`.
pub fn validate_todo_create(
    title: Option<String>,
    description: Option<String>,
) -> Result<TodoCreateInput, ValidationError> {
    let title = required("title", title)?;
    let description = description.filter(|d| !d.trim().is_empty());

    Ok(TodoCreateInput { title, description })
}

/// Validates a new comment body
pub fn validate_comment_create(
    content: Option<String>,
) -> Result<CommentCreateInput, ValidationError> {
    let content = required("content", content)?;
    Ok(CommentCreateInput { content })
}

/// The description must be present, but an empty string is a valid overwrite
pub fn validate_description_update(description: Option<String>) -> Result<String, ValidationError> {
    description.ok_or_else(|| ValidationError::new("description", "description is required"))
}
