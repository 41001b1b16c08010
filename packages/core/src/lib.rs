// ABOUTME: Core types and validation for Todoboard
// ABOUTME: Foundational package shared by the storage, API and CLI packages

pub mod types;
pub mod validation;

// Re-export main types
pub use types::{Comment, CommentCreateInput, Todo, TodoCreateInput, TodoFilter};

// Re-export validation
pub use validation::{
    validate_comment_create, validate_description_update, validate_todo_create, ValidationError,
};
