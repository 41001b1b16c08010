// ABOUTME: Todo and comment type definitions
// ABOUTME: Records, create inputs and the completion-state filter

use serde::{Deserialize, Serialize};
use std::fmt;

/// A task record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub is_done: bool,
}

/// A free-text annotation owned by exactly one todo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub todo_id: i64,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoCreateInput {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentCreateInput {
    pub content: String,
}

/// Completion-state filter for the todo list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoFilter {
    #[default]
    All,
    Done,
    Undone,
}

impl TodoFilter {
    /// Parse the `filter` query value. Anything unrecognized means no filtering.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("done") => TodoFilter::Done,
            Some("undone") => TodoFilter::Undone,
            _ => TodoFilter::All,
        }
    }

    /// The `is_done` value rows must match, or `None` for every row
    pub fn is_done(self) -> Option<bool> {
        match self {
            TodoFilter::All => None,
            TodoFilter::Done => Some(true),
            TodoFilter::Undone => Some(false),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TodoFilter::All => "all",
            TodoFilter::Done => "done",
            TodoFilter::Undone => "undone",
        }
    }

    pub fn matches(self, todo: &Todo) -> bool {
        self.is_done().map_or(true, |done| todo.is_done == done)
    }
}

impl fmt::Display for TodoFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
