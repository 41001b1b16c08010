// ABOUTME: Data layer and persistence for Todoboard
// ABOUTME: Storage trait, error type, configuration and the SQLite implementation

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use todoboard_core::{Comment, CommentCreateInput, Todo, TodoCreateInput, TodoFilter};

pub mod sqlite;

pub use sqlite::SqliteStorage;

/// Storage errors. Every variant means "database operation failed".
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Database(String),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Path used to request a private in-memory database
pub const IN_MEMORY_PATH: &str = ":memory:";

/// Storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub path: PathBuf,
    pub enable_wal: bool,
    pub max_connections: u32,
    pub busy_timeout_seconds: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("todo_app.db"),
            enable_wal: true,
            max_connections: 5,
            busy_timeout_seconds: 30,
        }
    }
}

impl StorageConfig {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// In-memory database; a single connection so every query sees the same data
    pub fn in_memory() -> Self {
        Self {
            path: PathBuf::from(IN_MEMORY_PATH),
            enable_wal: false, // WAL mode doesn't work with :memory:
            max_connections: 1,
            busy_timeout_seconds: 10,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.path.as_os_str() == IN_MEMORY_PATH
    }
}

/// Data access for todos and their comments.
///
/// Each method maps to one parameterized statement. Mutations report the
/// number of rows they touched; addressing a missing id is not an error.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Create the schema if it does not exist yet
    async fn initialize(&self) -> StorageResult<()>;

    async fn list_todos(&self, filter: TodoFilter) -> StorageResult<Vec<Todo>>;
    async fn create_todo(&self, input: TodoCreateInput) -> StorageResult<Todo>;
    async fn get_todo(&self, id: i64) -> StorageResult<Option<Todo>>;
    async fn toggle_todo(&self, id: i64) -> StorageResult<u64>;
    async fn update_description(&self, id: i64, description: &str) -> StorageResult<u64>;
    /// Comments of the todo are removed by the database cascade
    async fn delete_todo(&self, id: i64) -> StorageResult<u64>;

    async fn list_comments(&self, todo_id: i64) -> StorageResult<Vec<Comment>>;
    /// Fails when `todo_id` does not reference an existing todo
    async fn create_comment(&self, todo_id: i64, input: CommentCreateInput)
        -> StorageResult<Comment>;
    async fn delete_comment(&self, id: i64) -> StorageResult<u64>;
}
