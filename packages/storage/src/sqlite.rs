// ABOUTME: SQLite implementation of the todo store
// ABOUTME: Connection setup, embedded migrations and one statement per operation

use async_trait::async_trait;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteRow},
    Row, SqlitePool,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use super::{StorageConfig, StorageError, StorageResult, TodoStore};
use todoboard_core::{Comment, CommentCreateInput, Todo, TodoCreateInput, TodoFilter};

const TODO_COLUMNS: &str = "id, title, description, is_done";
const COMMENT_COLUMNS: &str = "id, todo_id, content";

pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Open (creating if needed) the database described by `config`
    pub async fn new(config: StorageConfig) -> StorageResult<Self> {
        let base = if config.is_in_memory() {
            SqliteConnectOptions::from_str("sqlite::memory:")?
        } else {
            // Ensure parent directory exists
            if let Some(parent) = config.path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }

            let journal_mode = if config.enable_wal {
                SqliteJournalMode::Wal
            } else {
                SqliteJournalMode::Delete
            };

            SqliteConnectOptions::new()
                .filename(&config.path)
                .create_if_missing(true)
                .journal_mode(journal_mode)
        };

        // Cascading deletes depend on this being set for every connection
        let options = base
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(config.busy_timeout_seconds));

        debug!("Connecting to database: {}", config.path.display());

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections.max(1))
            .acquire_timeout(Duration::from_secs(config.busy_timeout_seconds));

        if config.is_in_memory() {
            // Dropping the only connection would drop the database with it
            pool_options = pool_options.idle_timeout(None).max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await?;

        info!("Database connection established");

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn row_to_todo(row: &SqliteRow) -> StorageResult<Todo> {
        Ok(Todo {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            is_done: row.try_get("is_done")?,
        })
    }

    fn row_to_comment(row: &SqliteRow) -> StorageResult<Comment> {
        Ok(Comment {
            id: row.try_get("id")?,
            todo_id: row.try_get("todo_id")?,
            content: row.try_get("content")?,
        })
    }
}

#[async_trait]
impl TodoStore for SqliteStorage {
    async fn initialize(&self) -> StorageResult<()> {
        info!("Initializing SQLite storage with migrations");

        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(StorageError::Migration)?;

        info!("Todos table ready");
        info!("Comments table ready");
        Ok(())
    }

    async fn list_todos(&self, filter: TodoFilter) -> StorageResult<Vec<Todo>> {
        debug!("Fetching todos (filter: {})", filter);

        let rows = match filter.is_done() {
            Some(done) => {
                let query =
                    format!("SELECT {TODO_COLUMNS} FROM todos WHERE is_done = ? ORDER BY id");
                sqlx::query(&query).bind(done).fetch_all(&self.pool).await?
            }
            None => {
                let query = format!("SELECT {TODO_COLUMNS} FROM todos ORDER BY id");
                sqlx::query(&query).fetch_all(&self.pool).await?
            }
        };

        rows.iter().map(Self::row_to_todo).collect()
    }

    async fn create_todo(&self, input: TodoCreateInput) -> StorageResult<Todo> {
        debug!("Creating todo: {}", input.title);

        let query = format!(
            "INSERT INTO todos (title, description) VALUES (?, ?) RETURNING {TODO_COLUMNS}"
        );
        let row = sqlx::query(&query)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(&self.pool)
            .await?;

        Self::row_to_todo(&row)
    }

    async fn get_todo(&self, id: i64) -> StorageResult<Option<Todo>> {
        debug!("Fetching todo: {}", id);

        let query = format!("SELECT {TODO_COLUMNS} FROM todos WHERE id = ?");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_todo).transpose()
    }

    async fn toggle_todo(&self, id: i64) -> StorageResult<u64> {
        debug!("Toggling todo: {}", id);

        let result = sqlx::query("UPDATE todos SET is_done = NOT is_done WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn update_description(&self, id: i64, description: &str) -> StorageResult<u64> {
        debug!("Updating description of todo: {}", id);

        let result = sqlx::query("UPDATE todos SET description = ? WHERE id = ?")
            .bind(description)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete_todo(&self, id: i64) -> StorageResult<u64> {
        debug!("Deleting todo: {}", id);

        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn list_comments(&self, todo_id: i64) -> StorageResult<Vec<Comment>> {
        debug!("Fetching comments for todo: {}", todo_id);

        let query = format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE todo_id = ? ORDER BY id");
        let rows = sqlx::query(&query)
            .bind(todo_id)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_comment).collect()
    }

    async fn create_comment(
        &self,
        todo_id: i64,
        input: CommentCreateInput,
    ) -> StorageResult<Comment> {
        debug!("Adding comment to todo: {}", todo_id);

        let query = format!(
            "INSERT INTO comments (todo_id, content) VALUES (?, ?) RETURNING {COMMENT_COLUMNS}"
        );
        let row = sqlx::query(&query)
            .bind(todo_id)
            .bind(&input.content)
            .fetch_one(&self.pool)
            .await?;

        Self::row_to_comment(&row)
    }

    async fn delete_comment(&self, id: i64) -> StorageResult<u64> {
        debug!("Deleting comment: {}", id);

        let result = sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
