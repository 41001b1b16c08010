// ABOUTME: Integration tests for todo and comment storage operations
// ABOUTME: Tests CRUD, filtering, toggling and cascading deletes against SQLite

use pretty_assertions::assert_eq;
use todoboard_core::{CommentCreateInput, TodoCreateInput, TodoFilter};
use todoboard_storage::{SqliteStorage, StorageConfig, StorageError, TodoStore};

/// Helper to create an initialized in-memory database for testing
async fn create_test_storage() -> SqliteStorage {
    let storage = SqliteStorage::new(StorageConfig::in_memory()).await.unwrap();
    storage.initialize().await.unwrap();
    storage
}

fn new_todo(title: &str) -> TodoCreateInput {
    TodoCreateInput {
        title: title.to_string(),
        description: None,
    }
}

fn new_comment(content: &str) -> CommentCreateInput {
    CommentCreateInput {
        content: content.to_string(),
    }
}

async fn comment_rows_for(storage: &SqliteStorage, todo_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE todo_id = ?")
        .bind(todo_id)
        .fetch_one(storage.pool())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_create_todo_defaults_to_undone() {
    let storage = create_test_storage().await;

    let todo = storage.create_todo(new_todo("Buy milk")).await.unwrap();

    assert_eq!(todo.title, "Buy milk");
    assert_eq!(todo.description, None);
    assert!(!todo.is_done);

    let todos = storage.list_todos(TodoFilter::All).await.unwrap();
    assert_eq!(todos, vec![todo]);
}

#[tokio::test]
async fn test_create_todo_with_description() {
    let storage = create_test_storage().await;

    let input = TodoCreateInput {
        title: "Write report".to_string(),
        description: Some("Quarterly numbers".to_string()),
    };
    let created = storage.create_todo(input).await.unwrap();
    let fetched = storage.get_todo(created.id).await.unwrap().unwrap();

    assert_eq!(fetched.description.as_deref(), Some("Quarterly numbers"));
}

#[tokio::test]
async fn test_ids_are_unique_and_ordered() {
    let storage = create_test_storage().await;

    let first = storage.create_todo(new_todo("one")).await.unwrap();
    let second = storage.create_todo(new_todo("two")).await.unwrap();
    assert!(second.id > first.id);

    let titles: Vec<String> = storage
        .list_todos(TodoFilter::All)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(titles, vec!["one", "two"]);
}

#[tokio::test]
async fn test_get_missing_todo_returns_none() {
    let storage = create_test_storage().await;
    assert!(storage.get_todo(42).await.unwrap().is_none());
}

#[tokio::test]
async fn test_filter_returns_matching_subset() {
    let storage = create_test_storage().await;

    let done = storage.create_todo(new_todo("done")).await.unwrap();
    let undone = storage.create_todo(new_todo("undone")).await.unwrap();
    storage.toggle_todo(done.id).await.unwrap();

    let done_list = storage.list_todos(TodoFilter::Done).await.unwrap();
    assert_eq!(done_list.len(), 1);
    assert_eq!(done_list[0].id, done.id);
    assert!(done_list[0].is_done);

    let undone_list = storage.list_todos(TodoFilter::Undone).await.unwrap();
    assert_eq!(undone_list.len(), 1);
    assert_eq!(undone_list[0].id, undone.id);

    let all = storage.list_todos(TodoFilter::All).await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|t| TodoFilter::All.matches(t)));
}

#[tokio::test]
async fn test_toggle_twice_restores_state() {
    let storage = create_test_storage().await;
    let todo = storage.create_todo(new_todo("flip")).await.unwrap();

    assert_eq!(storage.toggle_todo(todo.id).await.unwrap(), 1);
    assert!(storage.get_todo(todo.id).await.unwrap().unwrap().is_done);

    storage.toggle_todo(todo.id).await.unwrap();
    assert!(!storage.get_todo(todo.id).await.unwrap().unwrap().is_done);
}

#[tokio::test]
async fn test_mutations_on_missing_id_touch_nothing() {
    let storage = create_test_storage().await;

    assert_eq!(storage.toggle_todo(99).await.unwrap(), 0);
    assert_eq!(storage.update_description(99, "x").await.unwrap(), 0);
    assert_eq!(storage.delete_todo(99).await.unwrap(), 0);
    assert_eq!(storage.delete_comment(99).await.unwrap(), 0);
}

#[tokio::test]
async fn test_update_description_with_empty_string() {
    let storage = create_test_storage().await;
    let input = TodoCreateInput {
        title: "Plan trip".to_string(),
        description: Some("Book flights".to_string()),
    };
    let todo = storage.create_todo(input).await.unwrap();

    assert_eq!(storage.update_description(todo.id, "").await.unwrap(), 1);

    let fetched = storage.get_todo(todo.id).await.unwrap().unwrap();
    assert_eq!(fetched.description.as_deref(), Some(""));
}

#[tokio::test]
async fn test_comments_are_listed_per_todo() {
    let storage = create_test_storage().await;
    let a = storage.create_todo(new_todo("a")).await.unwrap();
    let b = storage.create_todo(new_todo("b")).await.unwrap();

    let first = storage.create_comment(a.id, new_comment("first")).await.unwrap();
    storage.create_comment(a.id, new_comment("second")).await.unwrap();
    storage.create_comment(b.id, new_comment("other")).await.unwrap();

    assert_eq!(first.todo_id, a.id);
    assert_eq!(first.content, "first");

    let contents: Vec<String> = storage
        .list_comments(a.id)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.content)
        .collect();
    assert_eq!(contents, vec!["first", "second"]);
}

#[tokio::test]
async fn test_delete_single_comment() {
    let storage = create_test_storage().await;
    let todo = storage.create_todo(new_todo("t")).await.unwrap();
    let keep = storage.create_comment(todo.id, new_comment("keep")).await.unwrap();
    let drop = storage.create_comment(todo.id, new_comment("drop")).await.unwrap();

    assert_eq!(storage.delete_comment(drop.id).await.unwrap(), 1);

    let remaining = storage.list_comments(todo.id).await.unwrap();
    assert_eq!(remaining, vec![keep]);
}

#[tokio::test]
async fn test_comment_on_missing_todo_fails() {
    let storage = create_test_storage().await;

    let result = storage.create_comment(404, new_comment("orphan")).await;

    match result {
        Err(StorageError::Sqlx(sqlx::Error::Database(db_err))) => {
            assert!(db_err.is_foreign_key_violation());
        }
        other => panic!("expected foreign key violation, got {:?}", other),
    }
}

#[tokio::test]
async fn test_delete_todo_cascades_to_comments() {
    let storage = create_test_storage().await;
    let todo = storage.create_todo(new_todo("with comments")).await.unwrap();
    storage.create_comment(todo.id, new_comment("one")).await.unwrap();
    storage.create_comment(todo.id, new_comment("two")).await.unwrap();
    assert_eq!(comment_rows_for(&storage, todo.id).await, 2);

    assert_eq!(storage.delete_todo(todo.id).await.unwrap(), 1);

    assert_eq!(comment_rows_for(&storage, todo.id).await, 0);
    assert!(storage.get_todo(todo.id).await.unwrap().is_none());
    assert!(storage.list_comments(todo.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_file_backed_database_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("todos.db");

    {
        let storage = SqliteStorage::new(StorageConfig::with_path(&path)).await.unwrap();
        storage.initialize().await.unwrap();
        storage.create_todo(new_todo("persisted")).await.unwrap();
        storage.pool().close().await;
    }

    let storage = SqliteStorage::new(StorageConfig::with_path(&path)).await.unwrap();
    storage.initialize().await.unwrap();

    let todos = storage.list_todos(TodoFilter::All).await.unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].title, "persisted");
}
