// ABOUTME: HTTP API layer and routing for Todoboard
// ABOUTME: Wires todo and comment handlers, views and static assets into one router

use axum::{
    routing::{delete, get, post},
    Router,
};

pub mod assets;
pub mod comments_handlers;
pub mod error;
pub mod extract;
pub mod health;
pub mod response;
pub mod state;
pub mod todos_handlers;
pub mod views;

pub use state::AppState;
pub use views::Views;

/// Creates the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(todos_handlers::list_todos))
        .route("/todos", post(todos_handlers::create_todo))
        .route(
            "/todos/{id}",
            get(todos_handlers::get_todo)
                .put(todos_handlers::update_description)
                .delete(todos_handlers::delete_todo),
        )
        .route("/todos/{id}/toggle", post(todos_handlers::toggle_todo))
        .route("/todos/{id}/comments", post(comments_handlers::create_comment))
        .route("/comments/{id}", delete(comments_handlers::delete_comment))
        .route("/health", get(health::health_check))
        .route("/static/script.js", get(assets::script))
        .route("/static/style.css", get(assets::stylesheet))
        .with_state(state)
}
