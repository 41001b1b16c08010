// ABOUTME: Shared state handed to every request handler
// ABOUTME: Holds the data-access handle and the compiled view templates

use std::sync::Arc;

use todoboard_storage::TodoStore;

use crate::views::Views;

/// Shared application state for API handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
    pub views: Arc<Views>,
}

impl AppState {
    /// Build state around a store, compiling the embedded templates
    pub fn new(store: Arc<dyn TodoStore>) -> Result<Self, tera::Error> {
        Ok(Self {
            store,
            views: Arc::new(Views::new()?),
        })
    }
}
