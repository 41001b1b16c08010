// ABOUTME: Server-side HTML rendering with Tera
// ABOUTME: Templates are embedded at compile time and compiled once at startup

use tera::{Context, Tera};

use todoboard_core::{Comment, Todo, TodoFilter};

const FILTERS: [TodoFilter; 3] = [TodoFilter::All, TodoFilter::Done, TodoFilter::Undone];

/// Compiled page templates
pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        // Registered together so `extends` can resolve the base layout
        tera.add_raw_templates(vec![
            ("base.html", include_str!("../templates/base.html")),
            ("index.html", include_str!("../templates/index.html")),
            ("todo.html", include_str!("../templates/todo.html")),
        ])?;

        Ok(Self { tera })
    }

    /// The todo list with filter links and the new-todo form
    pub fn render_index(&self, todos: &[Todo], filter: TodoFilter) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("todos", todos);
        context.insert("filter", filter.as_str());
        context.insert("filters", &FILTERS.map(TodoFilter::as_str));

        self.tera.render("index.html", &context)
    }

    /// One todo, its editable description and its comments
    pub fn render_todo(&self, todo: &Todo, comments: &[Comment]) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("todo", todo);
        context.insert("comments", comments);

        self.tera.render("todo.html", &context)
    }
}
