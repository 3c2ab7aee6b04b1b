//! The rendered list and the input form, as one owned value.
//!
//! `TodoController` is the only writer. Hosts read snapshots of it and draw
//! them however they like; `Display` gives a plain-text rendering.

use std::fmt;

use crate::types::{Todo, TodoId};

pub const LOADING_TEXT: &str = "Loading todos...";
pub const EMPTY_TEXT: &str = "No todos yet. Add one!";

/// One rendered item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: TodoId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl TodoRow {
    /// `"title"` or `"title: description"`.
    pub fn label(&self) -> String {
        match &self.description {
            Some(description) => format!("{}: {description}", self.title),
            None => self.title.clone(),
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.completed {
            "Unmark"
        } else {
            "Mark Complete"
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

impl From<Todo> for TodoRow {
    fn from(todo: Todo) -> Self {
        let description = todo.description().map(str::to_string);
        Self {
            id: todo.id,
            title: todo.title,
            description,
            completed: todo.completed,
        }
    }
}

/// What the list region currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    Loading,
    Empty,
    Items(Vec<TodoRow>),
}

/// Title and description input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pub title: String,
    pub description: String,
}

impl Form {
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub list: ListState,
    pub form: Form,
}

impl Default for View {
    fn default() -> Self {
        Self {
            list: ListState::Loading,
            form: Form::default(),
        }
    }
}

impl View {
    /// Replace the list with the server's collection.
    pub fn show(&mut self, todos: Vec<Todo>) {
        self.list = if todos.is_empty() {
            ListState::Empty
        } else {
            ListState::Items(todos.into_iter().map(TodoRow::from).collect())
        };
    }

    pub fn rows(&self) -> &[TodoRow] {
        match &self.list {
            ListState::Items(rows) => rows,
            ListState::Loading | ListState::Empty => &[],
        }
    }

    pub fn row(&self, id: &TodoId) -> Option<&TodoRow> {
        self.rows().iter().find(|r| &r.id == id)
    }

    /// 1-based lookup, as numbered in the rendered list.
    pub fn row_at(&self, number: usize) -> Option<&TodoRow> {
        number.checked_sub(1).and_then(|i| self.rows().get(i))
    }

    /// Placeholder text, when the list shows one instead of rows.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self.list {
            ListState::Loading => Some(LOADING_TEXT),
            ListState::Empty => Some(EMPTY_TEXT),
            ListState::Items(_) => None,
        }
    }

    /// Returns whether the row was present.
    pub fn set_completed(&mut self, id: &TodoId, completed: bool) -> bool {
        match &mut self.list {
            ListState::Items(rows) => match rows.iter_mut().find(|r| &r.id == id) {
                Some(row) => {
                    row.completed = completed;
                    true
                }
                None => false,
            },
            ListState::Loading | ListState::Empty => false,
        }
    }

    /// Drops the row. The list stays `Items`, possibly empty, until the next
    /// refresh.
    pub fn remove(&mut self, id: &TodoId) -> bool {
        match &mut self.list {
            ListState::Items(rows) => {
                let before = rows.len();
                rows.retain(|r| &r.id != id);
                rows.len() != before
            }
            ListState::Loading | ListState::Empty => false,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = self.placeholder() {
            return writeln!(f, "{text}");
        }
        for (i, row) in self.rows().iter().enumerate() {
            let mark = if row.completed { 'x' } else { ' ' };
            writeln!(f, "{}. [{mark}] {}", i + 1, row.label())?;
        }
        Ok(())
    }
}
