//! Domain types for the todo API.
//!
//! # Design
//! The wire shape is fixed: `{ "id": int, "title": string|null, "completed":
//! bool, "order": int }`. `title` is nullable on the entity itself — a todo
//! created without a title is stored and served with `"title": null`; the
//! null check only applies on update.

use serde::{Deserialize, Serialize};

/// Identity of a stored todo. Assigned by the repository, never reused.
pub type TodoId = i64;

/// A single todo item as stored and served by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: Option<String>,
    pub completed: bool,
    pub order: i64,
}

/// Request payload for creating a new todo.
///
/// A client-supplied `id` field is ignored; the repository assigns identity.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    pub title: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub order: i64,
}

/// Request payload for updating an existing todo. Only the fields present in
/// the JSON are applied; omitted fields retain their stored values.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub order: Option<i64>,
}

impl Todo {
    /// Last-write-wins shallow merge: each `Some` field of the payload
    /// overwrites the stored field, each `None` field is retained. `id` is
    /// never touched.
    pub fn merge(&mut self, update: UpdateTodo) {
        if update.title.is_some() {
            self.title = update.title;
        }
        if let Some(completed) = update.completed {
            self.completed = completed;
        }
        if let Some(order) = update.order {
            self.order = order;
        }
    }
}
