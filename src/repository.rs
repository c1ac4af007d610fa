//! Storage abstraction for todos.
//!
//! # Design
//! `TodoRepository` is object-safe so the router can run against any store —
//! the in-memory one in production, hand-rolled stubs in tests. Absence is
//! signaled by `Option`/`bool`, not by an error; "not found" is a normal
//! outcome here.
//!
//! Identity is assigned inside `add`, under the same lock that appends the
//! item. The counter is monotonic and survives deletions, so an id observed
//! by a client is never recycled for a different todo.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::types::{CreateTodo, Todo, TodoId, UpdateTodo};

/// Shared handle to a repository, as held in router state.
pub type DynTodoRepository = Arc<dyn TodoRepository>;

#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// All stored todos, in insertion order.
    async fn get_all(&self) -> Vec<Todo>;

    /// Look up a todo by id.
    async fn find_by_id(&self, id: TodoId) -> Option<Todo>;

    /// Store a new todo, assigning its id. Returns the stored record.
    async fn add(&self, input: CreateTodo) -> Todo;

    /// Merge the payload into the stored todo in place. Returns the merged
    /// record, or `None` if the id is absent.
    async fn update(&self, id: TodoId, input: UpdateTodo) -> Option<Todo>;

    /// Remove the todo with the given id. Returns whether anything was
    /// removed.
    async fn delete(&self, id: TodoId) -> bool;
}

struct Store {
    todos: Vec<Todo>,
    next_id: TodoId,
}

/// Insertion-ordered in-memory store. Lookups and removals scan linearly.
pub struct InMemoryTodoRepository {
    store: RwLock<Store>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                todos: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn get_all(&self) -> Vec<Todo> {
        self.store.read().await.todos.clone()
    }

    async fn find_by_id(&self, id: TodoId) -> Option<Todo> {
        let store = self.store.read().await;
        store.todos.iter().find(|todo| todo.id == id).cloned()
    }

    async fn add(&self, input: CreateTodo) -> Todo {
        let mut store = self.store.write().await;
        let todo = Todo {
            id: store.next_id,
            title: input.title,
            completed: input.completed,
            order: input.order,
        };
        store.next_id += 1;
        store.todos.push(todo.clone());
        todo
    }

    async fn update(&self, id: TodoId, input: UpdateTodo) -> Option<Todo> {
        let mut store = self.store.write().await;
        let todo = store.todos.iter_mut().find(|todo| todo.id == id)?;
        todo.merge(input);
        Some(todo.clone())
    }

    async fn delete(&self, id: TodoId) -> bool {
        let mut store = self.store.write().await;
        let before = store.todos.len();
        store.todos.retain(|todo| todo.id != id);
        store.todos.len() < before
    }
}
