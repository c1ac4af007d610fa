//! REST API for managing a list of todo items.
//!
//! # Overview
//! A CRUD surface under `/api/todo` backed by an injectable
//! [`TodoRepository`]. The production wiring uses [`InMemoryTodoRepository`],
//! an insertion-ordered store behind a write lock; tests swap in stubs
//! through [`app_with_repository`].
//!
//! # Design
//! - Handlers translate HTTP to repository calls and nothing else; merge
//!   semantics live on the [`Todo`] entity, identity assignment inside the
//!   store.
//! - "Not found" is an absence (`Option`), not an error, until it reaches the
//!   HTTP boundary where [`ApiError`] maps it to a status code.
//! - Ids are monotonic and never reused, so a deleted todo's id stays dead.

pub mod config;
pub mod error;
pub mod repository;
pub mod routes;
pub mod types;

pub use config::{AppConfig, ConfigError};
pub use error::ApiError;
pub use repository::{DynTodoRepository, InMemoryTodoRepository, TodoRepository};
pub use routes::{app, app_with_repository};
pub use types::{CreateTodo, Todo, TodoId, UpdateTodo};

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Serve the API on the given listener until the server is shut down.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app().layer(TraceLayer::new_for_http())).await
}
