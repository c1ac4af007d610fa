//! HTTP routing for the todo API.
//!
//! `app_with_repository` is the injection seam: production wiring passes the
//! in-memory store, tests pass stubs. Handlers only translate between HTTP
//! and the repository; merge and identity rules live below this layer.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header::{self, HeaderName};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::error::ApiError;
use crate::repository::{DynTodoRepository, InMemoryTodoRepository};
use crate::types::{CreateTodo, Todo, TodoId, UpdateTodo};

/// Router backed by a fresh in-memory store.
pub fn app() -> Router {
    app_with_repository(Arc::new(InMemoryTodoRepository::new()))
}

/// Router backed by the given repository.
pub fn app_with_repository(repository: DynTodoRepository) -> Router {
    Router::new()
        .route("/api/todo", get(list_todos).post(create_todo))
        .route(
            "/api/todo/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(repository)
}

async fn list_todos(State(repository): State<DynTodoRepository>) -> Json<Vec<Todo>> {
    Json(repository.get_all().await)
}

async fn get_todo(
    State(repository): State<DynTodoRepository>,
    Path(id): Path<TodoId>,
) -> Result<Json<Todo>, ApiError> {
    repository
        .find_by_id(id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn create_todo(
    State(repository): State<DynTodoRepository>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, [(HeaderName, String); 1], Json<Todo>) {
    let todo = repository.add(input).await;
    let location = format!("/api/todo/{}", todo.id);
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(todo))
}

async fn update_todo(
    State(repository): State<DynTodoRepository>,
    Path(id): Path<TodoId>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, ApiError> {
    // Absence wins over a bad payload: an unknown id is 404 even when the
    // title is also missing.
    if repository.find_by_id(id).await.is_none() {
        return Err(ApiError::NotFound);
    }
    if input.title.is_none() {
        return Err(ApiError::MissingTitle);
    }
    let merged = repository
        .update(id, input)
        .await
        .ok_or(ApiError::NotFound)?;
    Ok(Json(merged))
}

async fn delete_todo(
    State(repository): State<DynTodoRepository>,
    Path(id): Path<TodoId>,
) -> Result<StatusCode, ApiError> {
    if repository.delete(id).await {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::repository::TodoRepository;

    /// Canned-data repository for exercising handlers without a router.
    #[derive(Default)]
    struct StubRepository {
        todos: Vec<Todo>,
    }

    impl StubRepository {
        fn with_todos(todos: Vec<Todo>) -> DynTodoRepository {
            Arc::new(Self { todos })
        }

        fn empty() -> DynTodoRepository {
            Arc::new(Self::default())
        }
    }

    #[async_trait]
    impl TodoRepository for StubRepository {
        async fn get_all(&self) -> Vec<Todo> {
            self.todos.clone()
        }

        async fn find_by_id(&self, id: TodoId) -> Option<Todo> {
            self.todos.iter().find(|todo| todo.id == id).cloned()
        }

        async fn add(&self, input: CreateTodo) -> Todo {
            Todo {
                id: self.todos.len() as TodoId + 1,
                title: input.title,
                completed: input.completed,
                order: input.order,
            }
        }

        async fn update(&self, id: TodoId, input: UpdateTodo) -> Option<Todo> {
            let mut todo = self.find_by_id(id).await?;
            todo.merge(input);
            Some(todo)
        }

        async fn delete(&self, id: TodoId) -> bool {
            self.todos.iter().any(|todo| todo.id == id)
        }
    }

    fn stub_todo() -> Todo {
        Todo {
            id: 1,
            title: Some("Mock ToDo".to_string()),
            completed: false,
            order: 0,
        }
    }

    #[tokio::test]
    async fn list_returns_all_stored_todos() {
        let expected = vec![stub_todo()];
        let repository = StubRepository::with_todos(expected.clone());

        let Json(todos) = list_todos(State(repository)).await;

        assert_eq!(todos, expected);
    }

    #[tokio::test]
    async fn get_returns_stored_todo() {
        let repository = StubRepository::with_todos(vec![stub_todo()]);

        let result = get_todo(State(repository), Path(1)).await;

        assert_eq!(result.unwrap().0, stub_todo());
    }

    #[tokio::test]
    async fn get_absent_is_not_found() {
        let result = get_todo(State(StubRepository::empty()), Path(1)).await;

        assert_eq!(result.unwrap_err(), ApiError::NotFound);
    }

    #[tokio::test]
    async fn create_returns_created_with_location() {
        let input = CreateTodo {
            title: Some("Mock ToDo".to_string()),
            completed: false,
            order: 0,
        };

        let (status, [(name, value)], Json(todo)) =
            create_todo(State(StubRepository::empty()), Json(input)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(name, header::LOCATION);
        assert_eq!(value, "/api/todo/1");
        assert_eq!(todo, stub_todo());
    }

    #[tokio::test]
    async fn update_merges_payload_into_stored_todo() {
        let repository = StubRepository::with_todos(vec![stub_todo()]);
        let input = UpdateTodo {
            title: Some("Mock ToDo2".to_string()),
            completed: Some(true),
            order: None,
        };

        let Json(todo) = update_todo(State(repository), Path(1), Json(input))
            .await
            .unwrap();

        assert_eq!(todo.title.as_deref(), Some("Mock ToDo2"));
        assert!(todo.completed);
        assert_eq!(todo.order, 0);
    }

    #[tokio::test]
    async fn update_absent_is_not_found_even_without_title() {
        let input = UpdateTodo {
            title: None,
            completed: Some(true),
            order: None,
        };

        let result = update_todo(State(StubRepository::empty()), Path(1), Json(input)).await;

        assert_eq!(result.unwrap_err(), ApiError::NotFound);
    }

    #[tokio::test]
    async fn update_without_title_is_missing_title() {
        let repository = StubRepository::with_todos(vec![stub_todo()]);
        let input = UpdateTodo {
            title: None,
            completed: Some(true),
            order: None,
        };

        let result = update_todo(State(repository), Path(1), Json(input)).await;

        assert_eq!(result.unwrap_err(), ApiError::MissingTitle);
    }

    #[tokio::test]
    async fn delete_stored_todo_is_ok() {
        let repository = StubRepository::with_todos(vec![stub_todo()]);

        let result = delete_todo(State(repository), Path(1)).await;

        assert_eq!(result.unwrap(), StatusCode::OK);
    }

    #[tokio::test]
    async fn delete_absent_is_not_found() {
        let result = delete_todo(State(StubRepository::empty()), Path(1)).await;

        assert_eq!(result.unwrap_err(), ApiError::NotFound);
    }
}
