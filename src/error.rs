//! Error type for the HTTP surface.
//!
//! # Design
//! Exactly two failure kinds exist: the id does not resolve to a stored todo,
//! and an update payload arrived without a title. Both are terminal and map
//! straight to a status code with an empty body; request-level logging is the
//! trace layer's job, not the handlers'.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The requested todo does not exist — 404.
    NotFound,

    /// An update payload had a null or absent title — 400.
    MissingTitle,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "todo not found"),
            ApiError::MissingTitle => write!(f, "update payload is missing a title"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MissingTitle => StatusCode::BAD_REQUEST,
        };
        status.into_response()
    }
}
