//! Error types for the HTTP server.

use std::io;
use std::net::SocketAddr;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use edge_demo_core::TimeError;
use serde_json::json;
use thiserror::Error;
use tracing_subscriber::filter::ParseError;

/// Errors returned by the REST routes.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The `tz` query parameter is not a known zone.
    #[error(transparent)]
    InvalidTimezone(#[from] TimeError),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidTimezone(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Errors that stop the server.
#[derive(Error, Debug)]
pub enum ServeError {
    /// A default log directive failed to parse.
    #[error("Invalid log filter: {0}")]
    LogFilter(#[from] ParseError),

    /// The listen address could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address that was requested.
        addr: SocketAddr,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] io::Error),
}
