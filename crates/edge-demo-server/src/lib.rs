//! HTTP server for the FastMCP edge demo.
//!
//! Serves the MCP endpoint from [`edge_demo_core`] on `/mcp` and a few REST
//! routes on the same listener:
//!
//! | Route | Purpose |
//! |-------|---------|
//! | `GET /` | landing page |
//! | `GET /health` | liveness probe |
//! | `GET /mcp`, `POST /mcp` | MCP streaming and messages |
//! | `GET /api/info` | server info as JSON |
//! | `GET /api/time?tz=` | current time in a zone |

#![deny(missing_docs)]

pub mod app;
pub mod build_info;
pub mod config;
pub mod error;
pub mod routes;
pub mod telemetry;

pub use build_info::{BUILD_INFO, BuildInfo};
pub use config::{Config, LogFormat};
pub use error::{ApiError, ServeError};
