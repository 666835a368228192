//! Handler surface of the FastMCP edge demo.
//!
//! This crate holds everything the demo exposes over MCP, independent of
//! the HTTP transport that serves it:
//!
//! - **Tools**: `greet`, `echo`, `get_datetime`
//! - **Resources**: `info://server`, `info://fastmcp`
//! - **Prompts**: `analyze_code`
//!
//! Every handler is stateless; only `get_datetime` reads the clock.
//!
//! # Quick Start
//!
//! ```rust
//! use edge_demo_core::demo_server;
//! use mcpkit_server::ServerHandler;
//!
//! let server = demo_server();
//! assert_eq!(server.server_info().name, "FastMCP Edge Demo");
//! assert_eq!(server.tool_count(), 3);
//! ```

#![deny(missing_docs)]

pub mod error;
pub mod prompts;
pub mod resources;
pub mod server;
pub mod time;
pub mod tools;

pub use error::TimeError;
pub use server::{EdgeServer, EdgeServerBuilder};
pub use time::{DEFAULT_TIMEZONE, TimeReading};

/// Name the demo server reports to clients.
pub const SERVER_NAME: &str = "FastMCP Edge Demo";

/// Version the demo server reports to clients.
pub const SERVER_VERSION: &str = "1.0.0";

/// Description sent to clients as server instructions.
pub const SERVER_DESCRIPTION: &str = "FastMCP demo running on Cloudflare Workers edge runtime";

/// Build the demo server with every tool, resource, and prompt registered.
#[must_use]
pub fn demo_server() -> EdgeServer {
    let mut builder = EdgeServer::builder(SERVER_NAME, SERVER_VERSION).description(SERVER_DESCRIPTION);
    tools::register(&mut builder);
    resources::register(&mut builder);
    prompts::register(&mut builder);
    builder.build()
}
