//! Resource entries: `info://server` and `info://fastmcp`.

use mcpkit_core::error::McpError;
use mcpkit_core::types::Resource;
use serde::Serialize;

use crate::server::EdgeServerBuilder;
use crate::{SERVER_NAME, SERVER_VERSION};

/// URI of the server description resource.
pub const SERVER_INFO_URI: &str = "info://server";

/// URI of the project description resource.
pub const FASTMCP_INFO_URI: &str = "info://fastmcp";

/// Markdown body of `info://fastmcp`.
pub const FASTMCP_MARKDOWN: &str = include_str!("../assets/fastmcp.md");

#[derive(Debug, Serialize)]
struct ServerDescriptor {
    deployment: &'static str,
    description: &'static str,
    features: [&'static str; 3],
    name: &'static str,
    runtime: &'static str,
    version: &'static str,
}

const DESCRIPTOR: ServerDescriptor = ServerDescriptor {
    deployment: "Cloudflare Workers",
    description: "FastMCP Edge Demo - a stateless MCP server running on the edge",
    features: ["tools", "resources", "prompts"],
    name: SERVER_NAME,
    runtime: "Edge (V8 Isolates)",
    version: SERVER_VERSION,
};

/// Body of `info://server`: the server descriptor as 2-space indented JSON.
pub fn server_info_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&DESCRIPTOR)
}

/// Resource definition for `info://server`.
#[must_use]
pub fn server_info_resource() -> Resource {
    Resource::new(SERVER_INFO_URI, "Server Info")
        .description("Information about this MCP server")
        .mime_type("application/json")
}

/// Resource definition for `info://fastmcp`.
#[must_use]
pub fn fastmcp_info_resource() -> Resource {
    Resource::new(FASTMCP_INFO_URI, "FastMCP Project Info")
        .description("Information about the FastMCP project")
        .mime_type("text/markdown")
}

/// Register both resources.
pub fn register(builder: &mut EdgeServerBuilder) {
    builder
        .add_resource(server_info_resource(), || async {
            server_info_json().map_err(|e| McpError::internal(e.to_string()))
        })
        .add_resource(fastmcp_info_resource(), || async {
            Ok(FASTMCP_MARKDOWN.to_string())
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_server_info_layout() {
        let expected = r#"{
  "deployment": "Cloudflare Workers",
  "description": "FastMCP Edge Demo - a stateless MCP server running on the edge",
  "features": [
    "tools",
    "resources",
    "prompts"
  ],
  "name": "FastMCP Edge Demo",
  "runtime": "Edge (V8 Isolates)",
  "version": "1.0.0"
}"#;
        assert_eq!(server_info_json().unwrap(), expected);
    }

    #[test]
    fn test_markdown_document() {
        assert!(FASTMCP_MARKDOWN.starts_with("# FastMCP\n"));
        assert!(FASTMCP_MARKDOWN.contains("## Key Features"));
        assert!(FASTMCP_MARKDOWN.contains("https://github.com/punkpeye/fastmcp"));
        assert!(FASTMCP_MARKDOWN.ends_with("no Node.js dependencies.\n"));
    }

    #[test]
    fn test_declared_mime_types() {
        assert_eq!(
            server_info_resource().mime_type.as_deref(),
            Some("application/json")
        );
        assert_eq!(
            fastmcp_info_resource().mime_type.as_deref(),
            Some("text/markdown")
        );
    }
}
