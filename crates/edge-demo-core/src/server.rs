//! The server construct handlers are registered against.
//!
//! [`EdgeServerBuilder`] collects tools, resources, and prompts together with
//! the server's name, version, and description. [`EdgeServer`] is the
//! cheaply cloneable, read-only result that implements the mcpkit handler
//! traits, so it can be mounted on any mcpkit transport.
//!
//! # Example
//!
//! ```rust
//! use edge_demo_core::server::EdgeServer;
//! use mcpkit_core::types::{Tool, ToolOutput};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct ShoutArgs {
//!     text: String,
//! }
//!
//! let mut builder = EdgeServer::builder("shouter", "0.1.0").description("Shouts back");
//! builder.add_tool(
//!     Tool::new("shout").with_string_param("text", "Text to shout", true),
//!     |args: ShoutArgs| async move { Ok(ToolOutput::text(args.text.to_uppercase())) },
//! );
//! let server = builder.build();
//! assert_eq!(server.tool_count(), 1);
//! ```

use std::future::Future;
use std::sync::Arc;

use mcpkit_core::capability::{ServerCapabilities, ServerInfo};
use mcpkit_core::error::McpError;
use mcpkit_core::types::{GetPromptResult, Prompt, Resource, ResourceContents, Tool, ToolOutput};
use mcpkit_server::capability::{PromptService, ResourceService, ToolService};
use mcpkit_server::context::Context;
use mcpkit_server::handler::{PromptHandler, ResourceHandler, ServerHandler, ToolHandler};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

const TOOLS_CALL: &str = "tools/call";
const PROMPTS_GET: &str = "prompts/get";

/// Decode validated JSON arguments into a typed record.
///
/// A missing or mistyped field is an `invalid_params` error for `method`.
fn decode_arguments<A: DeserializeOwned>(method: &str, target: &str, args: Value) -> Result<A, McpError> {
    serde_json::from_value(args).map_err(|e| {
        warn!(method, target, error = %e, "Rejected arguments");
        McpError::invalid_params(method, format!("Invalid arguments for '{target}': {e}"))
    })
}

/// Registration state for an [`EdgeServer`].
pub struct EdgeServerBuilder {
    name: String,
    version: String,
    description: Option<String>,
    tools: ToolService,
    resources: ResourceService,
    prompts: PromptService,
}

impl EdgeServerBuilder {
    /// Set the human-readable description sent to clients as instructions.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Register a tool.
    ///
    /// Arguments are decoded into `A` before `execute` runs; a registration
    /// under an existing name replaces the earlier one.
    pub fn add_tool<A, F, Fut>(&mut self, tool: Tool, execute: F) -> &mut Self
    where
        A: DeserializeOwned + Send + 'static,
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<ToolOutput, McpError>> + Send + 'static,
    {
        let name = tool.name.clone();
        debug!(tool = %name, "Registering tool");
        self.tools.register(tool, move |args: Value, _ctx: &Context<'_>| {
            let pending = decode_arguments::<A>(TOOLS_CALL, &name, args).map(&execute);
            async move {
                match pending {
                    Ok(running) => running.await,
                    Err(err) => Err(err),
                }
            }
        });
        self
    }

    /// Register a static resource.
    ///
    /// `load` produces the text body; it is served with the resource's
    /// declared MIME type.
    pub fn add_resource<F, Fut>(&mut self, resource: Resource, load: F) -> &mut Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String, McpError>> + Send + 'static,
    {
        debug!(uri = %resource.uri, "Registering resource");
        let mime_type = resource.mime_type.clone();
        self.resources.register(resource, move |uri: &str, _ctx: &Context<'_>| {
            let uri = uri.to_string();
            let mime_type = mime_type.clone();
            let body = load();
            async move {
                body.await.map(|text| ResourceContents {
                    mime_type,
                    ..ResourceContents::text(uri, text)
                })
            }
        });
        self
    }

    /// Register a prompt.
    ///
    /// Missing arguments are decoded from an empty object, so `A` decides
    /// which arguments are required.
    pub fn add_prompt<A, F, Fut>(&mut self, prompt: Prompt, load: F) -> &mut Self
    where
        A: DeserializeOwned + Send + 'static,
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<GetPromptResult, McpError>> + Send + 'static,
    {
        let name = prompt.name.clone();
        debug!(prompt = %name, "Registering prompt");
        self.prompts.register(prompt, move |args: Option<Value>, _ctx: &Context<'_>| {
            let args = args.unwrap_or_else(|| Value::Object(serde_json::Map::new()));
            let pending = decode_arguments::<A>(PROMPTS_GET, &name, args).map(&load);
            async move {
                match pending {
                    Ok(running) => running.await,
                    Err(err) => Err(err),
                }
            }
        });
        self
    }

    /// Freeze the registrations into a shareable server.
    #[must_use]
    pub fn build(self) -> EdgeServer {
        EdgeServer {
            inner: Arc::new(Registry {
                name: self.name,
                version: self.version,
                description: self.description,
                tools: self.tools,
                resources: self.resources,
                prompts: self.prompts,
            }),
        }
    }
}

struct Registry {
    name: String,
    version: String,
    description: Option<String>,
    tools: ToolService,
    resources: ResourceService,
    prompts: PromptService,
}

/// An MCP server backed by registered tools, resources, and prompts.
///
/// Clones share the same registrations.
#[derive(Clone)]
pub struct EdgeServer {
    inner: Arc<Registry>,
}

impl EdgeServer {
    /// Start registering handlers for a server with the given identity.
    pub fn builder(name: impl Into<String>, version: impl Into<String>) -> EdgeServerBuilder {
        EdgeServerBuilder {
            name: name.into(),
            version: version.into(),
            description: None,
            tools: ToolService::new(),
            resources: ResourceService::new(),
            prompts: PromptService::new(),
        }
    }

    /// Server name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Server version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.inner.version
    }

    /// Server description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.inner.description.as_deref()
    }

    /// Number of registered tools.
    #[must_use]
    pub fn tool_count(&self) -> usize {
        self.inner.tools.len()
    }

    /// Number of registered resources.
    #[must_use]
    pub fn resource_count(&self) -> usize {
        self.inner.resources.len()
    }

    /// Number of registered prompts.
    #[must_use]
    pub fn prompt_count(&self) -> usize {
        self.inner.prompts.len()
    }
}

impl std::fmt::Debug for EdgeServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdgeServer")
            .field("name", &self.inner.name)
            .field("version", &self.inner.version)
            .field("tools", &self.inner.tools.len())
            .field("resources", &self.inner.resources.len())
            .field("prompts", &self.inner.prompts.len())
            .finish()
    }
}

impl ServerHandler for EdgeServer {
    fn server_info(&self) -> ServerInfo {
        ServerInfo::new(self.inner.name.clone(), self.inner.version.clone())
    }

    fn capabilities(&self) -> ServerCapabilities {
        ServerCapabilities::new()
            .with_tools()
            .with_resources()
            .with_prompts()
    }

    fn instructions(&self) -> Option<String> {
        self.inner.description.clone()
    }
}

// Listings are sorted so clients see a stable order.
impl ToolHandler for EdgeServer {
    async fn list_tools(&self, ctx: &Context<'_>) -> Result<Vec<Tool>, McpError> {
        let mut tools = self.inner.tools.list_tools(ctx).await?;
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tools)
    }

    async fn call_tool(
        &self,
        name: &str,
        args: Value,
        ctx: &Context<'_>,
    ) -> Result<ToolOutput, McpError> {
        debug!(tool = name, "Calling tool");
        self.inner.tools.call(name, args, ctx).await
    }
}

impl ResourceHandler for EdgeServer {
    async fn list_resources(&self, ctx: &Context<'_>) -> Result<Vec<Resource>, McpError> {
        let mut resources = self.inner.resources.list_resources(ctx).await?;
        resources.sort_by(|a, b| a.uri.cmp(&b.uri));
        Ok(resources)
    }

    async fn read_resource(
        &self,
        uri: &str,
        ctx: &Context<'_>,
    ) -> Result<Vec<ResourceContents>, McpError> {
        debug!(uri, "Reading resource");
        self.inner.resources.read_resource(uri, ctx).await
    }
}

impl PromptHandler for EdgeServer {
    async fn list_prompts(&self, ctx: &Context<'_>) -> Result<Vec<Prompt>, McpError> {
        let mut prompts = self.inner.prompts.list_prompts(ctx).await?;
        prompts.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(prompts)
    }

    async fn get_prompt(
        &self,
        name: &str,
        args: Option<serde_json::Map<String, Value>>,
        ctx: &Context<'_>,
    ) -> Result<GetPromptResult, McpError> {
        debug!(prompt = name, "Rendering prompt");
        self.inner.prompts.get_prompt(name, args, ctx).await
    }
}
