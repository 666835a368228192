//! HTTP application assembly.

use axum::Router;
use axum::routing::get;
use edge_demo_core::EdgeServer;
use mcpkit_axum::McpRouter;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::routes::{self, HEALTH_PATH, MCP_PATH};

/// Build the application: the MCP endpoint on `/mcp` plus the REST routes.
pub fn router(server: EdgeServer, config: &Config) -> Router {
    let mcp = McpRouter::new(server)
        .post_path(MCP_PATH)
        .sse_path(MCP_PATH)
        .into_router();

    let mut app = Router::new()
        .route("/", get(routes::landing))
        .route("/api/info", get(routes::api_info))
        .route("/api/time", get(routes::api_time))
        .route(HEALTH_PATH, get(routes::health))
        .merge(mcp);

    if config.cors {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    app.layer(TraceLayer::new_for_http())
}
