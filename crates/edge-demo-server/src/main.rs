//! FastMCP edge demo server.
//!
//! ```text
//! cargo run -p edge-demo-server -- --bind 127.0.0.1:3000
//! ```

use clap::Parser;
use edge_demo_core::demo_server;
use edge_demo_server::{BUILD_INFO, Config, ServeError, app, telemetry};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), ServeError> {
    let config = Config::parse();
    telemetry::init(config.log_format)?;

    info!(
        version = BUILD_INFO.version,
        git_sha = BUILD_INFO.git_sha,
        build_time = BUILD_INFO.build_time,
        "Build info"
    );

    let server = demo_server();
    info!(
        name = server.name(),
        tools = server.tool_count(),
        resources = server.resource_count(),
        prompts = server.prompt_count(),
        "Registered MCP handlers"
    );

    let app = app::router(server, &config);

    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(|source| ServeError::Bind {
            addr: config.bind,
            source,
        })?;
    info!(addr = %config.bind, cors = config.cors, "Listening on http://{}/mcp", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServeError::Serve)?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
