//! REST routes served next to the MCP endpoint.

use axum::Json;
use axum::extract::Query;
use axum::response::Html;
use edge_demo_core::{DEFAULT_TIMEZONE, SERVER_NAME, SERVER_VERSION, TimeReading};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ApiError;

/// Landing page documenting the demo.
pub const LANDING_PAGE: &str = include_str!("../assets/landing.html");

/// Path of the MCP endpoint (GET for streaming, POST for messages).
pub const MCP_PATH: &str = "/mcp";

/// Path of the liveness probe.
pub const HEALTH_PATH: &str = "/health";

/// Body of `GET /api/info`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiInfo {
    /// Server name.
    pub name: &'static str,
    /// Server version.
    pub version: &'static str,
    /// Hosting runtime.
    pub runtime: &'static str,
    /// Advertised feature set.
    pub features: [&'static str; 4],
    /// Well-known paths.
    pub endpoints: Endpoints,
}

/// Endpoint table inside [`ApiInfo`].
#[derive(Debug, Clone, Serialize)]
pub struct Endpoints {
    /// MCP endpoint.
    pub mcp: &'static str,
    /// Health check.
    pub health: &'static str,
    /// REST prefix.
    pub api: &'static str,
}

const API_INFO: ApiInfo = ApiInfo {
    name: SERVER_NAME,
    version: SERVER_VERSION,
    runtime: "Cloudflare Workers",
    features: ["tools", "resources", "prompts", "custom-routes"],
    endpoints: Endpoints {
        mcp: MCP_PATH,
        health: HEALTH_PATH,
        api: "/api/*",
    },
};

/// Query string of `GET /api/time`.
#[derive(Debug, Default, Deserialize)]
pub struct TimeQuery {
    /// IANA zone; UTC when absent.
    pub tz: Option<String>,
}

/// `GET /`
pub async fn landing() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// `GET /api/info`
pub async fn api_info() -> Json<ApiInfo> {
    Json(API_INFO)
}

/// `GET /api/time`
///
/// Unlike the `get_datetime` tool, an unknown zone is reported to the
/// caller as a 400 instead of falling back to UTC.
pub async fn api_time(Query(query): Query<TimeQuery>) -> Result<Json<TimeReading>, ApiError> {
    let tz = query.tz.as_deref().unwrap_or(DEFAULT_TIMEZONE);
    debug!(timezone = tz, "Time lookup");

    TimeReading::now(tz).map(Json).map_err(|err| {
        warn!(timezone = tz, "Rejected time lookup");
        ApiError::from(err)
    })
}

/// `GET /health`
pub async fn health() -> &'static str {
    "OK"
}
