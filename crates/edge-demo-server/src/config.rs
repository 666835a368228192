//! Command-line and environment configuration.

use std::net::SocketAddr;

use clap::{ArgAction, Parser, ValueEnum};

/// Log output format.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Server configuration.
#[derive(Parser, Clone, Debug)]
#[command(
    name = "edge-demo-server",
    about = "FastMCP edge demo: MCP tools, resources and prompts next to custom REST routes",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "MCP_BIND_ADDR", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Log output format
    #[arg(long, env = "MCP_LOG_FORMAT", value_enum, default_value = "text")]
    pub log_format: LogFormat,

    /// Allow cross-origin requests on every route
    #[arg(
        long,
        env = "MCP_CORS",
        action = ArgAction::Set,
        default_value_t = true,
        value_name = "BOOL"
    )]
    pub cors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            log_format: LogFormat::Text,
            cors: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Config::command().debug_assert();
    }

    #[test]
    fn test_flags() {
        let config =
            Config::try_parse_from(["edge-demo-server", "--bind", "0.0.0.0:8787", "--log-format", "json", "--cors", "false"])
                .unwrap();
        assert_eq!(config.bind, "0.0.0.0:8787".parse::<SocketAddr>().unwrap());
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(!config.cors);
    }

    #[test]
    fn test_rejects_bad_address() {
        assert!(Config::try_parse_from(["edge-demo-server", "--bind", "localhost"]).is_err());
    }

    #[test]
    fn test_default_matches_parser_defaults() {
        let default = Config::default();
        assert_eq!(default.bind.port(), 3000);
        assert_eq!(default.log_format, LogFormat::Text);
        assert!(default.cors);
    }
}
