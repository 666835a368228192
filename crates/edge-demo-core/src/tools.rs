//! Tool registry entries: `greet`, `echo`, and `get_datetime`.

use chrono::{DateTime, Utc};
use mcpkit_core::types::{Tool, ToolAnnotations, ToolOutput};
use serde::Deserialize;
use tracing::debug;

use crate::server::EdgeServerBuilder;
use crate::time;

/// Arguments for `greet`.
#[derive(Debug, Clone, Deserialize)]
pub struct GreetArgs {
    /// The name of the person to greet.
    pub name: String,
}

/// Arguments for `echo`.
#[derive(Debug, Clone, Deserialize)]
pub struct EchoArgs {
    /// The text to echo back.
    pub text: String,
}

/// Arguments for `get_datetime`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DateTimeArgs {
    /// IANA time zone; UTC when absent.
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Greet someone by name.
#[must_use]
pub fn greet(args: &GreetArgs) -> String {
    format!("Hello, {}! This greeting was served from the edge.", args.name)
}

/// Echo back the provided text.
#[must_use]
pub fn echo(args: &EchoArgs) -> String {
    format!("You said: \"{}\"", args.text)
}

/// Describe `now` in the requested zone.
///
/// An unknown zone is not an error: the reply says so and falls back to UTC.
/// An empty zone name is supplied but unknown.
#[must_use]
pub fn get_datetime(args: &DateTimeArgs, now: DateTime<Utc>) -> String {
    match args.timezone.as_deref() {
        None => format!("Current time: {}", time::format_utc(now)),
        Some(tz) => match time::format_in(now, tz) {
            Ok(formatted) => format!("Current time in {tz}: {formatted}"),
            Err(err) => {
                debug!(timezone = tz, error = %err, "Falling back to UTC");
                format!("Invalid timezone: {tz}. Using UTC: {}", time::format_utc(now))
            }
        },
    }
}

/// Tool definition for `greet`.
#[must_use]
pub fn greet_tool() -> Tool {
    Tool::new("greet")
        .description("Greet someone by name")
        .with_string_param("name", "The name of the person to greet", true)
        .annotations(ToolAnnotations::read_only())
}

/// Tool definition for `echo`.
#[must_use]
pub fn echo_tool() -> Tool {
    Tool::new("echo")
        .description("Echo back the provided text")
        .with_string_param("text", "The text to echo back", true)
        .annotations(ToolAnnotations::read_only())
}

/// Tool definition for `get_datetime`.
#[must_use]
pub fn datetime_tool() -> Tool {
    Tool::new("get_datetime")
        .description("Get the current date and time, optionally in a specific timezone")
        .with_string_param(
            "timezone",
            "IANA timezone (e.g., 'America/New_York', 'Europe/London')",
            false,
        )
        .annotations(ToolAnnotations::read_only())
}

/// Register the three demo tools.
pub fn register(builder: &mut EdgeServerBuilder) {
    builder
        .add_tool(greet_tool(), |args: GreetArgs| async move {
            Ok(ToolOutput::text(greet(&args)))
        })
        .add_tool(echo_tool(), |args: EchoArgs| async move {
            Ok(ToolOutput::text(echo(&args)))
        })
        .add_tool(datetime_tool(), |args: DateTimeArgs| async move {
            Ok(ToolOutput::text(get_datetime(&args, Utc::now())))
        });
}
