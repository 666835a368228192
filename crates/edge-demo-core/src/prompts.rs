//! Prompt entry: `analyze_code`.

use mcpkit_core::types::{GetPromptResult, Prompt};
use serde::Deserialize;

use crate::server::EdgeServerBuilder;

/// Arguments for `analyze_code`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeCodeArgs {
    /// The programming language of the code.
    pub language: String,
    /// Specific area to focus on.
    #[serde(default)]
    pub focus: Option<String>,
}

impl AnalyzeCodeArgs {
    fn focus(&self) -> Option<&str> {
        self.focus.as_deref().filter(|f| !f.is_empty())
    }
}

/// Render the review request text.
///
/// The fourth review dimension is present only when a non-empty focus is
/// given; otherwise its line is left blank.
#[must_use]
pub fn analyze_code_text(args: &AnalyzeCodeArgs) -> String {
    let focus = args.focus();
    let focus_text = focus.map(|f| format!(" with a focus on {f}")).unwrap_or_default();
    let focus_item = focus
        .map(|f| format!("4. Specific {f} considerations"))
        .unwrap_or_default();

    format!(
        "Please analyze the following {language} code{focus_text}. Provide insights on:\n\
         \n\
         1. Code quality and best practices\n\
         2. Potential issues or bugs\n\
         3. Suggestions for improvement\n\
         {focus_item}\n\
         \n\
         Here is the code to analyze:",
        language = args.language,
    )
}

/// Build the single-message prompt result.
#[must_use]
pub fn analyze_code(args: &AnalyzeCodeArgs) -> GetPromptResult {
    GetPromptResult::user(analyze_code_text(args))
}

/// Prompt definition for `analyze_code`.
#[must_use]
pub fn analyze_code_prompt() -> Prompt {
    Prompt::new("analyze_code")
        .description("Generate a prompt template for analyzing code")
        .required_arg("language", "The programming language of the code")
        .optional_arg(
            "focus",
            "Specific area to focus on (e.g., 'performance', 'security', 'readability')",
        )
}

/// Register the prompt.
pub fn register(builder: &mut EdgeServerBuilder) {
    builder.add_prompt(analyze_code_prompt(), |args: AnalyzeCodeArgs| async move {
        Ok(analyze_code(&args))
    });
}
