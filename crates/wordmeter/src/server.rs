//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the text statistics over MCP so AI assistants can call them via
//! stdio transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer: it wraps the same core library
//! that the CLI commands use. Each `#[tool]` method delegates to
//! `wordmeter_core` rather than implementing analysis itself.

use std::num::NonZeroU32;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use wordmeter_core::session::EditorSession;
use wordmeter_core::{AnalysisOptions, DEFAULT_TOP_K, ReadingTime, letter_density_with};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextParams {
    /// The text to analyze.
    pub text: String,
    /// Leave whitespace out of the character count.
    #[serde(default)]
    pub exclude_spaces: bool,
    /// Number of density rows in `visible_density` (server default if omitted).
    pub top: Option<usize>,
    /// Put every letter in `visible_density`.
    #[serde(default)]
    pub all: bool,
    /// Reading speed in words per minute (server default if omitted).
    pub words_per_minute: Option<u32>,
}

/// Parameters for the `letter_density` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct LetterDensityParams {
    /// The text to analyze.
    pub text: String,
    /// Return only the K most frequent letters. Omit for all.
    pub top: Option<usize>,
}

/// Parameters for the `reading_time` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ReadingTimeParams {
    /// Number of words.
    pub word_count: usize,
    /// Reading speed in words per minute (server default if omitted).
    pub words_per_minute: Option<u32>,
}

/// MCP server exposing text statistics to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    options: AnalysisOptions,
    top_k: usize,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

fn words_per_minute(
    requested: Option<u32>,
    fallback: NonZeroU32,
) -> Result<NonZeroU32, McpError> {
    match requested {
        None => Ok(fallback),
        Some(wpm) => NonZeroU32::new(wpm).ok_or_else(|| {
            McpError::invalid_params("words_per_minute must be greater than zero", None)
        }),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl ProjectServer {
    /// Create a server with default analysis options.
    pub fn new() -> Self {
        Self::with_options(AnalysisOptions::default(), DEFAULT_TOP_K)
    }

    /// Create a server with configured analysis options.
    pub fn with_options(options: AnalysisOptions, top_k: usize) -> Self {
        Self {
            tool_router: Self::tool_router(),
            options,
            top_k,
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let text = if params.format == "json" {
            to_json(&serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "description": env!("CARGO_PKG_DESCRIPTION"),
            }))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Compute every statistic for a text.
    #[tool(
        description = "Count characters, words and sentences, estimate reading time, and rank letter frequency for a text."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "analyze_text",
            exclude_spaces = params.exclude_spaces,
            "executing MCP tool"
        );

        let mut options = self.options.clone();
        options.words_per_minute =
            words_per_minute(params.words_per_minute, options.words_per_minute)?;

        let mut session = EditorSession::new(options, params.top.unwrap_or(self.top_k));
        session.set_exclude_spaces(params.exclude_spaces);
        if params.all {
            session.toggle_expanded();
        }
        let snapshot = session.set_text(params.text);

        tracing::info!(
            tool = "analyze_text",
            words = snapshot.report.word_count,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(
            &snapshot,
        )?)]))
    }

    /// Rank the letters of a text by frequency.
    #[tool(
        description = "Rank letters by frequency. Returns letter, count and percentage, most frequent first."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn letter_density(
        &self,
        Parameters(params): Parameters<LetterDensityParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "letter_density", top = ?params.top, "executing MCP tool");

        let mut density = letter_density_with(&params.text, &self.options.alphabet);
        if let Some(top) = params.top {
            density.truncate(top);
        }

        tracing::info!(
            tool = "letter_density",
            letters = density.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(
            &density,
        )?)]))
    }

    /// Format a reading time for a word count.
    #[tool(description = "Estimate reading time for a number of words, e.g. \"3 minutes\" or \"1h 5min\".")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn reading_time(
        &self,
        Parameters(params): Parameters<ReadingTimeParams>,
    ) -> Result<CallToolResult, McpError> {
        let wpm = words_per_minute(params.words_per_minute, self.options.words_per_minute)?;
        tracing::debug!(
            tool = "reading_time",
            word_count = params.word_count,
            wpm = wpm.get(),
            "executing MCP tool"
        );

        let estimate = ReadingTime::from_word_count(params.word_count, wpm);
        let json = to_json(&serde_json::json!({
            "word_count": params.word_count,
            "words_per_minute": wpm.get(),
            "minutes": estimate.total_minutes(),
            "reading_time": estimate.to_string(),
        }))?;

        tracing::info!(tool = "reading_time", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_text for full statistics, letter_density \
                 for letter frequency, and reading_time to format a word count.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
