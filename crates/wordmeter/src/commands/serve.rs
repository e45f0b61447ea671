//! Serve command: run the MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use wordmeter_core::Config;

use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    // Transport is always stdio; nothing to configure yet
}

/// Serve analysis tools over MCP until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(_args: ServeArgs, config: Config) -> anyhow::Result<()> {
    let server = ProjectServer::with_options(config.analysis_options(), config.density_top);

    info!("starting MCP server on stdio");
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;

    let reason = service
        .waiting()
        .await
        .context("MCP server task failed")?;
    info!(?reason, "MCP server stopped");
    Ok(())
}
