//! MCP server initialization for stdio and Streamable HTTP transports.
//!
//! Provides [`serve`], which picks the transport from config, plus the two
//! entry points it dispatches to. Both share one playlist registry and one
//! retriever for the life of the process.

use crate::config::EncoreConfig;
use crate::playlist::PlaylistRegistry;
use crate::retrieval::{self, DocumentRetriever};
use crate::tools::{EncoreTools, ToolDispatcher};
use anyhow::{Context, Result};
use rmcp::ServiceExt;
use std::sync::Arc;

/// Shared setup: create the retriever and an empty registry, then check the
/// tool catalog against what the router will serve.
fn setup_dispatcher(config: &EncoreConfig) -> Result<ToolDispatcher> {
    let retriever = retrieval::create_retriever(&config.retrieval)?;
    let retriever: Arc<dyn DocumentRetriever> = Arc::from(retriever);
    tracing::info!(provider = %config.retrieval.provider, "retriever ready");

    let registry = Arc::new(PlaylistRegistry::new());
    let dispatcher = ToolDispatcher::new(registry, retriever);

    EncoreTools::new(dispatcher.clone())
        .check_catalog()
        .context("tool catalog does not match served tools")?;
    tracing::info!("tool catalog validated");

    Ok(dispatcher)
}

/// Start the server on the transport named by `server.transport`.
pub async fn serve(config: EncoreConfig) -> Result<()> {
    match config.server.transport.as_str() {
        "stdio" => serve_stdio(config).await,
        "http" => serve_http(config).await,
        other => anyhow::bail!("unknown transport: {other}. Supported: stdio, http"),
    }
}

/// Start the MCP server over stdio transport.
pub async fn serve_stdio(config: EncoreConfig) -> Result<()> {
    tracing::info!("starting Encore MCP server on stdio");

    let dispatcher = setup_dispatcher(&config)?;

    let tools = EncoreTools::new(dispatcher);
    let transport = rmcp::transport::stdio();

    let server = tools.serve(transport).await?;
    tracing::info!("MCP server running — waiting for client");

    server.waiting().await?;
    tracing::info!("MCP server shut down");

    Ok(())
}

/// Start the MCP server over Streamable HTTP transport.
///
/// Every HTTP session gets its own handler, but all of them share the same
/// dispatcher, so playlists are visible across sessions.
pub async fn serve_http(config: EncoreConfig) -> Result<()> {
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);

    tracing::info!(addr = %bind_addr, "starting Encore MCP server on HTTP");

    let dispatcher = setup_dispatcher(&config)?;

    let service = rmcp::transport::streamable_http_server::StreamableHttpService::new(
        move || Ok(EncoreTools::new(dispatcher.clone())),
        rmcp::transport::streamable_http_server::session::local::LocalSessionManager::default()
            .into(),
        Default::default(),
    );

    let router = axum::Router::new().nest_service("/mcp", service);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "MCP server listening at http://{bind_addr}/mcp");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("shutting down HTTP server");
        })
        .await?;

    Ok(())
}
