mod activities;
mod catalog;
mod config;
mod error;
mod matcher;
mod model;
mod quiz;
mod recommend;
mod recorder;
mod scoring;
mod server;
mod store;

use std::sync::Arc;

use axum::{routing::get, Router};
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpService,
};
use rmcp::{ServiceExt, transport::stdio};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use dna_common::analytics::{AnalyticsClient, AnalyticsClientConfig};
use dna_common::redis::RedisCache;
use dna_common::session::CompletionCounter;
use error::AppError;
use recorder::ResultRecorder;
use server::TeamDnaServer;
use store::ResultStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout is reserved for MCP JSON-RPC in stdio mode
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting team-dna MCP server");

    let config = Config::from_env()?;
    let analytics_config = AnalyticsClientConfig::from_env();
    info!(
        redis = config.redis_url.is_some(),
        analytics = analytics_config.endpoint.is_some(),
        http_addr = ?config.http_addr,
        result_ttl_secs = ?config.result_ttl_secs,
        "configuration loaded"
    );

    let redis = RedisCache::new(config.redis_url.as_deref());
    if redis.is_available().await {
        info!("redis connected");
    } else {
        info!("redis unavailable, results will not be stored");
    }

    let server = build_server(&config, analytics_config, redis)?;

    if let Some(addr) = config.http_addr {
        let service = StreamableHttpService::new(
            move || Ok(server.clone()),
            LocalSessionManager::default().into(),
            Default::default(),
        );
        let app = Router::new()
            .route("/health", get(|| async { "ok" }))
            .nest_service("/mcp", service);

        let listener = TcpListener::bind(addr).await?;
        info!(listen_addr = %addr, "MCP server ready, serving streamable HTTP on /mcp");
        axum::serve(listener, app).await?;
    } else {
        info!("MCP server ready, serving on stdio");
        let service = server.serve(stdio()).await.inspect_err(|e| {
            tracing::error!(error = %e, "MCP server error");
        })?;
        service.waiting().await?;
    }

    info!("MCP server shut down");
    Ok(())
}

fn build_server(
    config: &Config,
    analytics_config: AnalyticsClientConfig,
    redis: RedisCache,
) -> Result<TeamDnaServer, AppError> {
    let store = Arc::new(ResultStore::new(redis.clone(), config.result_ttl_secs));
    let analytics = AnalyticsClient::new(analytics_config)?;
    let recorder = ResultRecorder::new(analytics, CompletionCounter::new(redis));
    Ok(TeamDnaServer::new(store, recorder))
}
