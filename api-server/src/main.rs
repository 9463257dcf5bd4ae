use anyhow::Context;
use claidcut_api_server::{
    app,
    config::{LogConfig, LogFormat, ServerConfig},
    AppState,
};
use edenai_client::EdenAiClient;
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(log_config: &LogConfig) -> Option<WorkerGuard> {
    let (text_layer, json_layer) = match log_config.format {
        LogFormat::Text => (Some(fmt::layer()), None),
        LogFormat::Json => (None, Some(fmt::layer().json())),
    };

    // Optional daily rolling log file
    let (file_layer, guard) = match &log_config.dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "api-server.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().with_ansi(false).with_writer(writer)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,claidcut_api_server=debug,edenai_client=debug".into()),
        )
        .with(text_layer)
        .with(json_layer)
        .with(file_layer)
        .init();

    guard
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_config = LogConfig::from_env()?;
    let _log_guard = init_tracing(&log_config);

    let config = ServerConfig::from_env().context("invalid server configuration")?;
    if config.gateway.api_key.is_none() {
        tracing::warn!("EDEN_AI_API_KEY is not set; every background removal will fail");
    }
    tracing::info!(
        provider = %config.gateway.provider,
        timeout = ?config.gateway.timeout,
        max_retries = config.gateway.retry.max_retries,
        "Eden AI gateway configured"
    );

    let gateway = EdenAiClient::new(config.gateway).context("failed to build HTTP client")?;
    let state = AppState {
        gateway: Arc::new(gateway),
    };

    tracing::info!("Starting API server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
