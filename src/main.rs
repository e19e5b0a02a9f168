//! Recall HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use recall::cache::{CacheConfig, LookupOptions, SemanticCache};
use recall::config::Config;
use recall::embedding::{OpenAiConfig, OpenAiEmbedder};
use recall::gateway::{GatewayState, create_router_with_state};
use recall::store::RedisStore;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        redis_url = %config.redis_url,
        key_prefix = %config.key_prefix,
        "Recall starting"
    );

    let store = RedisStore::connect(&config.redis_url).await?;
    store.health_check().await?;
    tracing::info!("Redis connection established");

    let mut embedder_config = OpenAiConfig::new(config.embedding_endpoint.clone())
        .model(config.embedding_model.clone());
    if let Some(key) = &config.embedding_api_key {
        embedder_config = embedder_config.api_key(key.clone());
    }
    let embedder = OpenAiEmbedder::new(embedder_config)?;

    let cache_config = CacheConfig {
        key_prefix: config.key_prefix.clone(),
        fetch_concurrency: config.fetch_concurrency,
    };
    let cache = Arc::new(SemanticCache::new(embedder, store, cache_config));

    let default_options = LookupOptions::new(config.default_top_k, config.default_threshold);
    let state = GatewayState::new(cache, default_options, config.lookup_timeout);

    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Recall shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
