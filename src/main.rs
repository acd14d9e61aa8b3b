use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use gallery_api::api::{create_router, AppState};
use gallery_api::config::Config;
use gallery_api::db::{create_redis_client, Cache};
use gallery_api::services::providers::GalleryHistoryProvider;
use gallery_api::services::RecommendationEngine;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let redis_client = create_redis_client(&config.redis_url)?;
    let (cache, _cache_writer) = Cache::new(redis_client).await;

    let provider = GalleryHistoryProvider::new(
        cache,
        config.history_api_key.clone(),
        config.history_api_url.clone(),
    );
    let engine = RecommendationEngine::new(Arc::new(provider));

    let state = AppState::new(Arc::new(engine));
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Gallery API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
