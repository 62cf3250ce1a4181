use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use vilmbox::cache::MemoryCache;
use vilmbox::tmdb::TmdbClient;
use vilmbox::{router, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting vilmbox...");

    let config = Config::new()?;
    info!("Configuration loaded");

    let cache = Arc::new(MemoryCache::new(config.cache_ttl(), config.cache_capacity));
    let tmdb_client = TmdbClient::new(&config.api_url, &config.api_key, cache)?;
    info!(
        "TMDB client initialized, cache ttl {:?}, capacity {}",
        config.cache_ttl(),
        config.cache_capacity
    );

    let state = AppState {
        tmdb: tmdb_client,
        default_region: config.default_region.clone(),
        default_language: config.default_language.clone(),
    };

    let app = router(state);

    let addr: SocketAddr = format!("127.0.0.1:{}", config.port).parse()?;
    info!("Server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
