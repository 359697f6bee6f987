use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &ordex::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        primary = %format!("{}:{}", cfg.primary_host, cfg.primary_port),
        replica = %format!("{}:{}", cfg.replica_host, cfg.replica_port),
        database = %cfg.db_name,
        loglevel = %cfg.loglevel
    );

    let store = ordex::OrderStore::connect(cfg)?;

    // Schema init is an explicit startup step against the primary; fail
    // fast here rather than on the first write.
    store.init_schema().await?;
    info!("order schema ready on primary");

    let state = ordex::router::OrdexState::new(store);
    let app = ordex::router::ordex_router(state);

    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("HTTP server listening on {}", cfg.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to install ctrl-c handler");
    }
}
