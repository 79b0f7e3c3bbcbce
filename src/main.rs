//! fizzbuzz-server - FizzBuzz HTTP API with request statistics
//!
//! This is the composition root that wires together all the components.

use fizzbuzz_server::adapters::inbound::ApiServer;
use fizzbuzz_server::adapters::outbound::DashMapMetricsStore;
use fizzbuzz_server::application::FizzBuzzService;
use fizzbuzz_server::config::load_config;
use fizzbuzz_server::domain::ports::MetricsStore;
use fizzbuzz_server::infrastructure::{shutdown_signal, ShutdownController};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    tracing::info!(
        "starting fizzbuzz-server listen={} max_limit={:?}",
        cfg.listen_addr,
        cfg.max_limit
    );

    // ===== COMPOSITION ROOT =====

    // 1. Metrics store (DashMap), owned here and shared by reference
    let metrics: Arc<dyn MetricsStore> = Arc::new(DashMapMetricsStore::new());

    // 2. Application service
    let service = Arc::new(FizzBuzzService::new(metrics, cfg.max_limit));

    // 3. Inbound adapter
    let server = ApiServer::new(cfg.listen_addr.clone(), service);

    // 4. Signals
    let shutdown = ShutdownController::new();
    tokio::spawn(shutdown_signal(shutdown.clone()));

    let serve = server.run(shutdown.clone());
    tokio::pin!(serve);

    tokio::select! {
        res = &mut serve => res?,
        _ = shutdown.wait() => {
            let grace = Duration::from_secs(cfg.shutdown_grace_secs);
            match tokio::time::timeout(grace, &mut serve).await {
                Ok(res) => res?,
                Err(_) => tracing::warn!(
                    "grace period of {}s elapsed with requests still in flight",
                    cfg.shutdown_grace_secs
                ),
            }
        }
    }

    tracing::info!("fizzbuzz-server exited");
    Ok(())
}
