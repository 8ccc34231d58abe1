use dotenvy::dotenv;
use std::net::SocketAddr;
use tracing::{error, info, warn};

use activities::config::AppConfig;
use activities::store::RosterStore;
use activities::web;
use activities::web::routes::health::BUILD_ID;

#[tokio::main]
async fn main() {
    // Load .env
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt::init();

    // 2. Config + seed registry
    let config = AppConfig::from_env();
    let registry = match config.initial_registry() {
        Ok(r) => r,
        Err(e) => {
            error!("Could not load activities: {}", e);
            std::process::exit(1);
        }
    };
    info!(activities = registry.len(), "registry loaded");
    let store = RosterStore::new(registry);

    // 3. App
    let app = web::router(store, &config.static_dir);

    // 4. Serve (with fallback port)
    let addr: SocketAddr = config
        .socket_addr(config.port)
        .expect("Could not parse HOST/PORT");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback: SocketAddr = config
                .socket_addr(config.port.wrapping_add(1))
                .expect("Could not parse fallback address");
            warn!("Could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("Could not bind fallback port")
        }
    };

    let bound_addr = listener
        .local_addr()
        .expect("Listener has no local address");
    info!(build_id = BUILD_ID, "Server running on http://{}", bound_addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
