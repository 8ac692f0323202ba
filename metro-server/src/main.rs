use std::net::SocketAddr;
use std::path::Path;

use tracing_subscriber::EnvFilter;

use metro_server::network::{NetworkCatalog, demo_network};
use metro_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Built-in demo network, plus any networks found on disk
    let mut catalog = NetworkCatalog::new();
    catalog.insert(demo_network());

    if let Ok(dir) = std::env::var("METRO_NETWORK_DIR") {
        match catalog.load_dir(Path::new(&dir)) {
            Ok(count) => tracing::info!(dir = %dir, count, "loaded network files"),
            Err(e) => {
                tracing::error!(dir = %dir, error = %e, "failed to load network files");
                std::process::exit(1);
            }
        }
    }
    tracing::info!(cities = ?catalog.cities(), "network catalog ready");

    let state = AppState::new(catalog);
    let app = create_router(state);

    let addr: SocketAddr = std::env::var("METRO_ADDR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

    tracing::info!(%addr, "metro route planner listening");
    println!("Metro Route Planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health      - Health check");
    println!("  GET  /cities      - List loaded cities");
    println!("  GET  /stations    - List a city's stations (?city=)");
    println!("  POST /route/plan  - Plan a route");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app).await.expect("server error");
}
