use log::{error, info, warn};

use bidcast::config::ServerConfig;
use bidcast::core::hub::create_hub;
use bidcast::handlers::websocket::routes;

#[tokio::main]
async fn main() {
    // Load .env before the logger so RUST_LOG from the file takes effect
    let dotenv_result = dotenvy::dotenv();

    env_logger::init();

    match dotenv_result {
        Ok(_) => info!("Environment variables loaded from .env file"),
        Err(e) => warn!("No .env file loaded: {}", e),
    };

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!("Configuration: host={}, port={}", config.host, config.port);

    let addr = match config.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let hub = create_hub();

    info!("Starting bidcast server on {}", addr);

    warp::serve(routes(hub)).run(addr).await;
}
