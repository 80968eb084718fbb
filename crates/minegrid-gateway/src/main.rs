//! Gateway service entrypoint.

use minegrid_gateway::{create_router, GatewayState};
use tokio::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use uuid::Uuid;

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .unwrap_or(3000);

    // Codes come from the environment; without any, mint one demo code so
    // a local run is usable out of the box.
    let codes: Vec<String> = std::env::var("MINEGRID_CODES")
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    let state = if codes.is_empty() {
        let demo_code = Uuid::new_v4().to_string();
        info!("no MINEGRID_CODES configured, demo code: {}", demo_code);
        GatewayState::with_codes([demo_code])
    } else {
        info!("loaded {} one-time codes", codes.len());
        GatewayState::with_codes(codes)
    };

    let app = create_router(state);

    let listener = TcpListener::bind(format!("0.0.0.0:{}", port)).await.unwrap();
    info!("Gateway service listening on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await.unwrap();
}
