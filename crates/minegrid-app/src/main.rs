//! App service entrypoint.

use minegrid_app::{create_router, AppState};
use minegrid_core::{FileSessionStore, HttpAuthClient, MachineFingerprint, RouteGuard};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let backend_url =
        std::env::var("BACKEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse()
        .unwrap_or(3001);
    let session_file = std::env::var("MINEGRID_SESSION_FILE")
        .unwrap_or_else(|_| ".minegrid-session.json".to_string());

    let store = Arc::new(FileSessionStore::open(&session_file));
    let backend = Arc::new(HttpAuthClient::new(backend_url.clone()));
    let fingerprint = MachineFingerprint::detect();
    let guard = RouteGuard::new(store, backend, &fingerprint);

    info!("Backend URL: {}", backend_url);
    info!("Session file: {}", session_file);
    info!("Resuming session: {}", guard.has_token());

    let state = AppState::new(guard);
    let app = create_router(state);

    let listener = TcpListener::bind(format!("0.0.0.0:{}", port)).await.unwrap();
    info!("App service listening on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await.unwrap();
}
