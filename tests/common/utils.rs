use std::env;
use std::sync::Arc;

use api::{create_app, server, services::game_server::GameServer, state::AppState};
use shared::repositories::game_repository::StaticGameRepository;
use tokio::net::TcpListener;

/// Target under test: `BASE_URL` when set, otherwise a fresh in-process server.
pub async fn base_url() -> anyhow::Result<String> {
    match env::var("BASE_URL") {
        Ok(url) => Ok(url.trim_end_matches('/').to_string()),
        Err(_) => spawn_local_server().await,
    }
}

/// Starts the API on an ephemeral port for the lifetime of the current runtime.
pub async fn spawn_local_server() -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let game_server = Arc::new(GameServer::new(Arc::new(StaticGameRepository::new())));
    let app = create_app(AppState::new(game_server));
    tokio::spawn(server::serve(listener, app, std::future::pending()));

    Ok(format!("http://{}", addr))
}
