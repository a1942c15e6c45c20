use std::sync::Arc;

use axum::{http::StatusCode, Json};
use shared::models::game::GameSummary;
use shared::repositories::game_repository::GameRepository;
use tracing::debug;

/// Serves the game listing for the lobby.
pub struct GameServer {
    repository: Arc<dyn GameRepository + Send + Sync>,
}

impl GameServer {
    pub fn new(repository: Arc<dyn GameRepository + Send + Sync>) -> Self {
        GameServer { repository }
    }

    /// Lists every known game in repository order. Always succeeds.
    pub async fn games(&self) -> (StatusCode, Json<Vec<GameSummary>>) {
        let games = self.repository.list_games().await;
        debug!("Listing {} games", games.len());
        (StatusCode::OK, Json(games))
    }
}
