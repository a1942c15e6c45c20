use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use shared::models::game::GameSummary;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/games", get(list_games))
}

#[tracing::instrument(skip(state))]
async fn list_games(State(state): State<AppState>) -> (StatusCode, Json<Vec<GameSummary>>) {
    state.game_server.games().await
}
