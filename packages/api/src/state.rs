use std::sync::Arc;

use crate::services::game_server::GameServer;

#[derive(Clone)]
pub struct AppState {
    pub game_server: Arc<GameServer>,
}

impl AppState {
    pub fn new(game_server: Arc<GameServer>) -> Self {
        AppState { game_server }
    }
}
