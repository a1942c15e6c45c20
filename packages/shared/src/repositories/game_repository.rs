use crate::models::game::{GameStatus, GameSummary};
use async_trait::async_trait;
use tracing::debug;

#[cfg(any(test, feature = "mocks"))]
use mockall::automock;

/// Source of the games shown in the lobby listing.
#[cfg_attr(any(test, feature = "mocks"), automock)]
#[async_trait]
pub trait GameRepository: Send + Sync {
    async fn list_games(&self) -> Vec<GameSummary>;
}

/// In-memory placeholder data until games are backed by real storage.
#[derive(Debug, Clone, Default)]
pub struct StaticGameRepository;

impl StaticGameRepository {
    pub fn new() -> Self {
        StaticGameRepository
    }
}

#[async_trait]
impl GameRepository for StaticGameRepository {
    async fn list_games(&self) -> Vec<GameSummary> {
        let games = vec![
            GameSummary::new("Game 1", 5, GameStatus::Countdown),
            GameSummary::new("John's Game", 3, GameStatus::Waiting),
            GameSummary::new("Unnamed Game", 6, GameStatus::Ended),
        ];
        debug!("Loaded {} static games", games.len());
        games
    }
}
