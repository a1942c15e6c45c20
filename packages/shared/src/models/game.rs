use serde::{Deserialize, Serialize};

/// Lobby state of a game as shown to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Waiting,
    Countdown,
    Question,
    Ended,
}

/// One entry of the game listing: display name, number of questions and
/// current lobby state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub name: String,
    pub question_count: u32,
    pub status: GameStatus,
}

impl GameSummary {
    pub fn new(name: &str, question_count: u32, status: GameStatus) -> Self {
        GameSummary {
            name: name.to_string(),
            question_count,
            status,
        }
    }
}
