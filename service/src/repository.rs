use chrono::{DateTime, Utc};

use engine::{ActionKind, Game, GameError, GameId, GameStatus, Party};

/// Append-only log entry for one resolved action. Never mutated or
/// deleted on its own; removal happens only as a whole-game cascade.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub game_id: GameId,
    pub turn_number: u32,
    pub party: Party,
    pub kind: ActionKind,
    pub action: String,
    pub recorded_at: DateTime<Utc>,
}

/// Storage port for games. Implemented by the embedding application;
/// the service only ever talks to these methods. All calls are
/// synchronous, the caller serializes access per game id.
pub trait GameRepository {
    /// Stores a new game and assigns its id.
    fn create(&mut self, game: Game) -> Result<Game, GameError>;

    fn get(&self, id: GameId) -> Result<Game, GameError>;

    fn update(&mut self, game: &Game) -> Result<(), GameError>;

    fn delete(&mut self, id: GameId) -> Result<(), GameError>;

    /// Games in creation order, paginated.
    fn list(&self, limit: usize, offset: usize) -> Result<Vec<Game>, GameError>;

    fn list_by_status(&self, status: GameStatus) -> Result<Vec<Game>, GameError>;
}

/// Storage port for the move log.
pub trait MoveRepository {
    fn append(&mut self, record: MoveRecord) -> Result<(), GameError>;

    /// Records for one game, turn ascending, then insertion order.
    fn list_for_game(&self, game_id: GameId) -> Result<Vec<MoveRecord>, GameError>;

    fn delete_for_game(&mut self, game_id: GameId) -> Result<(), GameError>;
}
