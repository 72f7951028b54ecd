use std::collections::HashMap;

use engine::{Game, GameError, GameId, GameStatus};

use crate::repository::{GameRepository, MoveRecord, MoveRepository};

/// Map-backed game store. Reference adapter for tests and embedded use;
/// a real deployment puts a database behind the same trait.
#[derive(Default)]
pub struct InMemoryGameRepository {
    games: HashMap<GameId, Game>,
    next_id: i64,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameRepository for InMemoryGameRepository {
    fn create(&mut self, mut game: Game) -> Result<Game, GameError> {
        self.next_id += 1;
        game.id = GameId::new(self.next_id);
        self.games.insert(game.id, game.clone());
        Ok(game)
    }

    fn get(&self, id: GameId) -> Result<Game, GameError> {
        self.games.get(&id).cloned().ok_or(GameError::NotFound)
    }

    fn update(&mut self, game: &Game) -> Result<(), GameError> {
        if !self.games.contains_key(&game.id) {
            return Err(GameError::NotFound);
        }
        self.games.insert(game.id, game.clone());
        Ok(())
    }

    fn delete(&mut self, id: GameId) -> Result<(), GameError> {
        self.games.remove(&id).map(|_| ()).ok_or(GameError::NotFound)
    }

    fn list(&self, limit: usize, offset: usize) -> Result<Vec<Game>, GameError> {
        let mut games: Vec<Game> = self.games.values().cloned().collect();
        games.sort_by_key(|game| game.id);
        Ok(games.into_iter().skip(offset).take(limit).collect())
    }

    fn list_by_status(&self, status: GameStatus) -> Result<Vec<Game>, GameError> {
        let mut games: Vec<Game> = self
            .games
            .values()
            .filter(|game| game.status == status)
            .cloned()
            .collect();
        games.sort_by_key(|game| game.id);
        Ok(games)
    }
}

/// Append-only move log over a plain vector.
#[derive(Default)]
pub struct InMemoryMoveRepository {
    records: Vec<MoveRecord>,
}

impl InMemoryMoveRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MoveRepository for InMemoryMoveRepository {
    fn append(&mut self, record: MoveRecord) -> Result<(), GameError> {
        self.records.push(record);
        Ok(())
    }

    fn list_for_game(&self, game_id: GameId) -> Result<Vec<MoveRecord>, GameError> {
        let mut records: Vec<MoveRecord> = self
            .records
            .iter()
            .filter(|record| record.game_id == game_id)
            .cloned()
            .collect();
        // Stable sort keeps insertion order within a turn.
        records.sort_by_key(|record| record.turn_number);
        Ok(records)
    }

    fn delete_for_game(&mut self, game_id: GameId) -> Result<(), GameError> {
        self.records.retain(|record| record.game_id != game_id);
        Ok(())
    }
}
