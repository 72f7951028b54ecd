use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::board::{Board, PARTY_A_START, PARTY_B_START};
use crate::error::GameError;
use crate::identifiers::GameId;
use crate::party::{Party, PartySlot};
use crate::resolver::{self, Resolution};
use crate::types::{Action, GameStatus, Outcome, Position};

/// Mutable board-and-turn state of one game. Owns the grid exclusively;
/// the cached positions are only ever updated together with the cells
/// inside a single resolver transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub party_a_position: Position,
    pub party_b_position: Position,
    pub current_turn: u32,
    pub turn_party: Party,
}

impl GameState {
    pub fn new() -> Self {
        let mut board = Board::new();
        board.place_occupant(Party::A, PARTY_A_START);
        board.place_occupant(Party::B, PARTY_B_START);

        Self {
            board,
            party_a_position: PARTY_A_START,
            party_b_position: PARTY_B_START,
            current_turn: 1,
            turn_party: Party::A,
        }
    }

    pub fn position_of(&self, party: Party) -> Position {
        match party {
            Party::A => self.party_a_position,
            Party::B => self.party_b_position,
        }
    }

    pub(crate) fn set_position(&mut self, party: Party, pos: Position) {
        match party {
            Party::A => self.party_a_position = pos,
            Party::B => self.party_b_position = pos,
        }
    }

    /// The sole place turn parity changes.
    fn advance_turn(&mut self) {
        self.current_turn += 1;
        self.turn_party = self.turn_party.opponent();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// A full game: the two party slots, lifecycle status and outcome around
/// the mutable state.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    pub id: GameId,
    pub party_a: PartySlot,
    pub party_b: PartySlot,
    pub status: GameStatus,
    pub state: GameState,
    pub outcome: Option<Outcome>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    pub fn new(party_a: PartySlot, party_b: PartySlot) -> Self {
        let now = Utc::now();
        Self {
            id: GameId::default(),
            party_a,
            party_b,
            status: GameStatus::Waiting,
            state: GameState::new(),
            outcome: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn slot(&self, party: Party) -> &PartySlot {
        match party {
            Party::A => &self.party_a,
            Party::B => &self.party_b,
        }
    }

    pub fn start(&mut self) -> Result<(), GameError> {
        if self.status != GameStatus::Waiting {
            return Err(GameError::State(format!(
                "game is not waiting ({})",
                self.status.as_str()
            )));
        }
        self.status = GameStatus::Playing;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Resolves one action for `party` and advances the game: an attack
    /// hit finishes it with the actor's victory, a collision finishes it
    /// as a draw, anything else consumes the turn.
    pub fn submit_action(&mut self, party: Party, action: &Action) -> Result<Resolution, GameError> {
        if self.status != GameStatus::Playing {
            return Err(GameError::State(format!(
                "game is not playing ({})",
                self.status.as_str()
            )));
        }

        let resolution = resolver::resolve(&mut self.state, party, action)?;

        if resolution == Resolution::OpponentHit {
            self.finish(party.victory());
        } else if self.state.party_a_position == self.state.party_b_position {
            self.finish(Outcome::Draw);
        } else {
            self.state.advance_turn();
            self.updated_at = Utc::now();
        }

        Ok(resolution)
    }

    fn finish(&mut self, outcome: Outcome) {
        self.status = GameStatus::Finished;
        self.outcome = Some(outcome);
        self.updated_at = Utc::now();
    }
}
