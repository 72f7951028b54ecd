pub mod board;
pub mod bot_controller;
pub mod error;
pub mod game_state;
pub mod identifiers;
pub mod logger;
pub mod party;
pub mod resolver;
pub mod session_rng;
pub mod snapshot;
pub mod types;
pub mod validate;

pub use board::{Board, BOARD_SIZE};
pub use error::GameError;
pub use game_state::{Game, GameState};
pub use identifiers::GameId;
pub use party::{ComLevel, Party, PartyKind, PartySlot};
pub use resolver::Resolution;
pub use session_rng::SessionRng;
pub use types::{Action, ActionKind, Cell, Direction, GameStatus, Outcome, Position};
