pub mod config;
pub mod game_service;
pub mod memory;
pub mod repository;

pub use config::ServiceConfig;
pub use game_service::GameService;
pub use memory::{InMemoryGameRepository, InMemoryMoveRepository};
pub use repository::{GameRepository, MoveRecord, MoveRepository};
