use crate::board::Board;
use crate::types::{Direction, Position};

/// A move is valid when the one-step destination exists and is empty at
/// call time. The COM action enumeration filters candidate moves with
/// this; the resolver re-checks inline to pick the failure reason.
pub fn is_valid_move(board: &Board, from: Position, direction: Direction) -> bool {
    match from.step(direction) {
        Some(destination) => board.is_occupiable(destination),
        None => false,
    }
}
