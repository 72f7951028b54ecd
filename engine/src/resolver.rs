use crate::error::GameError;
use crate::game_state::GameState;
use crate::party::Party;
use crate::types::{Action, ActionKind, Cell, Direction, Position};

/// What a single resolved action did to the state. Exactly one of
/// these per call: a position update, a wall destruction, a terminal
/// hit, or no board change at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Moved { to: Position },
    WallDestroyed { at: Position },
    AttackMissed,
    OpponentHit,
    Defended,
}

/// Applies one action for `party` against the state. Turn ownership is
/// checked first, then action validity. The caller owns status checks,
/// the move log and turn advancement.
pub fn resolve(
    state: &mut GameState,
    party: Party,
    action: &Action,
) -> Result<Resolution, GameError> {
    if state.turn_party != party {
        return Err(GameError::Turn);
    }

    match action.kind {
        ActionKind::Move => resolve_move(state, party, required_direction(action)?),
        ActionKind::Attack => Ok(resolve_attack(state, party, required_direction(action)?)),
        ActionKind::Defend => Ok(Resolution::Defended),
    }
}

fn required_direction(action: &Action) -> Result<Direction, GameError> {
    action
        .direction
        .ok_or_else(|| GameError::Move("missing direction".to_string()))
}

fn resolve_move(
    state: &mut GameState,
    party: Party,
    direction: Direction,
) -> Result<Resolution, GameError> {
    let from = state.position_of(party);
    let to = from
        .step(direction)
        .ok_or_else(|| GameError::Move("destination out of bounds".to_string()))?;

    match state.board.get(to) {
        None => Err(GameError::Move("destination out of bounds".to_string())),
        Some(Cell::Empty) => {
            state.board.move_occupant(party, from, to);
            state.set_position(party, to);
            Ok(Resolution::Moved { to })
        }
        Some(_) => Err(GameError::Move("destination occupied".to_string())),
    }
}

/// Ray-cast: the first non-empty cell along the direction decides the
/// outcome. Hitting the opponent ends the game at the caller; hitting a
/// wall destroys that wall only; running off the board is a miss that
/// still consumes the turn. Attacks never fail validation.
fn resolve_attack(state: &mut GameState, party: Party, direction: Direction) -> Resolution {
    let origin = state.position_of(party);
    let opponent_position = state.position_of(party.opponent());

    for pos in state.board.attack_path(origin, direction) {
        if pos == opponent_position {
            return Resolution::OpponentHit;
        }
        if state.board.get(pos) == Some(Cell::Wall) {
            state.board.destroy_wall(pos);
            return Resolution::WallDestroyed { at: pos };
        }
    }

    Resolution::AttackMissed
}
