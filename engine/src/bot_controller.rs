use crate::board::Board;
use crate::game_state::GameState;
use crate::party::{ComLevel, Party};
use crate::session_rng::SessionRng;
use crate::types::{Action, Direction, Position};
use crate::validate::is_valid_move;

/// Everything a COM decision needs, cloned out of the live state so the
/// tier functions stay pure.
pub struct BotInput {
    pub board: Board,
    pub own_position: Position,
    pub opponent_position: Position,
}

impl BotInput {
    pub fn from_game_state(state: &GameState, party: Party) -> Self {
        Self {
            board: state.board.clone(),
            own_position: state.position_of(party),
            opponent_position: state.position_of(party.opponent()),
        }
    }
}

/// Difficulty tiers form a strict fallback cascade: each tier either
/// produces a decisive action or defers to the tier below, and tier one
/// always terminates. Tiers two through four are intentionally shallow;
/// the observable contract is the tie-break order, not play strength.
pub fn calculate_action(level: ComLevel, input: &BotInput, rng: &mut SessionRng) -> Action {
    match level {
        ComLevel::One => level_one(input, rng),
        ComLevel::Two => level_two(input).unwrap_or_else(|| level_one(input, rng)),
        ComLevel::Three => level_three(input)
            .or_else(|| level_two(input))
            .unwrap_or_else(|| level_one(input, rng)),
        ComLevel::Four => level_four(input)
            .or_else(|| level_three(input))
            .or_else(|| level_two(input))
            .unwrap_or_else(|| level_one(input, rng)),
    }
}

/// Every action the acting side could attempt right now: a move per
/// occupiable direction, an attack per direction unconditionally, and
/// defend.
fn enumerate_actions(input: &BotInput) -> Vec<Action> {
    let mut actions = Vec::new();
    for direction in Direction::ALL {
        if is_valid_move(&input.board, input.own_position, direction) {
            actions.push(Action::movement(direction));
        }
        actions.push(Action::attack(direction));
    }
    actions.push(Action::defend());
    actions
}

fn level_one(input: &BotInput, rng: &mut SessionRng) -> Action {
    let actions = enumerate_actions(input);
    rng.pick(&actions).copied().unwrap_or_else(Action::defend)
}

fn level_two(input: &BotInput) -> Option<Action> {
    attack_towards(input).or_else(|| move_towards(input))
}

fn level_three(input: &BotInput) -> Option<Action> {
    if in_danger(input)
        && let Some(action) = evasive_move(input)
    {
        return Some(action);
    }
    strategic_attack(input).or_else(|| positioning_move(input))
}

fn level_four(input: &BotInput) -> Option<Action> {
    if immediate_threat(input)
        && let Some(action) = evasive_move(input)
    {
        return Some(action);
    }
    winning_attack(input).or_else(|| strategic_position(input))
}

/// First direction in canonical order whose sign points toward the
/// opponent. No line-of-sight involved.
fn attack_towards(input: &BotInput) -> Option<Action> {
    Direction::ALL
        .into_iter()
        .find(|direction| direction.points_towards(input.own_position, input.opponent_position))
        .map(Action::attack)
}

/// Occupiable step minimizing squared distance to the opponent. Strict
/// comparison, so the earlier direction wins ties.
fn move_towards(input: &BotInput) -> Option<Action> {
    let mut best: Option<(Direction, i64)> = None;

    for direction in Direction::ALL {
        let Some(destination) = input.own_position.step(direction) else {
            continue;
        };
        if !input.board.is_occupiable(destination) {
            continue;
        }
        let distance = destination.squared_distance(input.opponent_position);
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((direction, distance));
        }
    }

    best.map(|(direction, _)| Action::movement(direction))
}

/// Whether any of the opponent's four attack rays reaches our cell from
/// where they stand.
fn in_danger(input: &BotInput) -> bool {
    Direction::ALL.into_iter().any(|direction| {
        input
            .board
            .attack_path(input.opponent_position, direction)
            .contains(&input.own_position)
    })
}

/// First occupiable direction in canonical order.
fn evasive_move(input: &BotInput) -> Option<Action> {
    Direction::ALL
        .into_iter()
        .find(|&direction| is_valid_move(&input.board, input.own_position, direction))
        .map(Action::movement)
}

// The higher tiers alias the shared heuristics. Placeholders for richer
// tactics; the cascade order is the contract.

fn strategic_attack(input: &BotInput) -> Option<Action> {
    attack_towards(input)
}

fn positioning_move(input: &BotInput) -> Option<Action> {
    move_towards(input)
}

fn immediate_threat(input: &BotInput) -> bool {
    in_danger(input)
}

fn winning_attack(input: &BotInput) -> Option<Action> {
    attack_towards(input)
}

fn strategic_position(input: &BotInput) -> Option<Action> {
    move_towards(input)
}
