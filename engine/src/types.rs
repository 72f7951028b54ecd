use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// One cell along `direction`. None when the step would cross the
    /// top or left edge; bottom/right overshoot is caught by the board
    /// bounds check instead.
    pub fn step(self, direction: Direction) -> Option<Position> {
        match direction {
            Direction::Up => (self.y > 0).then(|| Position::new(self.x, self.y - 1)),
            Direction::Down => Some(Position::new(self.x, self.y + 1)),
            Direction::Left => (self.x > 0).then(|| Position::new(self.x - 1, self.y)),
            Direction::Right => Some(Position::new(self.x + 1, self.y)),
        }
    }

    pub fn squared_distance(self, other: Position) -> i64 {
        let dx = self.x as i64 - other.x as i64;
        let dy = self.y as i64 - other.y as i64;
        dx * dx + dy * dy
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Canonical enumeration order. The COM tie-breaks depend on it, so
    /// it must stay up, down, left, right.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Whether stepping this way reduces the gap to `target` on the
    /// matching axis. Compares coordinate signs only, not line of sight.
    pub fn points_towards(self, from: Position, target: Position) -> bool {
        match self {
            Direction::Up => target.y < from.y,
            Direction::Down => target.y > from.y,
            Direction::Left => target.x < from.x,
            Direction::Right => target.x > from.x,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    Empty,
    Wall,
    PartyA,
    PartyB,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Waiting,
    Playing,
    Finished,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Waiting => "waiting",
            GameStatus::Playing => "playing",
            GameStatus::Finished => "finished",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    PartyAWins,
    PartyBWins,
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Move,
    Attack,
    Defend,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Move => "move",
            ActionKind::Attack => "attack",
            ActionKind::Defend => "defend",
        }
    }
}

/// One submitted action. `direction` is required for move and attack and
/// ignored for defend. `target` is accepted in the shape but unused by
/// resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub kind: ActionKind,
    pub direction: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Position>,
}

impl Action {
    pub fn movement(direction: Direction) -> Self {
        Self {
            kind: ActionKind::Move,
            direction: Some(direction),
            target: None,
        }
    }

    pub fn attack(direction: Direction) -> Self {
        Self {
            kind: ActionKind::Attack,
            direction: Some(direction),
            target: None,
        }
    }

    pub fn defend() -> Self {
        Self {
            kind: ActionKind::Defend,
            direction: None,
            target: None,
        }
    }
}
