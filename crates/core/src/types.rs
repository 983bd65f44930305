use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    TurnLeft,
    TurnRight,
    Forward,
    Fire,
}

impl Action {
    /// Single-character wire code expected by the game server.
    pub fn code(self) -> char {
        match self {
            Self::TurnLeft => 'L',
            Self::TurnRight => 'R',
            Self::Forward => 'F',
            Self::Fire => 'T',
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "W")]
    West,
}

impl Direction {
    /// Unit step in grid coordinates. The origin is the top-left corner, so
    /// north decrements y and west decrements x.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::East | Self::West)
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Self::North | Self::South)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn step(self, facing: Direction) -> Self {
        self.step_by(facing, 1)
    }

    pub fn step_by(self, facing: Direction, distance: i32) -> Self {
        let (dx, dy) = facing.delta();
        Self { x: self.x + dx * distance, y: self.y + dy * distance }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    Left,
    Right,
}

impl Rotation {
    pub fn action(self) -> Action {
        match self {
            Self::Left => Action::TurnLeft,
            Self::Right => Action::TurnRight,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanMode {
    /// Run the threat scan every turn.
    Always,
    /// Only scan for threats after taking a hit; trades perfect defense for
    /// less evasive thrashing.
    WhenHit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tactics {
    /// Number of outermost rows/columns in which the bot refuses to keep
    /// advancing toward the edge. 0 disables the early turn-away.
    pub edge_margin: i32,
    /// Which way to turn whenever a rotation is called for.
    pub rotate: Rotation,
    pub scan_mode: ScanMode,
    /// Evasive forward moves require an in-bounds, unoccupied destination.
    pub safe_evade: bool,
}

impl Default for Tactics {
    fn default() -> Self {
        Self {
            edge_margin: 1,
            rotate: Rotation::Left,
            scan_mode: ScanMode::Always,
            safe_evade: true,
        }
    }
}

/// Two-turn sliding window of issued movement actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveHistory {
    last: Action,
    prior: Action,
}

impl MoveHistory {
    pub fn record(&mut self, action: Action) {
        self.prior = self.last;
        self.last = action;
    }

    pub fn last(&self) -> Action {
        self.last
    }

    pub fn prior(&self) -> Action {
        self.prior
    }
}

impl Default for MoveHistory {
    // Fixed seed: the first uncontested decision is a plain advance.
    fn default() -> Self {
        Self { last: Action::TurnLeft, prior: Action::Forward }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionReason {
    /// A combatant has us in its firing line; we are moving off it.
    Evade { threat: Cell },
    /// A combatant sits in our firing lane.
    Fire,
    /// Facing an arena edge inside the margin.
    EdgeAvoid,
    /// Alternating turn after a forward move.
    Sweep,
    /// Nothing better to do than advance.
    Advance,
    /// The snapshot violated the arena contract; a random safe move was
    /// substituted so the turn is not forfeited.
    Fallback,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    pub action: Action,
    pub reason: DecisionReason,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecideError {
    #[error("arena dims {width}x{height} are outside the playable range")]
    BadDimensions { width: i32, height: i32 },
    #[error("combatant `{id}` at ({x}, {y}) lies outside the {width}x{height} arena")]
    OutOfBounds { id: String, x: i32, y: i32, width: i32, height: i32 },
    #[error("self href `{href}` is missing from the arena state")]
    SelfMissing { href: String },
}
