//! The four blank moves.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Direction the blank moves.
///
/// Declaration order matches [`Action::EXPANSION_ORDER`], which fixes the
/// order successors are enumerated in and therefore the BFS/DFS traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Up,
    Down,
    Right,
    Left,
}

impl Action {
    /// Successor enumeration order. Changing it changes every search trace.
    pub const EXPANSION_ORDER: [Self; 4] = [Self::Up, Self::Down, Self::Right, Self::Left];

    /// Upper-case name used in traces and reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Right => "RIGHT",
            Self::Left => "LEFT",
        }
    }

    /// `(row, col)` displacement of the blank.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Right => (0, 1),
            Self::Left => (0, -1),
        }
    }

    #[cfg(test)]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised action name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action {0:?}")]
pub struct ParseActionError(pub String);

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "UP" => Ok(Self::Up),
            "DOWN" => Ok(Self::Down),
            "RIGHT" => Ok(Self::Right),
            "LEFT" => Ok(Self::Left),
            _ => Err(ParseActionError(s.to_string())),
        }
    }
}
