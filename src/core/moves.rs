//! Board coordinates used as moves.
//!
//! A move names the `(row, col)` cell the side to move will occupy.
//! `Move::NONE` is the `(-1, -1)` sentinel returned when no move exists.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered list of legal moves.
///
/// Enumeration order matters: searches break ties in favour of the
/// first-listed move. Eight inline slots cover every knight-move position.
pub type MoveList = SmallVec<[Move; 8]>;

/// A board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    /// Sentinel value representing "no move available".
    pub const NONE: Move = Move { row: -1, col: -1 };

    /// Create a new move.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.row == -1 && self.col == -1
    }

    /// Offset this coordinate by `(dr, dc)`.
    #[inline]
    #[must_use]
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl From<(i32, i32)> for Move {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "Move(NONE)")
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}
