//! Board trait for game implementations.
//!
//! Games implement `Board` to define:
//! - Which moves are legal for each player
//! - How a move produces the next position
//! - Whose turn it is

use crate::core::{Move, MoveList, PlayerId};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
        }
    }
}

/// Immutable two-player game position.
///
/// The search engine calls these methods but never interprets
/// game-specific concepts directly.
///
/// ## Implementation Notes
///
/// - `legal_moves_for`: return an empty list if the player cannot move.
///   Order is significant, searches break ties by it.
/// - `forecast_move`: must be pure. The receiver is never modified; the
///   returned board has the move applied and the turn passed.
/// - A player with no legal moves on their turn has lost.
pub trait Board: Clone {
    /// The player whose turn it is.
    fn active_player(&self) -> PlayerId;

    /// The player waiting for their turn.
    fn inactive_player(&self) -> PlayerId {
        self.active_player().opponent()
    }

    /// The opponent of `player`.
    fn opponent(&self, player: PlayerId) -> PlayerId {
        player.opponent()
    }

    /// Legal moves for `player` in enumeration order.
    fn legal_moves_for(&self, player: PlayerId) -> MoveList;

    /// Return the position reached after the active player plays `mv`.
    fn forecast_move(&self, mv: Move) -> Self;

    // === Convenience Methods ===

    /// Legal moves for the active player.
    fn legal_moves(&self) -> MoveList {
        self.legal_moves_for(self.active_player())
    }

    /// True if `player` has lost: it is their turn and they cannot move.
    fn is_loser(&self, player: PlayerId) -> bool {
        player == self.active_player() && self.legal_moves_for(player).is_empty()
    }

    /// True if `player` has won: it is the opponent's turn and the opponent cannot move.
    fn is_winner(&self, player: PlayerId) -> bool {
        let opponent = self.opponent(player);
        opponent == self.active_player() && self.legal_moves_for(opponent).is_empty()
    }

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the active player has no move, `None` otherwise.
    fn outcome(&self) -> Option<GameResult> {
        if self.legal_moves().is_empty() {
            Some(GameResult::Winner(self.inactive_player()))
        } else {
            None
        }
    }
}
