//! Isolation-specific evaluation.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::eval::{terminal_score, Evaluator};
use crate::rules::Board;

use super::board::IsolationBoard;

/// Two-phase mobility heuristic for Isolation.
///
/// Opening: while many cells are open, chase the opponent hard and score
/// `own - opponent_weight_early * opp`.
///
/// Later: `own - opponent_weight * opp + lookahead_weight * avg`, where `avg`
/// is the mean mobility one ply ahead, counted positive when the scored
/// player is the one to move afterwards and negative otherwise.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CustomScore {
    /// Opening phase lasts while more than this many cells are open.
    pub aggressive_open_cells: usize,

    /// Opponent mobility weight during the opening.
    pub opponent_weight_early: f64,

    /// Opponent mobility weight after the opening.
    pub opponent_weight: f64,

    /// Weight of the one-ply lookahead average.
    pub lookahead_weight: f64,
}

impl Default for CustomScore {
    fn default() -> Self {
        Self {
            aggressive_open_cells: 43,
            opponent_weight_early: 4.0,
            opponent_weight: 0.2,
            lookahead_weight: 0.5,
        }
    }
}

impl CustomScore {
    fn lookahead(&self, board: &IsolationBoard, player: PlayerId) -> f64 {
        let moves = board.legal_moves();
        if moves.is_empty() {
            return 0.0;
        }

        let total: f64 = moves
            .iter()
            .map(|&mv| {
                let next = board.forecast_move(mv);
                let mobility = next.legal_moves().len() as f64;
                if next.active_player() == player {
                    mobility
                } else {
                    -mobility
                }
            })
            .sum();

        total / moves.len() as f64
    }
}

impl Evaluator<IsolationBoard> for CustomScore {
    fn score(&self, board: &IsolationBoard, player: PlayerId) -> f64 {
        if let Some(decided) = terminal_score(board, player) {
            return decided;
        }

        let own = board.legal_moves_for(player).len() as f64;
        let opp = board.legal_moves_for(board.opponent(player)).len() as f64;

        if board.open_cell_count() > self.aggressive_open_cells {
            own - self.opponent_weight_early * opp
        } else {
            own - self.opponent_weight * opp + self.lookahead_weight * self.lookahead(board, player)
        }
    }
}
