//! Knight-move Isolation board.

use im::Vector;

use crate::core::{GameRng, Move, MoveList, PlayerId, PlayerMap};
use crate::rules::Board;

/// Knight-move offsets in enumeration order.
const KNIGHT_DIRECTIONS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Immutable Isolation position.
///
/// Cells are stored in a persistent vector, so `forecast_move` shares all
/// untouched cells with its parent position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IsolationBoard {
    width: i32,
    height: i32,
    /// Row-major; `true` once a player has stood on the cell.
    blocked: Vector<bool>,
    locations: PlayerMap<Option<Move>>,
    active: PlayerId,
    move_count: u32,
}

impl IsolationBoard {
    /// Create an empty board with the first player to move.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero, or if the cell count does not
    /// fit in an `i32`.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "Board dimensions must be positive");
        assert!(
            width
                .checked_mul(height)
                .is_some_and(|cells| cells <= i32::MAX as usize),
            "Board too large: {width}x{height}"
        );

        Self {
            width: width as i32,
            height: height as i32,
            blocked: std::iter::repeat(false).take(width * height).collect(),
            locations: PlayerMap::with_value(None),
            active: PlayerId::FIRST,
            move_count: 0,
        }
    }

    /// Play `plies` uniformly random legal moves from an empty board.
    ///
    /// Stops early if the side to move gets stuck. Same seed, same position.
    #[must_use]
    pub fn random_position(width: usize, height: usize, plies: usize, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let mut board = Self::new(width, height);

        for _ in 0..plies {
            let moves = board.legal_moves();
            match rng.choose(&moves) {
                Some(&mv) => board = board.forecast_move(mv),
                None => break,
            }
        }

        board
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width as usize
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Number of moves played so far.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Where `player` stands, or `None` before their first move.
    #[must_use]
    pub fn location(&self, player: PlayerId) -> Option<Move> {
        self.locations[player]
    }

    /// True if `cell` is on the board and has never been occupied.
    #[must_use]
    pub fn is_open(&self, cell: Move) -> bool {
        self.index_of(cell)
            .and_then(|i| self.blocked.get(i))
            .is_some_and(|blocked| !blocked)
    }

    /// All open cells in row-major order.
    #[must_use]
    pub fn open_cells(&self) -> MoveList {
        (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| Move::new(row, col)))
            .filter(|&cell| self.is_open(cell))
            .collect()
    }

    /// Count of open cells.
    #[must_use]
    pub fn open_cell_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| !b).count()
    }

    fn index_of(&self, cell: Move) -> Option<usize> {
        let on_board = (0..self.height).contains(&cell.row) && (0..self.width).contains(&cell.col);
        on_board.then(|| (cell.row * self.width + cell.col) as usize)
    }
}

impl Board for IsolationBoard {
    fn active_player(&self) -> PlayerId {
        self.active
    }

    /// Before their first move a player may land on any open cell;
    /// afterwards they move like a chess knight onto open cells.
    fn legal_moves_for(&self, player: PlayerId) -> MoveList {
        match self.locations[player] {
            None => self.open_cells(),
            Some(from) => KNIGHT_DIRECTIONS
                .iter()
                .map(|&(dr, dc)| from.offset(dr, dc))
                .filter(|&to| self.is_open(to))
                .collect(),
        }
    }

    fn forecast_move(&self, mv: Move) -> Self {
        debug_assert!(self.is_open(mv), "forecast_move onto blocked cell {mv}");

        let mut next = self.clone();
        if let Some(i) = self.index_of(mv) {
            next.blocked = self.blocked.update(i, true);
        }
        next.locations[self.active] = Some(mv);
        next.active = self.active.opponent();
        next.move_count += 1;
        next
    }
}

impl std::fmt::Display for IsolationBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.height {
            write!(f, "|")?;
            for col in 0..self.width {
                let cell = Move::new(row, col);
                let mark = if self.locations[PlayerId::FIRST] == Some(cell) {
                    " 1 "
                } else if self.locations[PlayerId::SECOND] == Some(cell) {
                    " 2 "
                } else if self.is_open(cell) {
                    "   "
                } else {
                    " - "
                };
                write!(f, "{mark}|")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
