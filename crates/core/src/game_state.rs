//! Game state module - the aggregate snapshot threaded through every transition
//!
//! A `GameState` is a value: transitions build a new one from the old one and
//! never edit a state another holder can see. Fields are public for reading;
//! drivers and renderers treat them as read-only.

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::ShapeSource;
use crate::scoring::calculate_level;
use crate::snapshot::GameSnapshot;

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    /// Terminal once set; only a restart leaves it.
    pub game_end: bool,
    /// The piece currently falling.
    pub active: Piece,
    /// The queued piece, promoted when `active` lands.
    pub next: Piece,
    pub score: u32,
    /// Never below `score`.
    pub high_score: u32,
    /// Always `total_cleared_rows / 2 + 1`.
    pub level: u32,
    pub total_cleared_rows: u32,
}

impl GameState {
    /// Fresh session with a zero high score.
    pub fn new(source: &mut impl ShapeSource) -> Self {
        Self::with_high_score(source, 0)
    }

    /// Fresh session carrying over `high_score`.
    ///
    /// Draws the active piece first, then the queued one.
    pub fn with_high_score(source: &mut impl ShapeSource, high_score: u32) -> Self {
        let active = Piece::spawn(source.next_shape());
        let next = Piece::spawn(source.next_shape());

        Self {
            board: Board::new(),
            game_end: false,
            active,
            next,
            score: 0,
            high_score,
            level: calculate_level(0),
            total_cleared_rows: 0,
        }
    }

    /// Move and Rotate only act while this holds.
    pub fn playable(&self) -> bool {
        !self.game_end
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}
