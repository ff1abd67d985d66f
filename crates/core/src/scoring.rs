//! Scoring module - row-clear points and level progression
//!
//! Multi-row clears pay super-linearly: one settlement clearing four rows is
//! worth eight single clears.

use crate::types::ROWS_PER_LEVEL;

/// Points by rows cleared in one settlement (index = rows).
pub const SCORE_TABLE: [u32; 5] = [0, 5, 10, 25, 40];

/// Points for clearing `cleared_rows` rows at once.
/// Anything outside 1..=4 scores nothing.
pub fn calculate_score(cleared_rows: usize) -> u32 {
    SCORE_TABLE.get(cleared_rows).copied().unwrap_or(0)
}

/// Stored level for a running total of cleared rows (starts at 1).
pub fn calculate_level(total_cleared_rows: u32) -> u32 {
    total_cleared_rows / ROWS_PER_LEVEL + 1
}
