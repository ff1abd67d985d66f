//! Tick-rate policy for drivers.
//!
//! The speed level here divides cleared rows by 1, while the stored
//! `GameState::level` divides by 2. Both formulas are kept as they are; the
//! displayed level therefore lags the speed-up.

use std::time::Duration;

use crate::types::{BASE_TICK_MS, MIN_TICK_MS, ROWS_PER_SPEED_LEVEL, TICK_STEP_MS};

/// Level used only to pick the tick interval.
pub fn speed_level(total_cleared_rows: u32) -> u32 {
    (total_cleared_rows / ROWS_PER_SPEED_LEVEL).saturating_add(1)
}

/// Milliseconds between tick commands: `max(950 - level * 30, 100)`.
pub fn tick_interval_ms(total_cleared_rows: u32) -> u32 {
    BASE_TICK_MS
        .saturating_sub(speed_level(total_cleared_rows).saturating_mul(TICK_STEP_MS))
        .max(MIN_TICK_MS)
}

pub fn tick_interval(total_cleared_rows: u32) -> Duration {
    Duration::from_millis(tick_interval_ms(total_cleared_rows) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_level_counts_every_row() {
        assert_eq!(speed_level(0), 1);
        assert_eq!(speed_level(1), 2);
        assert_eq!(speed_level(9), 10);
    }

    #[test]
    fn test_tick_interval() {
        assert_eq!(tick_interval_ms(0), 920);
        assert_eq!(tick_interval_ms(1), 890);
        assert_eq!(tick_interval_ms(10), 620);
        assert_eq!(tick_interval_ms(27), 110);
        assert_eq!(tick_interval_ms(28), 100);
        assert_eq!(tick_interval_ms(u32::MAX - 1), 100);
        assert_eq!(tick_interval(0), Duration::from_millis(920));
    }
}
