//! Scoring module - line-clear points and the difficulty ramp
//!
//! Each cleared row is worth a flat `LINE_CLEAR_POINTS`. The gravity
//! interval is recomputed from the absolute score, and only when the score
//! sits on an exact multiple of `DIFFICULTY_THRESHOLD`. A multi-row clear
//! that jumps over a multiple does not trigger it.

use crate::types::{BASE_TICK_MS, DIFFICULTY_THRESHOLD, LINE_CLEAR_POINTS, MIN_TICK_MS, TICK_STEP_MS};

/// Points for clearing `rows` rows at once
pub fn line_clear_points(rows: usize) -> u32 {
    (rows as u32).saturating_mul(LINE_CLEAR_POINTS)
}

/// Whether the difficulty rule fires at this score
pub fn difficulty_fires(score: u32) -> bool {
    score % DIFFICULTY_THRESHOLD == 0
}

/// Gravity interval for a score:
/// `max(MIN_TICK_MS, BASE_TICK_MS - (score / DIFFICULTY_THRESHOLD) * TICK_STEP_MS)`
pub fn tick_interval_ms(score: u32) -> u32 {
    let steps = score / DIFFICULTY_THRESHOLD;
    BASE_TICK_MS
        .saturating_sub(steps.saturating_mul(TICK_STEP_MS))
        .max(MIN_TICK_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_points() {
        assert_eq!(line_clear_points(0), 0);
        assert_eq!(line_clear_points(1), 100);
        assert_eq!(line_clear_points(4), 400);
    }

    #[test]
    fn test_difficulty_fires_on_exact_multiples() {
        assert!(difficulty_fires(0));
        assert!(difficulty_fires(500));
        assert!(difficulty_fires(1500));
        assert!(!difficulty_fires(400));
        assert!(!difficulty_fires(600));
    }

    #[test]
    fn test_tick_interval_ramp() {
        assert_eq!(tick_interval_ms(0), 1500);
        assert_eq!(tick_interval_ms(499), 1500);
        assert_eq!(tick_interval_ms(500), 1400);
        assert_eq!(tick_interval_ms(1000), 1300);
        assert_eq!(tick_interval_ms(5000), 500);
        assert_eq!(tick_interval_ms(50_000), 500);
        assert_eq!(tick_interval_ms(u32::MAX), 500);
    }
}
