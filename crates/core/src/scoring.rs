//! Score, level, and fall-speed progression.
//!
//! An n-row clear is worth `clear_scores[n-1] * level`. The level rises by
//! exactly one whenever the total line count crosses a `lines_per_level`
//! boundary, even when a 4-row clear spans the boundary, and each level-up
//! multiplies the fall interval by the speed curve (clamped at the floor).

use crt_tetris_types::GameConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    score: u32,
    level: u32,
    lines: u32,
    fall_interval: f32,
}

impl Progress {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0,
            level: config.start_level,
            lines: 0,
            fall_interval: config.start_fall_interval,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Seconds the gravity timer must accumulate before a one-row descent.
    pub fn fall_interval(&self) -> f32 {
        self.fall_interval
    }

    /// Record an n-row clear (n in 1..=4). Returns the points awarded.
    pub fn apply_clear(&mut self, rows: usize, config: &GameConfig) -> u32 {
        debug_assert!((1..=4).contains(&rows));

        let points = config.clear_scores[rows - 1] * self.level;
        self.score += points;

        let before = self.lines;
        self.lines += rows as u32;
        if self.lines / config.lines_per_level > before / config.lines_per_level {
            self.level += 1;
            self.fall_interval =
                (self.fall_interval * config.speed_curve).max(config.min_fall_interval);
        }

        points
    }
}
