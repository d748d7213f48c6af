//! Auto-repeat for held movement keys (DAS/ARR).
//!
//! Some terminals never deliver key-release events, so holds are simulated:
//! a press arms the axis, repeats start after the DAS delay and fire at the
//! ARR rate, and the axis disarms when another key arrives or after a
//! release timeout. Each physical press still produces exactly one
//! immediate action; only repeats come from [`InputHandler::update`].

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;
use std::time::Instant;

use crate::types::{GameAction, DEFAULT_ARR_MS, DEFAULT_DAS_MS};

/// Upper bound on repeats surfaced per update; extras are dropped.
pub const MAX_REPEATS: usize = 8;

const RELEASE_TIMEOUT_MS: u32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeldDirection {
    None,
    Left,
    Right,
}

/// DAS then ARR accumulator for one movement axis.
#[derive(Debug, Clone, Copy, Default)]
struct RepeatTimer {
    das: u32,
    arr: u32,
}

impl RepeatTimer {
    fn arm(&mut self) {
        self.das = 0;
        self.arr = 0;
    }

    /// Advance by `dt` milliseconds and return the repeats now due.
    /// A zero ARR rate disables auto-repeat entirely.
    fn advance(&mut self, dt: u32, das_delay: u32, arr_rate: u32) -> u32 {
        if arr_rate == 0 {
            return 0;
        }
        let before = self.das;
        self.das = self.das.saturating_add(dt);
        if self.das < das_delay {
            return 0;
        }
        // Time past the DAS threshold feeds the repeat accumulator; on the
        // crossing step only the excess counts.
        let usable = if before < das_delay {
            self.das - das_delay
        } else {
            dt
        };
        self.arr += usable;
        let repeats = self.arr / arr_rate;
        self.arr %= arr_rate;
        repeats
    }
}

#[derive(Debug, Clone)]
pub struct InputHandler {
    held: HeldDirection,
    down_held: bool,
    horizontal: RepeatTimer,
    down: RepeatTimer,
    das_delay: u32,
    arr_rate: u32,
    last_press: Instant,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DAS_MS, DEFAULT_ARR_MS)
    }

    pub fn with_config(das_delay: u32, arr_rate: u32) -> Self {
        Self {
            held: HeldDirection::None,
            down_held: false,
            horizontal: RepeatTimer::default(),
            down: RepeatTimer::default(),
            das_delay,
            arr_rate,
            last_press: Instant::now(),
        }
    }

    /// Handle a press of a movement key. Returns the immediate action, or
    /// `None` when the key was already considered held.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        self.last_press = Instant::now();

        match code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a')
            | KeyCode::Char('A') => self.press_horizontal(HeldDirection::Left),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d')
            | KeyCode::Char('D') => self.press_horizontal(HeldDirection::Right),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s')
            | KeyCode::Char('S') => {
                if self.down_held {
                    None
                } else {
                    self.down_held = true;
                    self.down.arm();
                    Some(GameAction::SoftDrop)
                }
            }
            _ => None,
        }
    }

    fn press_horizontal(&mut self, direction: HeldDirection) -> Option<GameAction> {
        if self.held == direction {
            return None;
        }
        self.held = direction;
        self.horizontal.arm();
        match direction {
            HeldDirection::Left => Some(GameAction::MoveLeft),
            HeldDirection::Right => Some(GameAction::MoveRight),
            HeldDirection::None => None,
        }
    }

    /// Handle a key release, for terminals that report them.
    pub fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a')
            | KeyCode::Char('A') => {
                if self.held == HeldDirection::Left {
                    self.held = HeldDirection::None;
                    self.horizontal.arm();
                }
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d')
            | KeyCode::Char('D') => {
                if self.held == HeldDirection::Right {
                    self.held = HeldDirection::None;
                    self.horizontal.arm();
                }
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s')
            | KeyCode::Char('S') => {
                self.down_held = false;
                self.down.arm();
            }
            _ => {}
        }
    }

    /// Advance the repeat timers by `elapsed_ms` and collect due repeats.
    /// Call once per game tick.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, MAX_REPEATS> {
        let mut actions = ArrayVec::new();

        // Without release events a stale hold has to time out.
        if self.last_press.elapsed().as_millis() as u32 > RELEASE_TIMEOUT_MS {
            self.held = HeldDirection::None;
            self.down_held = false;
            self.horizontal.arm();
            self.down.arm();
        }

        let repeat_action = match self.held {
            HeldDirection::Left => Some(GameAction::MoveLeft),
            HeldDirection::Right => Some(GameAction::MoveRight),
            HeldDirection::None => None,
        };
        if let Some(action) = repeat_action {
            let repeats = self
                .horizontal
                .advance(elapsed_ms, self.das_delay, self.arr_rate);
            for _ in 0..repeats {
                let _ = actions.try_push(action);
            }
        } else {
            self.horizontal.arm();
        }

        if self.down_held {
            let repeats = self.down.advance(elapsed_ms, self.das_delay, self.arr_rate);
            for _ in 0..repeats {
                let _ = actions.try_push(GameAction::SoftDrop);
            }
        } else {
            self.down.arm();
        }

        actions
    }

    /// Drop all held state, e.g. on pause or game over.
    pub fn reset(&mut self) {
        self.held = HeldDirection::None;
        self.down_held = false;
        self.horizontal.arm();
        self.down.arm();
        self.last_press = Instant::now();
    }

    pub fn das_delay(&self) -> u32 {
        self.das_delay
    }

    pub fn arr_rate(&self) -> u32 {
        self.arr_rate
    }

    pub fn held_direction(&self) -> HeldDirection {
        self.held
    }

    pub fn is_down_held(&self) -> bool {
        self.down_held
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
