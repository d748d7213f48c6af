//! Game state machine.
//!
//! Owns the board, the active/next/hold pieces, and the score progression,
//! and orchestrates the per-tick flow: input is applied through
//! [`GameState::apply_action`], gravity through [`GameState::tick`]. A tick
//! applies at most one gravity move; callers dispatch input before ticking,
//! so within a tick input always lands first.
//!
//! Phases: `Falling -> (lock -> Clearing -> spawn) | GameOver`. The line
//! clear blink is a timed sub-state consumed by the renderer via the
//! snapshot, never a blocking wait. Pause is an orthogonal flag that
//! freezes both tick accumulation and input dispatch.

use arrayvec::ArrayVec;

use crt_tetris_types::{AudioEvent, GameAction, GameConfig, PieceKind};

use crate::board::{Board, MAX_CLEARED_ROWS};
use crate::collide::{shape_fits, valid_move};
use crate::piece::Piece;
use crate::scoring::Progress;
use crate::snapshot::{ActivePieceSnapshot, GameSnapshot, LineClearSnapshot};
use crate::supply::{PieceSupplier, RandomSupplier};

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Falling,
    Clearing(ClearState),
    GameOver,
}

/// Timed blink sub-state: `passes_left` alternating highlight/normal frames,
/// each shown for the configured interval, then the rows are compacted.
#[derive(Debug, Clone, PartialEq)]
struct ClearState {
    rows: ArrayVec<usize, MAX_CLEARED_ROWS>,
    passes_left: u8,
    timer: f32,
}

pub struct GameState {
    config: GameConfig,
    board: Board,
    active: Option<Piece>,
    next: PieceKind,
    hold: Option<PieceKind>,
    hold_used: bool,
    supplier: Box<dyn PieceSupplier>,
    progress: Progress,
    phase: Phase,
    fall_timer: f32,
    paused: bool,
    events: ArrayVec<AudioEvent, 8>,
}

impl GameState {
    /// New game with the default configuration and a seeded random supplier.
    pub fn new(seed: u32) -> Self {
        Self::with_supplier(GameConfig::default(), Box::new(RandomSupplier::new(seed)))
    }

    pub fn with_supplier(config: GameConfig, supplier: Box<dyn PieceSupplier>) -> Self {
        let board = Board::new(config.grid_width, config.grid_height);
        Self::from_parts(config, board, supplier)
    }

    /// Build a game over a pre-filled board (scenario setup in tests).
    pub fn from_parts(
        config: GameConfig,
        board: Board,
        mut supplier: Box<dyn PieceSupplier>,
    ) -> Self {
        debug_assert_eq!(board.width(), config.grid_width);
        debug_assert_eq!(board.height(), config.grid_height);

        let first = supplier.next_piece();
        let next = supplier.next_piece();
        let progress = Progress::new(&config);
        let mut state = Self {
            board,
            active: None,
            next,
            hold: None,
            hold_used: false,
            supplier,
            progress,
            phase: Phase::Falling,
            fall_timer: 0.0,
            paused: false,
            events: ArrayVec::new(),
            config,
        };
        state.spawn(first);
        state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    /// Whether a hold request would currently swap (false after the one
    /// allowed swap per piece lifetime).
    pub fn can_hold(&self) -> bool {
        !self.hold_used
    }

    pub fn score(&self) -> u32 {
        self.progress.score()
    }

    pub fn level(&self) -> u32 {
        self.progress.level()
    }

    pub fn lines(&self) -> u32 {
        self.progress.lines()
    }

    pub fn fall_interval(&self) -> f32 {
        self.progress.fall_interval()
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver)
    }

    pub fn is_clearing(&self) -> bool {
        matches!(self.phase, Phase::Clearing(_))
    }

    /// Drain the audio events accumulated since the last call.
    ///
    /// The engine is indifferent to whether anything drains these; when the
    /// queue is full further events are dropped.
    pub fn take_audio_events(&mut self) -> ArrayVec<AudioEvent, 8> {
        std::mem::take(&mut self.events)
    }

    /// Apply an input command. Illegal requests (paused, game over, or
    /// rejected by the collision validator) leave the state unchanged and
    /// report `false`.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => {
                if self.game_over() || self.paused {
                    return false;
                }
                self.paused = true;
                return true;
            }
            GameAction::Resume => {
                if !self.paused {
                    return false;
                }
                self.paused = false;
                return true;
            }
            GameAction::Restart => {
                self.restart();
                return true;
            }
            _ => {}
        }

        if self.paused || !matches!(self.phase, Phase::Falling) {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::Rotate => self.try_rotate(),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::Hold => self.hold_current(),
            GameAction::Pause | GameAction::Resume | GameAction::Restart => unreachable!(),
        }
    }

    /// Advance timers by `dt` seconds. Returns true when the visible state
    /// changed (a gravity move, a lock, or blink progress).
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.paused || self.game_over() {
            return false;
        }

        if let Phase::Clearing(ref mut clear) = self.phase {
            clear.timer += dt;
            let mut advanced = false;
            while clear.timer >= self.config.blink_interval && clear.passes_left > 0 {
                clear.timer -= self.config.blink_interval;
                clear.passes_left -= 1;
                advanced = true;
            }
            if clear.passes_left == 0 {
                self.finish_line_clear();
                return true;
            }
            return advanced;
        }

        self.fall_timer += dt;
        if self.fall_timer < self.progress.fall_interval() {
            return false;
        }
        self.fall_timer = 0.0;

        if !self.try_move(0, 1) {
            self.lock_active();
        }
        true
    }

    /// Start over on an empty board; the piece stream continues from the
    /// same supplier.
    pub fn restart(&mut self) {
        self.board.reset();
        self.progress = Progress::new(&self.config);
        self.hold = None;
        self.hold_used = false;
        self.paused = false;
        self.fall_timer = 0.0;
        self.events.clear();
        self.phase = Phase::Falling;
        let kind = self.supplier.next_piece();
        self.next = self.supplier.next_piece();
        self.spawn(kind);
    }

    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(ref mut piece) = self.active else {
            return false;
        };
        if !valid_move(&self.board, piece, dx, dy) {
            return false;
        }
        piece.x += dx;
        piece.y += dy;
        true
    }

    /// Rotate clockwise in place; no wall kicks, an obstructed rotation is
    /// discarded entirely.
    fn try_rotate(&mut self) -> bool {
        let Some(ref mut piece) = self.active else {
            return false;
        };
        let rotated = piece.shape.rotated_cw();
        if !shape_fits(&self.board, &rotated, piece.x, piece.y) {
            return false;
        }
        piece.shape = rotated;
        true
    }

    /// Drop until blocked, then lock immediately, bypassing the gravity
    /// timer. Terminates within `grid_height` iterations.
    fn hard_drop(&mut self) {
        while self.try_move(0, 1) {}
        self.lock_active();
    }

    /// At-most-once-per-piece swap with the hold slot.
    fn hold_current(&mut self) -> bool {
        if self.hold_used {
            return false;
        }
        let Some(active) = self.active.take() else {
            return false;
        };

        let incoming = match self.hold {
            // Swap: the held piece returns with its original catalog shape.
            Some(held) => held,
            // First hold: promote the pending next piece instead.
            None => {
                let promoted = self.next;
                self.next = self.supplier.next_piece();
                promoted
            }
        };
        self.hold = Some(active.kind);

        let mut piece = Piece::spawn(incoming, self.config.grid_width);
        self.nudge_into_place(&mut piece);
        self.active = Some(piece);
        self.hold_used = true;
        true
    }

    /// Best-effort placement after a hold swap: shift left one column at a
    /// time (clamped at x = 0), then upward while still blocked, giving up
    /// above the grid. The final position is not guaranteed valid.
    fn nudge_into_place(&self, piece: &mut Piece) {
        while !valid_move(&self.board, piece, 0, 0) {
            piece.x -= 1;
            if piece.x < 0 {
                piece.x = 0;
                break;
            }
        }
        while !valid_move(&self.board, piece, 0, 0) {
            piece.y -= 1;
            if piece.y < 0 {
                break;
            }
        }
    }

    /// Commit the active piece and run line-clear detection. With full rows
    /// present this enters the blink sub-state; the rows are compacted and
    /// the next piece spawned when it completes.
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        self.board.commit(&piece);
        self.push_event(AudioEvent::PieceLocked);

        let rows = self.board.full_rows();
        if rows.is_empty() {
            self.spawn_from_queue();
        } else {
            self.phase = Phase::Clearing(ClearState {
                rows,
                passes_left: self.config.blink_passes,
                timer: 0.0,
            });
        }
    }

    fn finish_line_clear(&mut self) {
        let Phase::Clearing(clear) = std::mem::replace(&mut self.phase, Phase::Falling) else {
            return;
        };
        self.board.clear_rows(&clear.rows);
        let cleared = clear.rows.len();
        self.push_event(AudioEvent::LinesCleared(cleared as u32));
        self.progress.apply_clear(cleared, &self.config);
        self.spawn_from_queue();
    }

    /// Promote the next piece, draw a fresh one, and re-arm hold. An
    /// invalid spawn placement is the terminal condition.
    fn spawn_from_queue(&mut self) {
        let kind = self.next;
        self.next = self.supplier.next_piece();
        self.hold_used = false;
        self.spawn(kind);
    }

    fn spawn(&mut self, kind: PieceKind) {
        let piece = Piece::spawn(kind, self.config.grid_width);
        let blocked = !valid_move(&self.board, &piece, 0, 0);
        self.active = Some(piece);
        self.fall_timer = 0.0;
        self.phase = if blocked { Phase::GameOver } else { Phase::Falling };
    }

    fn push_event(&mut self, event: AudioEvent) {
        let _ = self.events.try_push(event);
    }

    /// Write the current state into a reusable snapshot.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());

        out.active = self.active.as_ref().map(|p| ActivePieceSnapshot {
            kind: p.kind,
            shape: p.shape,
            x: p.x,
            y: p.y,
        });
        out.next = self.next;
        out.hold = self.hold;
        out.clearing = match self.phase {
            Phase::Clearing(ref clear) => {
                let pass = self.config.blink_passes - clear.passes_left;
                Some(LineClearSnapshot {
                    rows: clear.rows.clone(),
                    highlight: pass % 2 == 0,
                })
            }
            _ => None,
        };
        out.score = self.progress.score();
        out.level = self.progress.level();
        out.lines = self.progress.lines();
        out.paused = self.paused;
        out.game_over = self.game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::new(self.board.width(), self.board.height());
        self.snapshot_into(&mut out);
        out
    }
}
