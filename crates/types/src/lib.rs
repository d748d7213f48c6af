//! Core types shared across the workspace.
//!
//! This crate contains pure data types and constants with no external
//! dependencies: piece kinds, game actions, audio events, board cells, and
//! the engine configuration.

/// Board dimensions (default configuration).
pub const GRID_WIDTH: u8 = 10;
pub const GRID_HEIGHT: u8 = 20;

/// Fixed tick rate of the surrounding loop.
pub const TICK_RATE_HZ: u32 = 60;
pub const TICK_MS: u32 = 1000 / TICK_RATE_HZ;
pub const TICK_SECONDS: f32 = 1.0 / TICK_RATE_HZ as f32;

/// Gravity defaults. The fall interval is seconds per one-row descent;
/// each level-up multiplies it by `SPEED_CURVE` and clamps at the floor.
pub const START_FALL_INTERVAL: f32 = 0.56;
pub const MIN_FALL_INTERVAL: f32 = 0.05;
pub const SPEED_CURVE: f32 = 0.8;

/// Points for clearing 1..=4 rows at once, multiplied by the current level.
pub const CLEAR_SCORES: [u32; 4] = [100, 300, 500, 800];

/// Levels advance every `LINES_PER_LEVEL` total cleared rows.
pub const LINES_PER_LEVEL: u32 = 10;
pub const START_LEVEL: u32 = 1;

/// Line-clear blink: alternating highlight/normal passes shown by the
/// renderer before the rows are compacted away.
pub const BLINK_PASSES: u8 = 4;
pub const BLINK_INTERVAL: f32 = 0.1;

/// DAS/ARR timing for held directions (milliseconds).
pub const DEFAULT_DAS_MS: u32 = 150;
pub const DEFAULT_ARR_MS: u32 = 50;

/// Tetromino piece kinds.
///
/// The discriminant order matches the shape catalog: a kind's `id` indexes
/// both the catalog and a theme's per-piece color table. The id is assigned
/// at piece creation and never re-derived from a (possibly rotated) matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Shape id, 0..=6 in catalog order.
    pub fn id(self) -> u8 {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

/// Cell on the board (`None` = empty, `Some` = locked with a piece kind).
pub type Cell = Option<PieceKind>;

/// Input commands accepted by the engine.
///
/// Every command is a silent no-op when it is currently invalid (paused,
/// game over, or rejected by the collision validator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    Hold,
    Pause,
    Resume,
    Restart,
}

/// Events produced for the audio collaborator.
///
/// The engine functions identically whether or not anything drains these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    PieceLocked,
    LinesCleared(u32),
}

/// Engine configuration.
///
/// All values the gameplay rules depend on, injectable for testability.
/// `Default` mirrors the classic constants above.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub grid_width: u8,
    pub grid_height: u8,
    pub start_level: u32,
    pub lines_per_level: u32,
    /// Seconds per one-row gravity descent at the starting level.
    pub start_fall_interval: f32,
    pub min_fall_interval: f32,
    /// Fall-interval multiplier applied once per level-up.
    pub speed_curve: f32,
    /// Points for an n-row clear are `clear_scores[n-1] * level`.
    pub clear_scores: [u32; 4],
    pub blink_passes: u8,
    /// Seconds each blink pass is shown.
    pub blink_interval: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            start_level: START_LEVEL,
            lines_per_level: LINES_PER_LEVEL,
            start_fall_interval: START_FALL_INTERVAL,
            min_fall_interval: MIN_FALL_INTERVAL,
            speed_curve: SPEED_CURVE,
            clear_scores: CLEAR_SCORES,
            blink_passes: BLINK_PASSES,
            blink_interval: BLINK_INTERVAL,
        }
    }
}
