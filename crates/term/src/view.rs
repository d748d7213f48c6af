//! GameView: encodes a `GameSnapshot` into terminal commands.
//!
//! Pure with respect to the terminal: everything is queued into a byte
//! buffer, so frames can be built and inspected without any I/O. Each cell
//! is two columns wide to compensate for the terminal glyph aspect ratio.

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::{base_shape, GameSnapshot};
use crate::theme::{Rgb, Theme};
use crate::types::PieceKind;

/// Terminal columns per board cell.
const CELL_W: u16 = 2;
/// Columns reserved for the score/next/hold panel.
const PANEL_W: u16 = 16;

const BLINK_WHITE: Rgb = Rgb::new(255, 255, 255);

pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Encode a full frame for `snap` into `out`.
    pub fn encode_frame(
        &self,
        snap: &GameSnapshot,
        theme: &Theme,
        size: (u16, u16),
        out: &mut Vec<u8>,
    ) -> Result<()> {
        let (term_w, term_h) = size;
        let board_w = snap.width as u16 * CELL_W;
        let board_h = snap.height as u16;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let start_x = term_w.saturating_sub(frame_w + PANEL_W) / 2;
        let start_y = term_h.saturating_sub(frame_h) / 2;

        out.queue(terminal::Clear(terminal::ClearType::All))?;

        self.draw_border(out, theme, start_x, start_y, frame_w, frame_h)?;
        self.draw_board(out, snap, theme, start_x + 1, start_y + 1)?;
        self.draw_panel(out, snap, theme, start_x + frame_w + 2, start_y + 1)?;

        if snap.paused {
            self.draw_overlay(out, theme, start_x, start_y, frame_w, frame_h, " PAUSED ")?;
        } else if snap.game_over {
            self.draw_overlay(out, theme, start_x, start_y, frame_w, frame_h, " GAME OVER ")?;
        }

        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    fn draw_border(
        &self,
        out: &mut Vec<u8>,
        theme: &Theme,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) -> Result<()> {
        set_colors(out, theme.accent, theme.bg)?;
        let horizontal = "─".repeat(w.saturating_sub(2) as usize);

        out.queue(cursor::MoveTo(x, y))?;
        out.queue(Print(format!("┌{horizontal}┐")))?;
        for row in 1..h.saturating_sub(1) {
            out.queue(cursor::MoveTo(x, y + row))?;
            out.queue(Print("│"))?;
            out.queue(cursor::MoveTo(x + w - 1, y + row))?;
            out.queue(Print("│"))?;
        }
        out.queue(cursor::MoveTo(x, y + h - 1))?;
        out.queue(Print(format!("└{horizontal}┘")))?;
        Ok(())
    }

    fn draw_board(
        &self,
        out: &mut Vec<u8>,
        snap: &GameSnapshot,
        theme: &Theme,
        origin_x: u16,
        origin_y: u16,
    ) -> Result<()> {
        for y in 0..snap.height {
            out.queue(cursor::MoveTo(origin_x, origin_y + y as u16))?;
            let blink = snap
                .clearing
                .as_ref()
                .filter(|c| c.rows.contains(&(y as usize)));

            for x in 0..snap.width {
                if let Some(clear) = blink {
                    // Flashing row: white and the first catalog color alternate.
                    let color = if clear.highlight {
                        BLINK_WHITE
                    } else {
                        theme.piece_colors[0]
                    };
                    set_colors(out, theme.accent, color)?;
                    out.queue(Print("  "))?;
                } else if let Some(kind) = snap.cell(x, y) {
                    set_colors(out, theme.accent, theme.piece_color(kind))?;
                    out.queue(Print("  "))?;
                } else {
                    set_colors(out, theme.grid, theme.bg)?;
                    out.queue(Print("· "))?;
                }
            }
        }

        // Active piece on top of the grid; rows above the board are clipped.
        if let Some(ref active) = snap.active {
            set_colors(out, theme.accent, theme.piece_color(active.kind))?;
            for (x, y) in active.cells() {
                if y < 0 {
                    continue;
                }
                let cx = origin_x + x as u16 * CELL_W;
                let cy = origin_y + y as u16;
                out.queue(cursor::MoveTo(cx, cy))?;
                out.queue(Print("  "))?;
            }
        }
        Ok(())
    }

    fn draw_panel(
        &self,
        out: &mut Vec<u8>,
        snap: &GameSnapshot,
        theme: &Theme,
        x: u16,
        y: u16,
    ) -> Result<()> {
        out.queue(ResetColor)?;
        out.queue(SetForegroundColor(to_color(theme.block)))?;

        let lines = [
            format!("SCORE {:>8}", snap.score),
            format!("LEVEL {:>8}", snap.level),
            format!("LINES {:>8}", snap.lines),
        ];
        for (i, line) in lines.iter().enumerate() {
            out.queue(cursor::MoveTo(x, y + i as u16))?;
            out.queue(Print(line))?;
        }

        out.queue(cursor::MoveTo(x, y + 4))?;
        out.queue(Print("NEXT"))?;
        self.draw_preview(out, theme, Some(snap.next), x, y + 5)?;

        out.queue(ResetColor)?;
        out.queue(SetForegroundColor(to_color(theme.block)))?;
        out.queue(cursor::MoveTo(x, y + 9))?;
        out.queue(Print("HOLD"))?;
        self.draw_preview(out, theme, snap.hold, x, y + 10)?;

        out.queue(ResetColor)?;
        out.queue(SetForegroundColor(to_color(theme.grid)))?;
        out.queue(cursor::MoveTo(x, y + 14))?;
        out.queue(Print(format!("THEME {}", theme.name)))?;

        let help = [
            "arrows  move",
            "up      rotate",
            "space   drop",
            "c       hold",
            "p       pause",
            "r       restart",
            "t/q     theme/quit",
        ];
        for (i, line) in help.iter().enumerate() {
            out.queue(cursor::MoveTo(x, y + 16 + i as u16))?;
            out.queue(Print(line))?;
        }
        Ok(())
    }

    /// Two-row shape preview; an empty slot renders as a dash.
    fn draw_preview(
        &self,
        out: &mut Vec<u8>,
        theme: &Theme,
        kind: Option<PieceKind>,
        x: u16,
        y: u16,
    ) -> Result<()> {
        let Some(kind) = kind else {
            out.queue(cursor::MoveTo(x, y))?;
            out.queue(SetForegroundColor(to_color(theme.grid)))?;
            out.queue(Print("--"))?;
            return Ok(());
        };

        set_colors(out, theme.accent, theme.piece_color(kind))?;
        for (dx, dy) in base_shape(kind).filled_cells() {
            out.queue(cursor::MoveTo(x + dx as u16 * CELL_W, y + dy as u16))?;
            out.queue(Print("  "))?;
        }
        Ok(())
    }

    fn draw_overlay(
        &self,
        out: &mut Vec<u8>,
        theme: &Theme,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        text: &str,
    ) -> Result<()> {
        let tx = x + w.saturating_sub(text.len() as u16) / 2;
        let ty = y + h / 2;
        set_colors(out, BLINK_WHITE, theme.accent)?;
        out.queue(cursor::MoveTo(tx, ty))?;
        out.queue(Print(text))?;
        Ok(())
    }
}

impl Default for GameView {
    fn default() -> Self {
        Self::new()
    }
}

fn set_colors(out: &mut Vec<u8>, fg: Rgb, bg: Rgb) -> Result<()> {
    out.queue(SetForegroundColor(to_color(fg)))?;
    out.queue(SetBackgroundColor(to_color(bg)))?;
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
