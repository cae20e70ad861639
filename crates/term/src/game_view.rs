//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-tested against framebuffer text.
//!
//! Layout, top to bottom and centered in the viewport:
//!
//! ```text
//!      TETRIS GAME
//! Score: 0 | Level: 1 | Lines: 0
//! ┌────────────────────┐
//! │····················│   controls
//! │        ...         │
//! └────────────────────┘
//! ```

use crate::core::{GameSnapshot, Phase};
use crate::fb::{decimal_width, CellStyle, FrameBuffer, Rgb};
use crate::types::{PauseItem, PieceKind, SessionEnd, FIELD_HEIGHT, FIELD_WIDTH};

pub const TITLE: &str = "TETRIS GAME";
pub const MENU_TITLE: &str = "PAUSE MENU:";
pub const MENU_HINT: &str = "Use arrows and Enter to select";
pub const GAME_OVER_TITLE: &str = "GAME OVER!";
pub const FINAL_SCORE_LABEL: &str = "Final Score: ";
pub const REPLAY_HINT: &str = "Press R to Replay or ESC to Exit";

/// Rows above the field frame: title and HUD.
const HEADER_ROWS: u16 = 2;

const CONTROLS: [&str; 7] = [
    "CONTROLS",
    "<- ->  move",
    "^      rotate",
    "v      soft drop",
    "Space  hard drop",
    "Esc/p  pause",
    "q      quit",
];

const FIELD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Screen positions derived from the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Left column of the field border.
    pub frame_x: u16,
    /// Top row of the field border.
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    /// Top row of the title line.
    pub header_y: u16,
}

/// Draws the whole game screen.
pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
    /// Field cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up a cell in most terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = (FIELD_WIDTH as u16) * self.cell_w + 2;
        let frame_h = (FIELD_HEIGHT as u16) * self.cell_h + 2;
        let block_h = frame_h + HEADER_ROWS;

        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let header_y = viewport.height.saturating_sub(block_h) / 2;

        Layout {
            frame_x,
            frame_y: header_y + HEADER_ROWS,
            frame_w,
            frame_h,
            header_y,
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout(viewport);

        self.draw_header(fb, snap, &layout);
        self.draw_border(fb, &layout);
        self.draw_field(fb, snap, &layout);
        self.draw_controls(fb, viewport, &layout);

        match snap.phase {
            Phase::Playing => {}
            Phase::Paused(selected) => self.draw_pause_menu(fb, &layout, selected),
            Phase::GameOver(SessionEnd::ToppedOut) => {
                self.draw_game_over(fb, &layout, snap.score)
            }
            Phase::GameOver(SessionEnd::Exited) => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let title = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        let label = CellStyle::default();
        let value = CellStyle::new(Rgb::new(240, 220, 80), SCREEN_BG).bold();

        let title_x = centered_x(layout.frame_x, layout.frame_w, TITLE.len() as u16);
        fb.put_str(title_x, layout.header_y, TITLE, title);

        let y = layout.header_y + 1;
        let mut x = layout.frame_x;
        x = fb.put_str(x, y, "Score: ", label);
        x = fb.put_u32(x, y, snap.score, value);
        x = fb.put_str(x, y, " | Level: ", label);
        x = fb.put_u32(x, y, snap.level, value);
        x = fb.put_str(x, y, " | Lines: ", label);
        fb.put_u32(x, y, snap.lines, value);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: &Layout) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let (x, y, w, h) = (layout.frame_x, layout.frame_y, layout.frame_w, layout.frame_h);

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_field(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let empty = CellStyle::new(Rgb::new(90, 90, 100), FIELD_BG).dim();

        for y in 0..FIELD_HEIGHT as u16 {
            for x in 0..FIELD_WIDTH as u16 {
                match PieceKind::from_color_tag(snap.field[y as usize][x as usize]) {
                    Some(kind) => self.fill_cell(fb, layout, x, y, '█', piece_style(kind)),
                    None => self.fill_cell(fb, layout, x, y, '·', empty),
                }
            }
        }

        // The falling piece is drawn over the locked cells. Rows above the
        // field are not shown.
        if let Some(active) = snap.active {
            let style = piece_style(active.kind);
            for (x, y) in active.cells() {
                if x >= 0 && x < FIELD_WIDTH as i8 && y >= 0 && y < FIELD_HEIGHT as i8 {
                    self.fill_cell(fb, layout, x as u16, y as u16, '█', style);
                }
            }
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = layout.frame_x + 1 + cell_x * self.cell_w;
        let py = layout.frame_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_controls(&self, fb: &mut FrameBuffer, viewport: Viewport, layout: &Layout) {
        let panel_x = layout.frame_x.saturating_add(layout.frame_w).saturating_add(2);
        let widest = CONTROLS.iter().map(|s| s.len()).max().unwrap_or(0) as u16;
        if panel_x.saturating_add(widest) > viewport.width {
            return;
        }

        let heading = CellStyle::default().bold();
        let text = CellStyle::default().dim();
        for (i, line) in CONTROLS.iter().enumerate() {
            let style = if i == 0 { heading } else { text };
            fb.put_str(panel_x, layout.frame_y + 1 + i as u16, line, style);
        }
    }

    fn draw_pause_menu(&self, fb: &mut FrameBuffer, layout: &Layout, selected: PauseItem) {
        // Title, blank, three items, blank, hint.
        let rows = 7;
        let text_w = MENU_HINT.len() as u16;
        let (box_x, box_y) = self.draw_panel(fb, layout, text_w, rows);

        let title = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        let item = CellStyle::default();
        let active = CellStyle::new(Rgb::new(240, 220, 80), SCREEN_BG).bold();
        let hint = CellStyle::default().dim();

        fb.put_str(box_x, box_y, MENU_TITLE, title);
        for (i, entry) in PauseItem::ALL.iter().enumerate() {
            let y = box_y + 2 + i as u16;
            if *entry == selected {
                let x = fb.put_str(box_x, y, "> ", active);
                fb.put_str(x, y, entry.label(), active);
            } else {
                let x = fb.put_str(box_x, y, "  ", item);
                fb.put_str(x, y, entry.label(), item);
            }
        }
        fb.put_str(box_x, box_y + 6, MENU_HINT, hint);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, layout: &Layout, score: u32) {
        let rows = 5;
        let text_w = REPLAY_HINT.len() as u16;
        let (box_x, box_y) = self.draw_panel(fb, layout, text_w, rows);

        let title = CellStyle::new(Rgb::new(220, 80, 80), SCREEN_BG).bold();
        let label = CellStyle::default();
        let value = CellStyle::new(Rgb::new(240, 220, 80), SCREEN_BG).bold();

        let x = centered_x(box_x, text_w, GAME_OVER_TITLE.len() as u16);
        fb.put_str(x, box_y, GAME_OVER_TITLE, title);

        let score_w = FINAL_SCORE_LABEL.len() as u16 + decimal_width(score);
        let x = centered_x(box_x, text_w, score_w);
        let x = fb.put_str(x, box_y + 2, FINAL_SCORE_LABEL, label);
        fb.put_u32(x, box_y + 2, score, value);

        fb.put_str(box_x, box_y + 4, REPLAY_HINT, label);
    }

    /// Clear a bordered box centered on the field that fits `text_w x rows`
    /// of content. Returns the top-left of the content area.
    fn draw_panel(&self, fb: &mut FrameBuffer, layout: &Layout, text_w: u16, rows: u16) -> (u16, u16) {
        let box_w = text_w + 4;
        let box_h = rows + 2;
        let center_x = layout.frame_x + layout.frame_w / 2;
        let center_y = layout.frame_y + layout.frame_h / 2;
        let x = center_x.saturating_sub(box_w / 2);
        let y = center_y.saturating_sub(box_h / 2);

        let bg = CellStyle::default();
        fb.fill_rect(x, y, box_w, box_h, ' ', bg);

        let edge = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        fb.put_char(x, y, '┌', edge);
        fb.put_char(x + box_w - 1, y, '┐', edge);
        fb.put_char(x, y + box_h - 1, '└', edge);
        fb.put_char(x + box_w - 1, y + box_h - 1, '┘', edge);
        for dx in 1..box_w - 1 {
            fb.put_char(x + dx, y, '─', edge);
            fb.put_char(x + dx, y + box_h - 1, '─', edge);
        }
        for dy in 1..box_h - 1 {
            fb.put_char(x, y + dy, '│', edge);
            fb.put_char(x + box_w - 1, y + dy, '│', edge);
        }

        (x + 2, y + 1)
    }
}

fn centered_x(start: u16, width: u16, text_w: u16) -> u16 {
    start.saturating_add(width.saturating_sub(text_w) / 2)
}

fn piece_style(kind: PieceKind) -> CellStyle {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    };
    CellStyle::new(fg, FIELD_BG).bold()
}
