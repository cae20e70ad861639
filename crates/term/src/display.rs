//! [`Display`] implementation for a real terminal.

use anyhow::Result;
use crossterm::terminal;
use log::debug;
use term_tetris_engine::Display;

use crate::core::GameSnapshot;
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

/// Fallback when the terminal size cannot be queried.
const DEFAULT_VIEWPORT: (u16, u16) = (80, 24);

pub struct TerminalDisplay {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
    viewport: Viewport,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        let (w, h) = DEFAULT_VIEWPORT;
        Self {
            renderer: TerminalRenderer::new(),
            view: GameView::default(),
            fb: FrameBuffer::new(w, h),
            viewport: Viewport::new(w, h),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    /// Restore the terminal. Safe to call after a failed or partial `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for TerminalDisplay {
    fn render(&mut self, frame: &GameSnapshot) -> Result<()> {
        let (w, h) = terminal::size().unwrap_or(DEFAULT_VIEWPORT);
        let viewport = Viewport::new(w, h);
        if viewport != self.viewport {
            debug!("viewport {}x{}", w, h);
            self.viewport = viewport;
            self.renderer.invalidate();
        }

        self.view.render_into(frame, viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}
