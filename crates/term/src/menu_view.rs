//! MenuView: draws the start menu into a framebuffer.
//!
//! A bordered box two thirds of the terminal wide and half of it tall, the
//! yellow "Pacman" title, the choices (highlighted one reversed) and the
//! runner eating its way along the pellet row near the bottom edge.

use crate::core::Menu;
use crate::fb::{CellStyle, FrameBuffer, Paint};
use crate::game_view::{player_glyph, Viewport, PELLET_GLYPH};
use crate::types::MENU_PELLETS;

const TITLE: &str = "Pacman";

const BORDER: CellStyle = CellStyle::fg(Paint::White);
const TITLE_STYLE: CellStyle = CellStyle::fg(Paint::Yellow).bold();
const CHOICE: CellStyle = CellStyle::fg(Paint::White);
const HIGHLIGHT: CellStyle = CellStyle::fg(Paint::Yellow).reversed();
const PELLET: CellStyle = CellStyle::fg(Paint::White);
const RUNNER: CellStyle = CellStyle::fg(Paint::Yellow).bold();

/// Placement of the menu box inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLayout {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// Cells the runner sweeps: home, the pellets, and one past the last pellet.
const RUNNER_SPAN: u16 = MENU_PELLETS + 2;

impl MenuLayout {
    /// Two thirds of the width, but never narrower than the runner row plus
    /// its borders (unless the viewport itself is).
    pub fn for_viewport(viewport: Viewport) -> Self {
        let width = (viewport.width * 2 / 3)
            .max(RUNNER_SPAN + 2)
            .min(viewport.width);
        let height = viewport.height / 2;
        Self {
            x: (viewport.width - width) / 2,
            y: viewport.height / 2 - height / 2,
            width,
            height,
        }
    }

    /// Column where the title and choices start.
    pub fn text_x(&self) -> u16 {
        self.x + (self.width / 2).saturating_sub(TITLE.len() as u16 / 2)
    }

    /// Row of the first choice.
    pub fn choices_y(&self) -> u16 {
        self.y + self.height / 2
    }

    /// Cell of the runner's home position (offset 0). The row is centred
    /// between the side borders.
    pub fn runner_origin(&self) -> (u16, u16) {
        let inner = self.width.saturating_sub(2);
        let x = self.x + 1 + inner.saturating_sub(RUNNER_SPAN) / 2;
        (x, self.y + self.height.saturating_sub(2))
    }
}

#[derive(Debug, Default)]
pub struct MenuView;

impl MenuView {
    pub fn new() -> Self {
        Self
    }

    pub fn render_into(&self, menu: &Menu, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = MenuLayout::for_viewport(viewport);
        draw_box(fb, layout.x, layout.y, layout.width, layout.height, BORDER);

        fb.put_str(layout.text_x(), layout.y + 1, TITLE, TITLE_STYLE);

        for (i, choice) in menu.choices().iter().enumerate() {
            let style = if i == menu.highlight() { HIGHLIGHT } else { CHOICE };
            fb.put_str(layout.text_x(), layout.choices_y() + i as u16, choice.label(), style);
        }

        let (rx, ry) = layout.runner_origin();
        let runner = menu.runner();
        for i in 0..MENU_PELLETS as usize {
            if runner.pellet_present(i) {
                fb.put_char(rx + 1 + i as u16, ry, PELLET_GLYPH, PELLET);
            }
        }
        fb.put_char(
            rx + runner.offset(),
            ry,
            player_glyph(runner.dir(), runner.mouth_open()),
            RUNNER,
        );
    }

    pub fn render(&self, menu: &Menu, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(menu, viewport, &mut fb);
        fb
    }
}

fn draw_box(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

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
