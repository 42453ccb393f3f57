//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Paint};
use crate::types::{Direction, GhostColor, Phase, Tile};

/// Player glyphs, indexed by `direction.index() + 4 * mouth_open`.
///
/// Closed-mouth glyphs first (facing Left, Up, Right, Down), then the
/// open-mouth ones.
pub const PLAYER_GLYPHS: [char; 8] = ['ɔ', 'u', 'c', 'n', 'Ɔ', 'U', 'C', '∩'];

pub const GHOST_GLYPH: char = '@';
pub const PELLET_GLYPH: char = '•';
pub const WALL_GLYPH: char = '█';
pub const GATE_GLYPH: char = '─';

const WALL: CellStyle = CellStyle::fg(Paint::Blue);
const GATE: CellStyle = CellStyle::fg(Paint::White);
const PELLET: CellStyle = CellStyle::fg(Paint::White);
const PLAYER: CellStyle = CellStyle::fg(Paint::Yellow).bold();
const HUD: CellStyle = CellStyle::fg(Paint::White);
const OVERLAY: CellStyle = CellStyle::fg(Paint::Yellow).bold().reversed();

/// Glyph for a player facing `dir`.
pub fn player_glyph(dir: Direction, mouth_open: bool) -> char {
    PLAYER_GLYPHS[dir.index() + 4 * mouth_open as usize]
}

pub fn ghost_paint(color: GhostColor) -> Paint {
    match color {
        GhostColor::Cyan => Paint::Cyan,
        GhostColor::Red => Paint::Red,
        GhostColor::Green => Paint::Green,
        GhostColor::Magenta => Paint::Magenta,
    }
}

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Draws the maze, the entities and the HUD row below the maze.
pub struct GameView {
    /// Maze cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // One column per cell keeps the classic maze inside a 30-column terminal.
        Self {
            cell_w: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Top-left terminal cell of the maze for this viewport.
    pub fn origin(&self, snap: &GameSnapshot, viewport: Viewport) -> (u16, u16) {
        let maze_w = snap.width * self.cell_w;
        // Maze rows plus the HUD row.
        let frame_h = snap.height + 1;
        let x = viewport.width.saturating_sub(maze_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized only
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (start_x, start_y) = self.origin(snap, viewport);

        for y in 0..snap.height {
            for x in 0..snap.width {
                let (ch, style) = match snap.tile(x, y) {
                    Tile::Wall => (WALL_GLYPH, WALL),
                    Tile::Gate => (GATE_GLYPH, GATE),
                    Tile::Pellet => (PELLET_GLYPH, PELLET),
                    Tile::Empty => continue,
                };
                self.fill_cell(fb, start_x, start_y, x, y, ch, style);
            }
        }

        let p = snap.player;
        if let (Ok(x), Ok(y)) = (u16::try_from(p.pos.x), u16::try_from(p.pos.y)) {
            self.draw_glyph(fb, start_x, start_y, x, y, player_glyph(p.dir, p.mouth_open), PLAYER);
        }

        // Ghosts go on top so a catch frame shows the ghost.
        for ghost in &snap.ghosts {
            if let (Ok(x), Ok(y)) = (u16::try_from(ghost.pos.x), u16::try_from(ghost.pos.y)) {
                let style = CellStyle::fg(ghost_paint(ghost.color));
                self.draw_glyph(fb, start_x, start_y, x, y, GHOST_GLYPH, style);
            }
        }

        self.draw_hud(fb, snap, start_x, start_y.saturating_add(snap.height));

        match snap.phase {
            Phase::Playing => {}
            Phase::Caught => self.draw_overlay_text(fb, snap, start_x, start_y, "CAUGHT!"),
            Phase::Cleared => self.draw_overlay_text(fb, snap, start_x, start_y, "LEVEL CLEAR"),
            Phase::Over => self.draw_overlay_text(fb, snap, start_x, start_y, "GAME OVER"),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + cell_x * self.cell_w;
        fb.fill_rect(px, start_y + cell_y, self.cell_w, 1, ch, style);
    }

    /// Entity glyphs take the first column of a wide cell; the rest is blank.
    fn draw_glyph(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        self.fill_cell(fb, start_x, start_y, cell_x, cell_y, ' ', CellStyle::default());
        fb.put_char(start_x + cell_x * self.cell_w, start_y + cell_y, ch, style);
    }

    /// `Score: N` on the left, `Lv N` in the middle, `Lives: N` on the right.
    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let maze_w = snap.width * self.cell_w;

        let end = fb.put_str(x, y, "Score: ", HUD);
        fb.put_u32(end, y, snap.score, HUD);

        let lv_x = x + maze_w / 2;
        let end = fb.put_str(lv_x, y, "Lv ", HUD);
        fb.put_u32(end, y, snap.level, HUD);

        let lives_x = x + maze_w.saturating_sub(9);
        let end = fb.put_str(lives_x, y, "Lives: ", HUD);
        fb.put_u32(end, y, snap.lives as u32, HUD);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        text: &str,
    ) {
        let maze_w = snap.width * self.cell_w;
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(maze_w.saturating_sub(text_w) / 2);
        let y = start_y.saturating_add(snap.height / 2);
        fb.put_str(x, y, text, OVERLAY);
    }
}
