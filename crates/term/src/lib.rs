//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: views draw plain state into a
//! framebuffer of styled cells, and the renderer flushes only the cells that
//! changed since the previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep views pure so they can be asserted on cell by cell
//! - Stick to the eight basic colors so any color terminal works

pub mod fb;
pub mod game_view;
pub mod menu_view;
pub mod renderer;

pub use tui_pacman_core as core;
pub use tui_pacman_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Paint};
pub use game_view::{player_glyph, AnchorY, GameView, Viewport};
pub use menu_view::{MenuLayout, MenuView};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
