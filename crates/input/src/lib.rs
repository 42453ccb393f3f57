//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] while
//! playing and [`crate::types::MenuAction`] on the start menu. Steering is
//! latched by the game (a key sets the heading until the next key), so no
//! repeat or release handling is needed here.

pub mod map;

pub use tui_pacman_types as types;

pub use map::{handle_key_event, handle_menu_key, is_press, should_quit};
