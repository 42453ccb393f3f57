//! TUI Pacman (workspace facade crate).
//!
//! The game lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_pacman::{core,input,term,types}` and adds the
//! pieces only the binary needs: environment configuration and the startup
//! checks.

pub use tui_pacman_core as core;
pub use tui_pacman_input as input;
pub use tui_pacman_term as term;
pub use tui_pacman_types as types;

pub mod config;
pub mod game_loop;
pub mod startup;
