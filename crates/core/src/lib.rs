//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: The same maze, inputs and random source produce identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, headless, benchmarks)
//!
//! # Module Structure
//!
//! - [`maze`]: Logical tile grid parsed from a character layout, with the tunnel wrap
//! - [`entity`]: The player and the ghosts
//! - [`game_state`]: Score, lives, level and the per-tick update
//! - [`menu`]: Start menu highlight and its animated runner
//! - [`rng`]: Seedable LCG used for ghost redirection
//! - [`snapshot`]: Plain copy of the state for the views
//!
//! # Game Rules
//!
//! - **Cadence**: an entity moves only on ticks its cadence divides
//! - **Walls**: a move into a wall is reverted; the ghost-house gate stops only the player
//! - **Ghosts**: wander straight ahead and pick a random heading when blocked
//! - **Pellets**: worth 10 points; clearing all of them advances the level and speeds up ghosts
//! - **Lives**: a ghost touching the player costs one life; zero lives ends the game
//!
//! # Example
//!
//! ```
//! use tui_pacman_core::{GameState, SimpleRng};
//! use tui_pacman_types::{GameAction, TickEvent};
//!
//! let mut game = GameState::classic();
//! let mut rng = SimpleRng::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! for _ in 0..10 {
//!     assert_eq!(game.tick(&mut rng), TickEvent::None);
//! }
//!
//! // The player moved one cell right onto a pellet
//! assert_eq!(game.score(), 10);
//! ```

pub mod entity;
pub mod game_state;
pub mod maze;
pub mod menu;
pub mod rng;
pub mod snapshot;

pub use tui_pacman_types as types;

// Re-export commonly used types for convenience
pub use entity::{Ghost, Player};
pub use game_state::GameState;
pub use maze::{Maze, MazeError, CLASSIC_LAYOUT};
pub use menu::{Menu, MenuRunner};
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, GhostSnapshot, PlayerSnapshot};
