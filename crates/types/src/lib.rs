//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Maze Dimensions
//!
//! The built-in maze is a fixed, hand-authored layout:
//!
//! - **Width**: 30 columns (indexed 0-29)
//! - **Height**: 33 rows (indexed 0-32)
//! - **Tunnel row**: 15 (the only row where entities wrap horizontally)
//! - **HUD**: drawn on the row just below the maze
//!
//! # Game Timing Constants
//!
//! The game clock is a tick counter. Timing values are in ticks unless the
//! name ends in `_MS`:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 20 | Fixed timestep interval |
//! | `PLAYER_CADENCE` | 10 | Ticks between player moves |
//! | `GHOST_CADENCE` | 10 | Ticks between ghost moves at level 1 |
//! | `MIN_GHOST_CADENCE` | 1 | Fastest ghost cadence the level ramp reaches |
//! | `MOUTH_TOGGLE_TICKS` | 5 | Mouth animation period |
//! | `DEATH_PAUSE_MS` | 1000 | Pause after the player is caught |
//! | `LEVEL_PAUSE_MS` | 1000 | Pause after the maze is cleared |
//! | `MENU_CONFIRM_PAUSE_MS` | 150 | Pause after a menu choice is confirmed |
//!
//! # Examples
//!
//! ```
//! use tui_pacman_types::{Direction, GameAction, Position, MAZE_HEIGHT, MAZE_WIDTH};
//!
//! // Step a position and come back
//! let start = Position::new(4, 7);
//! let moved = start.step(Direction::Left);
//! assert_eq!(moved, Position::new(3, 7));
//! assert_eq!(moved.step(Direction::Left.opposite()), start);
//!
//! // Steering actions map onto headings
//! assert_eq!(GameAction::MoveUp.direction(), Direction::Up);
//! assert_eq!(GameAction::MoveLeft.direction().opposite(), Direction::Right);
//!
//! // Maze dimensions
//! assert_eq!(MAZE_WIDTH, 30);
//! assert_eq!(MAZE_HEIGHT, 33);
//! ```

/// Maze width in cells (30 columns)
pub const MAZE_WIDTH: u16 = 30;

/// Maze height in cells (33 rows)
pub const MAZE_HEIGHT: u16 = 33;

/// Row of the built-in maze where the horizontal tunnel wraps.
pub const TUNNEL_ROW: i16 = 15;

/// Smallest terminal the game accepts (columns).
pub const MIN_TERMINAL_WIDTH: u16 = 30;

/// Smallest terminal the game accepts (rows): maze plus HUD plus slack.
pub const MIN_TERMINAL_HEIGHT: u16 = 35;

/// Minimum number of colors the terminal must report.
pub const MIN_TERMINAL_COLORS: u16 = 8;

/// Fixed timestep interval in milliseconds
pub const TICK_MS: u32 = 20;

/// Ticks between player moves
pub const PLAYER_CADENCE: u32 = 10;

/// Ticks between ghost moves on the first level
pub const GHOST_CADENCE: u32 = 10;

/// Floor for the ghost cadence after repeated level clears
pub const MIN_GHOST_CADENCE: u32 = 1;

/// The player's mouth flips open/closed every this many ticks
pub const MOUTH_TOGGLE_TICKS: u32 = 5;

/// Points awarded per pellet
pub const PELLET_SCORE: u32 = 10;

/// Lives at the start of a game
pub const STARTING_LIVES: u8 = 3;

/// Maximum number of ghosts a maze may spawn
pub const MAX_GHOSTS: usize = 4;

/// Pause after the player is caught (1000ms)
pub const DEATH_PAUSE_MS: u32 = 1000;

/// Pause after the maze is cleared (1000ms)
pub const LEVEL_PAUSE_MS: u32 = 1000;

/// Pause after a menu choice is confirmed (150ms)
pub const MENU_CONFIRM_PAUSE_MS: u32 = 150;

/// Number of pellets on the menu's decorative runner row
pub const MENU_PELLETS: u16 = 19;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(TICK_MS, 20);
        assert_eq!(PLAYER_CADENCE, 10);
        assert_eq!(GHOST_CADENCE, 10);
        assert_eq!(MOUTH_TOGGLE_TICKS, 5);
        assert!(MIN_GHOST_CADENCE >= 1);
        assert!(MIN_GHOST_CADENCE < GHOST_CADENCE);
    }

    #[test]
    fn terminal_fits_maze_and_hud() {
        assert!(MIN_TERMINAL_WIDTH >= MAZE_WIDTH);
        assert!(MIN_TERMINAL_HEIGHT > MAZE_HEIGHT);
    }

    #[test]
    fn direction_inverse_returns_to_origin() {
        let origin = Position::new(10, 10);
        for dir in Direction::ALL {
            assert_eq!(origin.step(dir).step(dir.opposite()), origin);
            assert_ne!(origin.step(dir), origin);
        }
    }

    #[test]
    fn direction_index_roundtrip() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
            assert_eq!(Direction::from_index(i), *dir);
        }
        assert_eq!(Direction::from_index(6), Direction::Right);
    }

    #[test]
    fn game_actions_steer_each_direction() {
        let actions = [
            GameAction::MoveLeft,
            GameAction::MoveUp,
            GameAction::MoveRight,
            GameAction::MoveDown,
        ];
        let dirs: Vec<Direction> = actions.iter().map(|a| a.direction()).collect();
        assert_eq!(dirs, Direction::ALL);
    }

    #[test]
    fn layout_chars_map_to_tiles() {
        assert_eq!(Tile::from_layout_char('#'), Some(Tile::Wall));
        assert_eq!(Tile::from_layout_char('.'), Some(Tile::Pellet));
        assert_eq!(Tile::from_layout_char(' '), Some(Tile::Empty));
        assert_eq!(Tile::from_layout_char('-'), Some(Tile::Gate));
        assert_eq!(Tile::from_layout_char('P'), Some(Tile::Empty));
        assert_eq!(Tile::from_layout_char('G'), Some(Tile::Empty));
        assert_eq!(Tile::from_layout_char('x'), None);
    }

    #[test]
    fn ghost_colors_cycle_by_spawn_index() {
        assert_eq!(GhostColor::for_index(0), GhostColor::Cyan);
        assert_eq!(GhostColor::for_index(1), GhostColor::Red);
        assert_eq!(GhostColor::for_index(2), GhostColor::Green);
        assert_eq!(GhostColor::for_index(3), GhostColor::Magenta);
        assert_eq!(GhostColor::for_index(4), GhostColor::Cyan);
    }
}

/// The four cardinal directions
///
/// The declaration order (Left, Up, Right, Down) is significant: it indexes
/// the player glyph table and the uniform random redirection of ghosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// All directions in declaration order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Per-step (dx, dy) delta. `y` grows downwards.
    pub fn delta(self) -> (i16, i16) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }

    /// The direction pointing the other way
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pacman_types::Direction;
    ///
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// ```
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
        }
    }

    /// Position of this direction in [`Direction::ALL`]
    pub fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Up => 1,
            Direction::Right => 2,
            Direction::Down => 3,
        }
    }

    /// Direction at `i` modulo 4
    pub fn from_index(i: usize) -> Self {
        Self::ALL[i % 4]
    }
}

/// Integer grid coordinate
///
/// Signed so a step off the left or top edge is representable before the
/// maze wraps or rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Position one cell away in `dir`
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A cell of the logical maze grid
///
/// - **Wall**: blocks everyone
/// - **Empty**: open floor
/// - **Pellet**: open floor with food on it
/// - **Gate**: ghost-house door, open to ghosts and closed to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    Wall,
    #[default]
    Empty,
    Pellet,
    Gate,
}

impl Tile {
    /// Map a maze layout character to its tile.
    ///
    /// Spawn markers (`P`, `G`) stand on empty floor.
    pub fn from_layout_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Tile::Wall),
            '.' => Some(Tile::Pellet),
            '-' => Some(Tile::Gate),
            ' ' | 'P' | 'G' => Some(Tile::Empty),
            _ => None,
        }
    }

    pub fn blocks_player(self) -> bool {
        matches!(self, Tile::Wall | Tile::Gate)
    }

    pub fn blocks_ghost(self) -> bool {
        matches!(self, Tile::Wall)
    }
}

/// Display color assigned to a ghost by spawn index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GhostColor {
    Cyan,
    Red,
    Green,
    Magenta,
}

impl GhostColor {
    pub const ALL: [GhostColor; 4] = [
        GhostColor::Cyan,
        GhostColor::Red,
        GhostColor::Green,
        GhostColor::Magenta,
    ];

    pub fn for_index(i: usize) -> Self {
        Self::ALL[i % Self::ALL.len()]
    }
}

/// Game actions that steer the player
///
/// Steering only changes the player's heading; the move itself happens on
/// the player's next cadence tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveUp,
    MoveRight,
    MoveDown,
}

impl GameAction {
    pub fn direction(self) -> Direction {
        match self {
            GameAction::MoveLeft => Direction::Left,
            GameAction::MoveUp => Direction::Up,
            GameAction::MoveRight => Direction::Right,
            GameAction::MoveDown => Direction::Down,
        }
    }
}

/// Start menu navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Up,
    Down,
    Confirm,
}

/// Start menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Start,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 2] = [MenuChoice::Start, MenuChoice::Exit];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Start => "Start",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Lifecycle of a round
///
/// - **Playing**: ticks advance the simulation
/// - **Caught**: a ghost reached the player; waiting for `resume` to respawn
/// - **Cleared**: every pellet eaten; waiting for `resume` to start the next level
/// - **Over**: no lives left; ticks are no-ops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Playing,
    Caught,
    Cleared,
    Over,
}

/// What a single tick produced
///
/// The terminal loop uses this to decide whether to pause and resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Nothing noteworthy
    None,
    /// A ghost and the player met; lives were decremented and some remain
    PlayerCaught { lives_left: u8 },
    /// All pellets of the current maze are eaten
    LevelCleared { level: u32 },
    /// The last life was lost
    GameOver { score: u32 },
}
