//! Maze module - the logical tile grid
//!
//! The maze is parsed from a hand-authored character layout and is the
//! single source of truth for walls, the ghost-house gate and pellets.
//! Rendering reads from it; it never reads from the screen.
//!
//! Layout characters:
//!
//! | Char | Meaning |
//! |------|---------|
//! | `#` | wall |
//! | `.` | pellet |
//! | ` ` | empty floor |
//! | `-` | ghost-house gate (ghosts only) |
//! | `P` | player spawn (empty floor) |
//! | `G` | ghost spawn (empty floor), up to four, row-major order |
//!
//! Coordinates: (x, y) with x growing rightwards and y downwards. Cells are
//! stored in a flat row-major vector (`y * width + x`).

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{Position, Tile, MAX_GHOSTS, TUNNEL_ROW};

/// Built-in maze: the arcade layout framed by a one-cell margin.
///
/// Rows 14 and 16 are closed at the edges so the tunnel on row 15 cannot be
/// used to reach the margin.
#[rustfmt::skip]
pub const CLASSIC_LAYOUT: [&str; 33] = [
    "                              ",
    " ############################ ",
    " #............##............# ",
    " #.####.#####.##.#####.####.# ",
    " #.####.#####.##.#####.####.# ",
    " #.####.#####.##.#####.####.# ",
    " #..........................# ",
    " #.####.##.########.##.####.# ",
    " #.####.##.########.##.####.# ",
    " #......##....##....##......# ",
    " ######.##### ## #####.###### ",
    "      #.##### ## #####.#      ",
    "      #.##          ##.#      ",
    "      #.## ###--### ##.#      ",
    "#######.## #  GG  # ##.#######",
    "       .   #      #   .       ",
    "#######.## #  GG  # ##.#######",
    "      #.## ######## ##.#      ",
    "      #.##          ##.#      ",
    "      #.## ######## ##.#      ",
    " ######.## ######## ##.###### ",
    " #............##............# ",
    " #.####.#####.##.#####.####.# ",
    " #.####.#####.##.#####.####.# ",
    " #...##....... P.......##...# ",
    " ###.##.##.########.##.##.### ",
    " ###.##.##.########.##.##.### ",
    " #......##....##....##......# ",
    " #.##########.##.##########.# ",
    " #.##########.##.##########.# ",
    " #..........................# ",
    " ############################ ",
    "                              ",
];

/// Reasons a layout cannot become a maze
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    Empty,
    RaggedRow { row: usize, expected: usize, found: usize },
    UnknownGlyph { x: usize, y: usize, ch: char },
    MissingPlayerSpawn,
    DuplicatePlayerSpawn { x: usize, y: usize },
    TooManyGhosts,
    TunnelOutOfRange { row: i16 },
    TooLarge,
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::Empty => write!(f, "maze layout has no rows"),
            MazeError::RaggedRow { row, expected, found } => write!(
                f,
                "maze row {row} is {found} cells wide, expected {expected}"
            ),
            MazeError::UnknownGlyph { x, y, ch } => {
                write!(f, "unknown maze glyph {ch:?} at ({x}, {y})")
            }
            MazeError::MissingPlayerSpawn => write!(f, "maze has no player spawn 'P'"),
            MazeError::DuplicatePlayerSpawn { x, y } => {
                write!(f, "second player spawn at ({x}, {y})")
            }
            MazeError::TooManyGhosts => {
                write!(f, "maze has more than {MAX_GHOSTS} ghost spawns")
            }
            MazeError::TunnelOutOfRange { row } => {
                write!(f, "tunnel row {row} is outside the maze")
            }
            MazeError::TooLarge => write!(f, "maze does not fit a 16-bit grid"),
        }
    }
}

impl std::error::Error for MazeError {}

/// The logical maze grid
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    width: u16,
    height: u16,
    /// Live cells, row-major order (y * width + x)
    tiles: Vec<Tile>,
    /// Cells as parsed, used to restore pellets on a level reset
    pristine: Vec<Tile>,
    tunnel_row: Option<i16>,
    player_spawn: Position,
    ghost_spawns: ArrayVec<Position, MAX_GHOSTS>,
    pellet_total: u32,
}

impl Maze {
    /// The built-in arcade maze with its tunnel on [`TUNNEL_ROW`].
    pub fn classic() -> Self {
        Self::parse(&CLASSIC_LAYOUT, Some(TUNNEL_ROW)).expect("built-in maze layout is valid")
    }

    /// Parse a layout into a maze.
    ///
    /// `tunnel_row` designates the single row on which entities wrap from
    /// one edge to the other.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pacman_core::Maze;
    /// use tui_pacman_types::{Position, Tile};
    ///
    /// let maze = Maze::parse(&["#####", "#P.G#", "#####"], None).unwrap();
    /// assert_eq!(maze.pellet_total(), 1);
    /// assert_eq!(maze.player_spawn(), Position::new(1, 1));
    /// assert_eq!(maze.tile(Position::new(2, 1)), Some(Tile::Pellet));
    /// ```
    pub fn parse<S: AsRef<str>>(rows: &[S], tunnel_row: Option<i16>) -> Result<Self, MazeError> {
        let first = rows.first().ok_or(MazeError::Empty)?;
        let width = first.as_ref().chars().count();
        let height = rows.len();
        if width == 0 {
            return Err(MazeError::Empty);
        }
        if width > i16::MAX as usize || height > i16::MAX as usize {
            return Err(MazeError::TooLarge);
        }

        let mut tiles = Vec::with_capacity(width * height);
        let mut player_spawn = None;
        let mut ghost_spawns = ArrayVec::new();

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(MazeError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let tile = Tile::from_layout_char(ch).ok_or(MazeError::UnknownGlyph { x, y, ch })?;
                let pos = Position::new(x as i16, y as i16);
                match ch {
                    'P' => {
                        if player_spawn.is_some() {
                            return Err(MazeError::DuplicatePlayerSpawn { x, y });
                        }
                        player_spawn = Some(pos);
                    }
                    'G' => ghost_spawns
                        .try_push(pos)
                        .map_err(|_| MazeError::TooManyGhosts)?,
                    _ => {}
                }
                tiles.push(tile);
            }
        }

        if let Some(row) = tunnel_row {
            if row < 0 || row as usize >= height {
                return Err(MazeError::TunnelOutOfRange { row });
            }
        }

        let pellet_total = tiles.iter().filter(|t| **t == Tile::Pellet).count() as u32;

        Ok(Self {
            width: width as u16,
            height: height as u16,
            pristine: tiles.clone(),
            tiles,
            tunnel_row,
            player_spawn: player_spawn.ok_or(MazeError::MissingPlayerSpawn)?,
            ghost_spawns,
            pellet_total,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn tunnel_row(&self) -> Option<i16> {
        self.tunnel_row
    }

    pub fn player_spawn(&self) -> Position {
        self.player_spawn
    }

    pub fn ghost_spawns(&self) -> &[Position] {
        &self.ghost_spawns
    }

    /// Number of pellets in the layout (the level-clear target)
    pub fn pellet_total(&self) -> u32 {
        self.pellet_total
    }

    /// Number of pellets still on the grid
    pub fn pellets_remaining(&self) -> u32 {
        self.tiles.iter().filter(|t| **t == Tile::Pellet).count() as u32
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 || pos.x as u16 >= self.width || pos.y as u16 >= self.height {
            return None;
        }
        Some(pos.y as usize * self.width as usize + pos.x as usize)
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Tile at `pos`, or `None` outside the grid
    pub fn tile(&self, pos: Position) -> Option<Tile> {
        self.index(pos).map(|i| self.tiles[i])
    }

    /// Cells outside the grid block everyone.
    pub fn blocks_player(&self, pos: Position) -> bool {
        self.tile(pos).map_or(true, Tile::blocks_player)
    }

    pub fn blocks_ghost(&self, pos: Position) -> bool {
        self.tile(pos).map_or(true, Tile::blocks_ghost)
    }

    /// Remove the pellet at `pos`, returning whether there was one.
    pub fn take_pellet(&mut self, pos: Position) -> bool {
        match self.index(pos) {
            Some(i) if self.tiles[i] == Tile::Pellet => {
                self.tiles[i] = Tile::Empty;
                true
            }
            _ => false,
        }
    }

    /// Apply the tunnel wrap to a freshly stepped position.
    ///
    /// Only the tunnel row wraps; any other position is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pacman_core::Maze;
    /// use tui_pacman_types::Position;
    ///
    /// let maze = Maze::parse(&["#####", "  P  ", "#####"], Some(1)).unwrap();
    /// assert_eq!(maze.wrap(Position::new(-1, 1)), Position::new(4, 1));
    /// assert_eq!(maze.wrap(Position::new(5, 1)), Position::new(0, 1));
    /// assert_eq!(maze.wrap(Position::new(-1, 0)), Position::new(-1, 0));
    /// ```
    pub fn wrap(&self, pos: Position) -> Position {
        if self.tunnel_row != Some(pos.y) {
            return pos;
        }
        let w = self.width as i16;
        if pos.x < 0 {
            Position::new(w - 1, pos.y)
        } else if pos.x >= w {
            Position::new(0, pos.y)
        } else {
            pos
        }
    }

    /// Restore every cell (and so every pellet) to the parsed layout.
    pub fn reset(&mut self) {
        self.tiles.copy_from_slice(&self.pristine);
    }

    /// Row-major view of the live cells
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

impl Default for Maze {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MAZE_HEIGHT, MAZE_WIDTH};

    #[test]
    fn test_classic_dimensions_and_spawns() {
        let maze = Maze::classic();
        assert_eq!(maze.width(), MAZE_WIDTH);
        assert_eq!(maze.height(), MAZE_HEIGHT);
        assert_eq!(maze.player_spawn(), Position::new(15, 24));
        assert_eq!(
            maze.ghost_spawns(),
            &[
                Position::new(14, 14),
                Position::new(15, 14),
                Position::new(14, 16),
                Position::new(15, 16),
            ]
        );
        assert_eq!(maze.tunnel_row(), Some(15));
    }

    #[test]
    fn test_classic_pellet_total() {
        let maze = Maze::classic();
        assert_eq!(maze.pellet_total(), 244);
        assert_eq!(maze.pellets_remaining(), 244);
    }

    #[test]
    fn test_index_calculation() {
        let maze = Maze::parse(&["P..", "..."], None).unwrap();
        assert_eq!(maze.index(Position::new(0, 0)), Some(0));
        assert_eq!(maze.index(Position::new(2, 0)), Some(2));
        assert_eq!(maze.index(Position::new(0, 1)), Some(3));
        assert_eq!(maze.index(Position::new(-1, 0)), None);
        assert_eq!(maze.index(Position::new(3, 0)), None);
        assert_eq!(maze.index(Position::new(0, 2)), None);
    }

    #[test]
    fn test_out_of_bounds_blocks_everyone() {
        let maze = Maze::parse(&["P "], None).unwrap();
        assert!(maze.blocks_player(Position::new(-1, 0)));
        assert!(maze.blocks_ghost(Position::new(2, 0)));
        assert!(!maze.blocks_player(Position::new(1, 0)));
    }

    #[test]
    fn test_gate_blocks_player_only() {
        let maze = Maze::parse(&["P-G"], None).unwrap();
        let gate = Position::new(1, 0);
        assert!(maze.blocks_player(gate));
        assert!(!maze.blocks_ghost(gate));
    }

    #[test]
    fn test_take_pellet_and_reset() {
        let mut maze = Maze::parse(&["P.."], None).unwrap();
        assert!(maze.take_pellet(Position::new(1, 0)));
        assert!(!maze.take_pellet(Position::new(1, 0)));
        assert_eq!(maze.tile(Position::new(1, 0)), Some(Tile::Empty));
        assert_eq!(maze.pellets_remaining(), 1);
        assert_eq!(maze.pellet_total(), 2);

        maze.reset();
        assert_eq!(maze.tile(Position::new(1, 0)), Some(Tile::Pellet));
        assert_eq!(maze.pellets_remaining(), 2);
    }

    #[test]
    fn test_parse_errors() {
        let empty: [&str; 0] = [];
        assert_eq!(Maze::parse(&empty, None), Err(MazeError::Empty));
        assert_eq!(
            Maze::parse(&["P..", ".."], None),
            Err(MazeError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Maze::parse(&["P.x"], None),
            Err(MazeError::UnknownGlyph { x: 2, y: 0, ch: 'x' })
        );
        assert_eq!(Maze::parse(&["..."], None), Err(MazeError::MissingPlayerSpawn));
        assert_eq!(
            Maze::parse(&["P.P"], None),
            Err(MazeError::DuplicatePlayerSpawn { x: 2, y: 0 })
        );
        assert_eq!(Maze::parse(&["PGGGGG"], None), Err(MazeError::TooManyGhosts));
        assert_eq!(
            Maze::parse(&["P.."], Some(1)),
            Err(MazeError::TunnelOutOfRange { row: 1 })
        );
    }

    #[test]
    fn test_wrap_only_on_tunnel_row() {
        let maze = Maze::classic();
        let w = maze.width() as i16;
        assert_eq!(maze.wrap(Position::new(-1, TUNNEL_ROW)), Position::new(w - 1, TUNNEL_ROW));
        assert_eq!(maze.wrap(Position::new(w, TUNNEL_ROW)), Position::new(0, TUNNEL_ROW));
        assert_eq!(maze.wrap(Position::new(-1, 14)), Position::new(-1, 14));
    }

    #[test]
    fn test_tunnel_mouths_are_open_and_sealed_from_margin() {
        let maze = Maze::classic();
        let w = maze.width() as i16;
        assert!(!maze.blocks_player(Position::new(0, TUNNEL_ROW)));
        assert!(!maze.blocks_player(Position::new(w - 1, TUNNEL_ROW)));
        assert!(maze.blocks_player(Position::new(0, TUNNEL_ROW - 1)));
        assert!(maze.blocks_player(Position::new(0, TUNNEL_ROW + 1)));
        assert!(maze.blocks_player(Position::new(w - 1, TUNNEL_ROW - 1)));
        assert!(maze.blocks_player(Position::new(w - 1, TUNNEL_ROW + 1)));
    }
}
