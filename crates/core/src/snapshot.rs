use arrayvec::ArrayVec;

use crate::entity::{Ghost, Player};
use crate::types::{Direction, GhostColor, Phase, Position, Tile, MAX_GHOSTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerSnapshot {
    pub pos: Position,
    pub dir: Direction,
    pub mouth_open: bool,
}

impl From<Player> for PlayerSnapshot {
    fn from(value: Player) -> Self {
        Self {
            pos: value.pos,
            dir: value.dir,
            mouth_open: value.mouth_open,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GhostSnapshot {
    pub pos: Position,
    pub dir: Direction,
    pub color: GhostColor,
    pub over_pellet: bool,
    pub cadence: u32,
}

impl From<Ghost> for GhostSnapshot {
    fn from(value: Ghost) -> Self {
        Self {
            pos: value.pos,
            dir: value.dir,
            color: value.color,
            over_pellet: value.over_pellet,
            cadence: value.cadence,
        }
    }
}

/// Everything a view needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major maze cells
    pub tiles: Vec<Tile>,
    pub player: PlayerSnapshot,
    pub ghosts: ArrayVec<GhostSnapshot, MAX_GHOSTS>,
    pub score: u32,
    pub lives: u8,
    pub level: u32,
    pub pellets_eaten: u32,
    pub pellets_total: u32,
    pub tick: u32,
    pub phase: Phase,
}

impl GameSnapshot {
    /// Tile at (x, y); anything outside the grid reads as a wall.
    pub fn tile(&self, x: u16, y: u16) -> Tile {
        if x >= self.width || y >= self.height {
            return Tile::Wall;
        }
        self.tiles
            .get(y as usize * self.width as usize + x as usize)
            .copied()
            .unwrap_or(Tile::Wall)
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            tiles: Vec::new(),
            player: PlayerSnapshot {
                pos: Position::default(),
                dir: Direction::Right,
                mouth_open: false,
            },
            ghosts: ArrayVec::new(),
            score: 0,
            lives: 0,
            level: 0,
            pellets_eaten: 0,
            pellets_total: 0,
            tick: 0,
            phase: Phase::Playing,
        }
    }
}
