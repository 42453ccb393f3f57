//! Entities that move through the maze: the player and the ghosts.

use crate::types::{Direction, GhostColor, Position, GHOST_CADENCE, PLAYER_CADENCE};

/// The player-controlled Pacman
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    pub pos: Position,
    pub dir: Direction,
    /// Ticks between moves
    pub cadence: u32,
    pub mouth_open: bool,
}

impl Player {
    pub const SPAWN_DIRECTION: Direction = Direction::Right;

    pub fn new(spawn: Position) -> Self {
        Self {
            pos: spawn,
            dir: Self::SPAWN_DIRECTION,
            cadence: PLAYER_CADENCE,
            mouth_open: false,
        }
    }

    /// Put the player back on its spawn cell, facing the spawn direction.
    pub fn respawn(&mut self, spawn: Position) {
        self.pos = spawn;
        self.dir = Self::SPAWN_DIRECTION;
    }
}

/// A wandering ghost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ghost {
    pub pos: Position,
    pub dir: Direction,
    /// Ticks between moves; shrinks by one per cleared level
    pub cadence: u32,
    pub color: GhostColor,
    /// Standing on a pellet cell. Ghosts never eat; the pellet stays in the
    /// maze underneath.
    pub over_pellet: bool,
    /// Reserved for frightened mode; never set by the current rules.
    pub is_eaten: bool,
}

impl Ghost {
    pub fn new(index: usize, spawn: Position) -> Self {
        Self {
            pos: spawn,
            dir: Self::spawn_direction(index),
            cadence: GHOST_CADENCE,
            color: GhostColor::for_index(index),
            over_pellet: false,
            is_eaten: false,
        }
    }

    /// The first two ghosts start heading up, the others down.
    pub fn spawn_direction(index: usize) -> Direction {
        if index < 2 {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    /// Put the ghost back on its spawn cell. Cadence is kept.
    pub fn respawn(&mut self, index: usize, spawn: Position) {
        self.pos = spawn;
        self.dir = Self::spawn_direction(index);
        self.over_pellet = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_defaults() {
        let p = Player::new(Position::new(3, 4));
        assert_eq!(p.pos, Position::new(3, 4));
        assert_eq!(p.dir, Direction::Right);
        assert_eq!(p.cadence, PLAYER_CADENCE);
        assert!(!p.mouth_open);
    }

    #[test]
    fn test_ghost_spawn_directions_and_colors() {
        let ghosts: Vec<Ghost> = (0..4).map(|i| Ghost::new(i, Position::new(i as i16, 0))).collect();
        assert_eq!(ghosts[0].dir, Direction::Up);
        assert_eq!(ghosts[1].dir, Direction::Up);
        assert_eq!(ghosts[2].dir, Direction::Down);
        assert_eq!(ghosts[3].dir, Direction::Down);
        assert_eq!(ghosts[1].color, GhostColor::Red);
        assert!(ghosts.iter().all(|g| g.cadence == GHOST_CADENCE && !g.is_eaten));
    }

    #[test]
    fn test_ghost_respawn_keeps_cadence() {
        let mut g = Ghost::new(2, Position::new(1, 1));
        g.cadence = 4;
        g.pos = Position::new(9, 9);
        g.dir = Direction::Left;
        g.over_pellet = true;

        g.respawn(2, Position::new(1, 1));
        assert_eq!(g.pos, Position::new(1, 1));
        assert_eq!(g.dir, Direction::Down);
        assert_eq!(g.cadence, 4);
        assert!(!g.over_pellet);
    }
}
