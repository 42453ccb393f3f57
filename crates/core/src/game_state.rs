//! Game state module - manages the complete game state
//!
//! This module ties together the maze, the player, the ghosts and the
//! counters (score, lives, level, consumed pellets). One call to
//! [`GameState::tick`] advances the logical clock by one step:
//!
//! 1. the tick counter increments and the mouth animation may flip,
//! 2. the player moves if its cadence divides the tick,
//! 3. each ghost, in spawn order, moves if its cadence divides the tick,
//! 4. the level-clear condition is checked.
//!
//! A catch or a clear ends the tick early and parks the game in
//! [`Phase::Caught`] or [`Phase::Cleared`] until [`GameState::resume`] is
//! called, which lets the terminal loop show the frame and pause first.

use arrayvec::ArrayVec;
use log::{debug, info};
use rand::Rng;

use crate::entity::{Ghost, Player};
use crate::maze::Maze;
use crate::snapshot::{GameSnapshot, GhostSnapshot, PlayerSnapshot};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    maze: Maze,
    player: Player,
    ghosts: ArrayVec<Ghost, MAX_GHOSTS>,
    /// Logical clock, wraps on overflow
    tick: u32,
    score: u32,
    lives: u8,
    level: u32,
    pellets_eaten: u32,
    phase: Phase,
}

impl GameState {
    /// Create a new game on `maze` with the default number of lives
    pub fn new(maze: Maze) -> Self {
        Self::with_lives(maze, STARTING_LIVES)
    }

    /// Create a new game on `maze` starting with `lives` lives
    pub fn with_lives(maze: Maze, lives: u8) -> Self {
        let player = Player::new(maze.player_spawn());
        let ghosts = maze
            .ghost_spawns()
            .iter()
            .enumerate()
            .map(|(i, spawn)| Ghost::new(i, *spawn))
            .collect();

        Self {
            maze,
            player,
            ghosts,
            tick: 0,
            score: 0,
            lives,
            level: 1,
            pellets_eaten: 0,
            phase: if lives == 0 { Phase::Over } else { Phase::Playing },
        }
    }

    /// A fresh game on the built-in maze
    pub fn classic() -> Self {
        Self::new(Maze::classic())
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn ghosts(&self) -> &[Ghost] {
        &self.ghosts
    }

    pub fn tick_count(&self) -> u32 {
        self.tick
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn pellets_eaten(&self) -> u32 {
        self.pellets_eaten
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The player was caught and the round has not been resumed yet
    pub fn is_dead(&self) -> bool {
        matches!(self.phase, Phase::Caught | Phase::Over)
    }

    /// No lives left; the game loop should stop
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    /// Index of the ghost standing on `pos`, if any
    pub fn ghost_at(&self, pos: Position) -> Option<usize> {
        self.ghosts.iter().position(|g| g.pos == pos)
    }

    #[cfg(test)]
    pub(crate) fn maze_mut(&mut self) -> &mut Maze {
        &mut self.maze
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[cfg(test)]
    pub(crate) fn ghosts_mut(&mut self) -> &mut [Ghost] {
        &mut self.ghosts
    }

    /// Steer the player. The heading changes immediately; the move happens
    /// on the player's next cadence tick. Ignored once the game is over.
    pub fn apply_action(&mut self, action: GameAction) {
        if self.phase == Phase::Over {
            return;
        }
        self.player.dir = action.direction();
    }

    /// Advance the game by one tick.
    ///
    /// `rng` drives ghost redirection; any [`rand::Rng`] works, which keeps
    /// the simulation deterministic under test.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickEvent {
        match self.phase {
            Phase::Playing => {}
            Phase::Over => return TickEvent::GameOver { score: self.score },
            Phase::Caught | Phase::Cleared => return TickEvent::None,
        }

        self.tick = self.tick.wrapping_add(1);

        if self.tick % MOUTH_TOGGLE_TICKS == 0 {
            self.player.mouth_open = !self.player.mouth_open;
        }

        if self.tick % self.player.cadence == 0 && self.move_player() {
            return self.catch_player();
        }

        for idx in 0..self.ghosts.len() {
            if self.tick % self.ghosts[idx].cadence == 0 && self.move_ghost(idx, rng) {
                return self.catch_player();
            }
        }

        if self.maze.pellet_total() > 0 && self.pellets_eaten >= self.maze.pellet_total() {
            self.phase = Phase::Cleared;
            info!("level {} cleared with score {}", self.level, self.score);
            return TickEvent::LevelCleared { level: self.level };
        }

        TickEvent::None
    }

    /// Leave a `Caught` or `Cleared` pause.
    ///
    /// After a catch, the player and ghosts go back to their spawns. After a
    /// clear, the maze is rebuilt, the pellet counter resets, the level
    /// increments and every ghost gets one tick faster. The speed-up stops
    /// once a ghost reaches [`MIN_GHOST_CADENCE`]; later clears leave it there.
    ///
    /// Returns false if there was nothing to resume.
    pub fn resume(&mut self) -> bool {
        match self.phase {
            Phase::Caught => {
                self.respawn_all();
                self.phase = Phase::Playing;
                true
            }
            Phase::Cleared => {
                self.next_level();
                true
            }
            Phase::Playing | Phase::Over => false,
        }
    }

    /// Returns true if the player ran into a ghost.
    fn move_player(&mut self) -> bool {
        let target = self.maze.wrap(self.player.pos.step(self.player.dir));
        if self.maze.blocks_player(target) {
            return false;
        }

        self.player.pos = target;
        if self.ghost_at(target).is_some() {
            return true;
        }

        if self.maze.take_pellet(target) {
            self.score += PELLET_SCORE;
            self.pellets_eaten += 1;
        }
        false
    }

    /// Returns true if the ghost ran into the player.
    fn move_ghost<R: Rng + ?Sized>(&mut self, idx: usize, rng: &mut R) -> bool {
        let current = self.ghosts[idx];
        let target = self.maze.wrap(current.pos.step(current.dir));
        let blocked = self.maze.blocks_ghost(target)
            || self
                .ghosts
                .iter()
                .enumerate()
                .any(|(i, g)| i != idx && g.pos == target);

        let ghost = &mut self.ghosts[idx];
        if blocked {
            ghost.dir = Direction::from_index(rng.gen_range(0..Direction::ALL.len()));
            return false;
        }

        ghost.pos = target;
        ghost.over_pellet = self.maze.tile(target) == Some(Tile::Pellet);
        target == self.player.pos
    }

    fn catch_player(&mut self) -> TickEvent {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.phase = Phase::Over;
            info!("game over at level {} with score {}", self.level, self.score);
            TickEvent::GameOver { score: self.score }
        } else {
            self.phase = Phase::Caught;
            info!("player caught, {} lives left", self.lives);
            TickEvent::PlayerCaught {
                lives_left: self.lives,
            }
        }
    }

    fn respawn_all(&mut self) {
        self.player.respawn(self.maze.player_spawn());
        for (i, ghost) in self.ghosts.iter_mut().enumerate() {
            ghost.respawn(i, self.maze.ghost_spawns()[i]);
        }
    }

    /// Ghost cadence drops by one per level and holds at the floor.
    fn next_level(&mut self) {
        self.maze.reset();
        self.pellets_eaten = 0;
        self.level += 1;
        for ghost in self.ghosts.iter_mut() {
            ghost.cadence = ghost.cadence.saturating_sub(1).max(MIN_GHOST_CADENCE);
        }
        self.respawn_all();
        self.phase = Phase::Playing;
        debug!(
            "level {} starts, ghost cadence {:?}",
            self.level,
            self.ghosts.iter().map(|g| g.cadence).collect::<Vec<_>>()
        );
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.maze.width();
        out.height = self.maze.height();
        out.tiles.clear();
        out.tiles.extend_from_slice(self.maze.tiles());
        out.player = PlayerSnapshot::from(self.player);
        out.ghosts.clear();
        out.ghosts
            .extend(self.ghosts.iter().copied().map(GhostSnapshot::from));
        out.score = self.score;
        out.lives = self.lives;
        out.level = self.level;
        out.pellets_eaten = self.pellets_eaten;
        out.pellets_total = self.maze.pellet_total();
        out.tick = self.tick;
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;
    use rand::rngs::mock::StepRng;

    /// Tick until the player's next move has happened.
    fn run_player_move(state: &mut GameState, rng: &mut StepRng) -> TickEvent {
        loop {
            let ev = state.tick(rng);
            if state.tick_count() % state.player().cadence == 0 || ev != TickEvent::None {
                return ev;
            }
        }
    }

    fn corridor() -> GameState {
        // Ghost far away behind walls so it never interferes.
        let maze = Maze::parse(&["#######", "#P...##", "#######", "#G    #", "#######"], None)
            .unwrap();
        GameState::new(maze)
    }

    #[test]
    fn test_new_game_counters() {
        let state = GameState::classic();
        assert_eq!(state.score(), 0);
        assert_eq!(state.lives(), STARTING_LIVES);
        assert_eq!(state.level(), 1);
        assert_eq!(state.pellets_eaten(), 0);
        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.ghosts().len(), 4);
        assert_eq!(state.player().dir, Direction::Right);
    }

    #[test]
    fn test_player_eats_pellet() {
        let mut state = corridor();
        let mut rng = StepRng::new(0, 0);

        run_player_move(&mut state, &mut rng);
        assert_eq!(state.player().pos, Position::new(2, 1));
        assert_eq!(state.score(), PELLET_SCORE);
        assert_eq!(state.pellets_eaten(), 1);
        assert_eq!(state.maze().tile(Position::new(2, 1)), Some(Tile::Empty));
    }

    #[test]
    fn test_player_reverts_on_wall() {
        let mut state = corridor();
        let mut rng = StepRng::new(0, 0);
        state.apply_action(GameAction::MoveUp);

        let before = state.player().pos;
        run_player_move(&mut state, &mut rng);
        assert_eq!(state.player().pos, before);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_mouth_toggles_every_five_ticks() {
        let mut state = corridor();
        let mut rng = StepRng::new(0, 0);
        for _ in 0..4 {
            state.tick(&mut rng);
        }
        assert!(!state.player().mouth_open);
        state.tick(&mut rng);
        assert!(state.player().mouth_open);
        for _ in 0..5 {
            state.tick(&mut rng);
        }
        assert!(!state.player().mouth_open);
    }

    #[test]
    fn test_ghost_redirects_deterministically() {
        // Ghost boxed in on all sides; StepRng(0, 0) always yields index 0 (Left).
        let maze = Maze::parse(&["#####", "#P###", "##G##", "#####"], None).unwrap();
        let mut state = GameState::new(maze);
        let mut rng = StepRng::new(0, 0);

        let spawn = state.ghosts()[0].pos;
        for _ in 0..GHOST_CADENCE {
            state.tick(&mut rng);
        }
        assert_eq!(state.ghosts()[0].pos, spawn);
        assert_eq!(state.ghosts()[0].dir, Direction::Left);
    }

    #[test]
    fn test_ghost_flags_pellet_without_eating_it() {
        let maze = Maze::parse(&["#####", "#P###", "#.###", "#G###", "#####"], None).unwrap();
        let mut state = GameState::new(maze);
        let mut rng = SimpleRng::new(1);
        state.ghosts_mut()[0].cadence = 1;
        state.player_mut().cadence = 1000;

        state.tick(&mut rng);
        let ghost = state.ghosts()[0];
        assert_eq!(ghost.pos, Position::new(1, 2));
        assert!(ghost.over_pellet);
        assert_eq!(state.maze().tile(Position::new(1, 2)), Some(Tile::Pellet));
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_ghost_leaving_pellet_clears_flag_and_leaves_pellet() {
        let maze = Maze::parse(&["######", "#P####", "##G. #", "######"], None).unwrap();
        let mut state = GameState::new(maze);
        let mut rng = StepRng::new(0, 0);
        state.player_mut().cadence = 1000;
        state.ghosts_mut()[0].cadence = 1;
        state.ghosts_mut()[0].dir = Direction::Right;

        state.tick(&mut rng);
        assert_eq!(state.ghosts()[0].pos, Position::new(3, 2));
        assert!(state.ghosts()[0].over_pellet);

        state.tick(&mut rng);
        let ghost = state.ghosts()[0];
        assert_eq!(ghost.pos, Position::new(4, 2));
        assert!(!ghost.over_pellet);
        assert_eq!(state.maze().tile(Position::new(3, 2)), Some(Tile::Pellet));
        assert_eq!(state.maze().pellets_remaining(), 1);
        assert_eq!(state.pellets_eaten(), 0);
    }

    #[test]
    fn test_ghost_wraps_through_tunnel() {
        let maze = Maze::parse(&["#####", "#P###", "#####", "  G .", "#####"], Some(3)).unwrap();
        let mut state = GameState::new(maze);
        let mut rng = StepRng::new(0, 0);
        state.player_mut().cadence = 1000;
        state.ghosts_mut()[0].cadence = 1;
        state.ghosts_mut()[0].dir = Direction::Left;

        state.tick(&mut rng);
        state.tick(&mut rng);
        assert_eq!(state.ghosts()[0].pos, Position::new(0, 3));

        state.tick(&mut rng);
        let ghost = state.ghosts()[0];
        assert_eq!(ghost.pos, Position::new(4, 3));
        assert_eq!(ghost.dir, Direction::Left);
        assert!(ghost.over_pellet);

        state.tick(&mut rng);
        assert_eq!(state.ghosts()[0].pos, Position::new(3, 3));
        assert!(!state.ghosts()[0].over_pellet);
        assert_eq!(state.maze().tile(Position::new(4, 3)), Some(Tile::Pellet));
    }

    #[test]
    fn test_ghost_catches_player() {
        let maze = Maze::parse(&["#####", "#P###", "# ###", "#G###", "#####"], None).unwrap();
        let mut state = GameState::new(maze);
        let mut rng = StepRng::new(0, 0);
        state.ghosts_mut()[0].cadence = 1;
        state.player_mut().cadence = 1000;

        assert_eq!(state.tick(&mut rng), TickEvent::None);
        assert_eq!(
            state.tick(&mut rng),
            TickEvent::PlayerCaught {
                lives_left: STARTING_LIVES - 1
            }
        );
        assert!(state.is_dead());
        assert_eq!(state.phase(), Phase::Caught);

        // Frozen until resumed.
        let tick = state.tick_count();
        assert_eq!(state.tick(&mut rng), TickEvent::None);
        assert_eq!(state.tick_count(), tick);

        assert!(state.resume());
        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.player().pos, Position::new(1, 1));
        assert_eq!(state.ghosts()[0].pos, Position::new(1, 3));
        assert_eq!(state.ghosts()[0].dir, Direction::Up);
    }

    #[test]
    fn test_player_walks_into_ghost() {
        let maze = Maze::parse(&["#####", "#PG##", "#####"], None).unwrap();
        let mut state = GameState::new(maze);
        let mut rng = StepRng::new(0, 0);
        state.ghosts_mut()[0].cadence = 1000;

        let ev = run_player_move(&mut state, &mut rng);
        assert_eq!(
            ev,
            TickEvent::PlayerCaught {
                lives_left: STARTING_LIVES - 1
            }
        );
    }

    #[test]
    fn test_ghosts_do_not_stack() {
        let maze = Maze::parse(&["######", "#P####", "#GG###", "######"], None).unwrap();
        let mut state = GameState::new(maze);
        let mut rng = StepRng::new(0, 0);
        state.player_mut().cadence = 1000;
        for g in state.ghosts_mut() {
            g.cadence = 1;
        }
        state.ghosts_mut()[0].dir = Direction::Right;
        state.ghosts_mut()[1].dir = Direction::Down;

        state.tick(&mut rng);
        assert_eq!(state.ghosts()[0].pos, Position::new(1, 2));
        assert_eq!(state.ghosts()[0].dir, Direction::Left);
        assert_eq!(state.ghosts()[1].pos, Position::new(2, 2));
    }

    #[test]
    fn test_level_clear_and_resume() {
        let maze = Maze::parse(&["#####", "#P..#", "#####", "#G  #", "#####"], None).unwrap();
        let mut state = GameState::new(maze);
        let mut rng = StepRng::new(0, 0);

        run_player_move(&mut state, &mut rng);
        assert_eq!(state.phase(), Phase::Playing);
        let ev = run_player_move(&mut state, &mut rng);
        assert_eq!(ev, TickEvent::LevelCleared { level: 1 });
        assert_eq!(state.phase(), Phase::Cleared);

        let cadence_before = state.ghosts()[0].cadence;
        assert!(state.resume());
        assert_eq!(state.level(), 2);
        assert_eq!(state.pellets_eaten(), 0);
        assert_eq!(state.maze().pellets_remaining(), 2);
        assert_eq!(state.player().pos, Position::new(1, 1));
        assert!(state.ghosts()[0].cadence < cadence_before);
        assert_eq!(state.score(), 2 * PELLET_SCORE);
    }

    #[test]
    fn test_ghost_cadence_floor() {
        let maze = Maze::parse(&["P.", "G "], None).unwrap();
        let mut state = GameState::new(maze);
        state.ghosts_mut()[0].cadence = MIN_GHOST_CADENCE + 1;
        state.phase = Phase::Cleared;
        state.resume();
        assert_eq!(state.ghosts()[0].cadence, MIN_GHOST_CADENCE);

        // The ramp holds at the floor.
        state.phase = Phase::Cleared;
        state.resume();
        assert_eq!(state.ghosts()[0].cadence, MIN_GHOST_CADENCE);
        assert_eq!(state.level(), 3);
    }

    #[test]
    fn test_last_life_ends_game() {
        let maze = Maze::parse(&["#####", "#PG##", "#####"], None).unwrap();
        let mut state = GameState::with_lives(maze, 1);
        let mut rng = StepRng::new(0, 0);
        state.ghosts_mut()[0].cadence = 1000;

        let ev = run_player_move(&mut state, &mut rng);
        assert_eq!(ev, TickEvent::GameOver { score: 0 });
        assert!(state.is_over());
        assert!(!state.resume());

        state.apply_action(GameAction::MoveLeft);
        assert_eq!(state.player().dir, Direction::Right);
        assert_eq!(state.tick(&mut rng), TickEvent::GameOver { score: 0 });
    }

    #[test]
    fn test_tunnel_wrap_scores_pellet_at_far_edge() {
        let maze = Maze::parse(&["#####", "P   .", "#####", "#G  #", "#####"], Some(1)).unwrap();
        let mut state = GameState::new(maze);
        let mut rng = StepRng::new(0, 0);
        state.apply_action(GameAction::MoveLeft);

        run_player_move(&mut state, &mut rng);
        assert_eq!(state.player().pos, Position::new(4, 1));
        assert_eq!(state.score(), PELLET_SCORE);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::classic();
        state.maze_mut().take_pellet(Position::new(2, 2));
        let snap = state.snapshot();
        assert_eq!(snap.width, state.maze().width());
        assert_eq!(snap.tiles.len(), state.maze().tiles().len());
        assert_eq!(snap.tile(2, 2), Tile::Empty);
        assert_eq!(snap.tile(1, 1), Tile::Wall);
        assert_eq!(snap.ghosts.len(), 4);
        assert_eq!(snap.player.pos, Position::new(15, 24));
        assert_eq!(snap.pellets_total, 244);
        assert!(snap.playable());
    }
}
