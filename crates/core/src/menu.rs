//! Start menu state: the highlighted choice plus the decorative runner.
//!
//! The runner is a little Pacman that walks along a row of
//! [`MENU_PELLETS`] pellets, eating them, turns around after the last one,
//! walks back, and refills the row when it is home again. It has no effect
//! on the game; it only gives the menu something to animate.

use crate::types::{
    Direction, MenuAction, MenuChoice, MENU_PELLETS, MOUTH_TOGGLE_TICKS, PLAYER_CADENCE,
};

const PELLETS: usize = MENU_PELLETS as usize;

/// The animated runner on the menu's pellet row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRunner {
    /// Cells from the start of the row; pellets sit on offsets 1..=MENU_PELLETS
    offset: u16,
    dir: Direction,
    mouth_open: bool,
    eaten: [bool; PELLETS],
}

impl MenuRunner {
    pub fn new() -> Self {
        Self {
            offset: 0,
            dir: Direction::Right,
            mouth_open: false,
            eaten: [false; PELLETS],
        }
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn dir(&self) -> Direction {
        self.dir
    }

    pub fn mouth_open(&self) -> bool {
        self.mouth_open
    }

    /// Whether pellet `i` (0-based, drawn at offset `i + 1`) is still there
    pub fn pellet_present(&self, i: usize) -> bool {
        i < PELLETS && !self.eaten[i]
    }

    fn advance(&mut self, tick: u32) {
        if tick % MOUTH_TOGGLE_TICKS == 0 {
            self.mouth_open = !self.mouth_open;
        }
        if tick % PLAYER_CADENCE != 0 {
            return;
        }

        match self.dir {
            Direction::Right => self.offset += 1,
            _ => self.offset = self.offset.saturating_sub(1),
        }
        if (1..=MENU_PELLETS).contains(&self.offset) {
            self.eaten[self.offset as usize - 1] = true;
        }

        if self.offset > MENU_PELLETS {
            self.dir = Direction::Left;
        } else if self.offset == 0 {
            self.dir = Direction::Right;
            self.eaten = [false; PELLETS];
        }
    }
}

impl Default for MenuRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Start menu
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Menu {
    highlight: usize,
    tick: u32,
    runner: MenuRunner,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn choices(&self) -> &'static [MenuChoice] {
        &MenuChoice::ALL
    }

    /// Index of the highlighted choice, always within `choices()`
    pub fn highlight(&self) -> usize {
        self.highlight
    }

    pub fn selected(&self) -> MenuChoice {
        MenuChoice::ALL[self.highlight]
    }

    pub fn runner(&self) -> &MenuRunner {
        &self.runner
    }

    /// Apply one key. Up/Down move the highlight and clamp at the ends;
    /// Confirm returns the highlighted choice.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pacman_core::Menu;
    /// use tui_pacman_types::{MenuAction, MenuChoice};
    ///
    /// let mut menu = Menu::new();
    /// assert_eq!(menu.handle(MenuAction::Up), None);
    /// menu.handle(MenuAction::Down);
    /// menu.handle(MenuAction::Down);
    /// assert_eq!(menu.handle(MenuAction::Confirm), Some(MenuChoice::Exit));
    /// ```
    pub fn handle(&mut self, action: MenuAction) -> Option<MenuChoice> {
        match action {
            MenuAction::Up => {
                self.highlight = self.highlight.saturating_sub(1);
                None
            }
            MenuAction::Down => {
                self.highlight = (self.highlight + 1).min(MenuChoice::ALL.len() - 1);
                None
            }
            MenuAction::Confirm => Some(self.selected()),
        }
    }

    /// Advance the runner animation by one tick.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.runner.advance(self.tick);
    }
}
