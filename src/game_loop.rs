//! Fixed-timestep loops for the start menu and the game.
//!
//! Each iteration draws a frame, waits for one key event at most until the
//! next tick is due, then advances the state once the tick interval has
//! elapsed. Terminal access goes through [`Frontend`] so the loops can be
//! driven by scripted input in tests.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent};
use log::info;
use rand::Rng;

use crate::core::{GameSnapshot, GameState, Menu};
use crate::input::{handle_key_event, handle_menu_key, is_press, should_quit};
use crate::term::{FrameBuffer, GameView, MenuView, TerminalRenderer, Viewport};
use crate::types::{
    MenuChoice, TickEvent, DEATH_PAUSE_MS, LEVEL_PAUSE_MS, MENU_CONFIRM_PAUSE_MS,
};

/// Where the loops read keys from and draw to.
pub trait Frontend {
    /// Wait up to `timeout` for a key press.
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>>;
    fn draw_menu(&mut self, menu: &Menu) -> Result<()>;
    fn draw_game(&mut self, snap: &GameSnapshot) -> Result<()>;
    /// Hold the current frame on screen.
    fn pause(&mut self, ms: u32);
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// All lives lost
    Over { score: u32 },
    /// The player pressed Escape (or Ctrl+C)
    Quit { score: u32 },
}

impl GameOutcome {
    pub fn score(&self) -> u32 {
        match *self {
            GameOutcome::Over { score } | GameOutcome::Quit { score } => score,
        }
    }
}

/// Run the start menu until a choice is confirmed. Quit keys choose Exit.
pub fn run_menu<F: Frontend + ?Sized>(frontend: &mut F, tick: Duration) -> Result<MenuChoice> {
    let mut menu = Menu::new();
    let mut last_tick = Instant::now();

    loop {
        frontend.draw_menu(&menu)?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if let Some(key) = frontend.poll_key(timeout)? {
            let choice = if should_quit(key) {
                Some(MenuChoice::Exit)
            } else {
                handle_menu_key(key).and_then(|action| menu.handle(action))
            };
            if let Some(choice) = choice {
                info!("menu choice: {}", choice.label());
                frontend.pause(MENU_CONFIRM_PAUSE_MS);
                return Ok(choice);
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            menu.tick();
        }
    }
}

/// Play until the last life is lost or the player quits.
pub fn run_game<F, R>(
    frontend: &mut F,
    game: &mut GameState,
    rng: &mut R,
    tick: Duration,
) -> Result<GameOutcome>
where
    F: Frontend + ?Sized,
    R: Rng + ?Sized,
{
    let mut snap = GameSnapshot::default();
    let mut last_tick = Instant::now();

    loop {
        game.snapshot_into(&mut snap);
        frontend.draw_game(&snap)?;

        if game.is_over() {
            return Ok(GameOutcome::Over {
                score: game.score(),
            });
        }

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if let Some(key) = frontend.poll_key(timeout)? {
            if should_quit(key) {
                info!("player quit with score {}", game.score());
                return Ok(GameOutcome::Quit {
                    score: game.score(),
                });
            }
            if let Some(action) = handle_key_event(key) {
                game.apply_action(action);
            }
        }

        if last_tick.elapsed() < tick {
            continue;
        }
        last_tick = Instant::now();

        let pause = match game.tick(rng) {
            TickEvent::None => continue,
            TickEvent::PlayerCaught { .. } | TickEvent::GameOver { .. } => DEATH_PAUSE_MS,
            TickEvent::LevelCleared { .. } => LEVEL_PAUSE_MS,
        };

        game.snapshot_into(&mut snap);
        frontend.draw_game(&snap)?;
        frontend.pause(pause);
        // No-op once the game is over; the next iteration returns.
        game.resume();
        // The pause is not owed to the next tick.
        last_tick = Instant::now();
    }
}

/// The real terminal: crossterm events in, diffed framebuffer out.
pub struct TerminalFrontend {
    renderer: TerminalRenderer,
    fb: FrameBuffer,
    game_view: GameView,
    menu_view: MenuView,
    viewport: Viewport,
}

impl TerminalFrontend {
    /// Take over the terminal (raw mode, alternate screen).
    pub fn enter() -> Result<Self> {
        let (w, h) = crossterm::terminal::size()?;
        let mut renderer = TerminalRenderer::new();
        renderer.enter()?;
        Ok(Self {
            renderer,
            fb: FrameBuffer::new(w, h),
            game_view: GameView::default(),
            menu_view: MenuView::new(),
            viewport: Viewport::new(w, h),
        })
    }

    /// Give the terminal back. Also happens on drop.
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Frontend for TerminalFrontend {
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if is_press(&key) => Ok(Some(key)),
            Event::Resize(w, h) => {
                self.viewport = Viewport::new(w, h);
                self.renderer.invalidate();
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn draw_menu(&mut self, menu: &Menu) -> Result<()> {
        self.menu_view.render_into(menu, self.viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }

    fn draw_game(&mut self, snap: &GameSnapshot) -> Result<()> {
        self.game_view.render_into(snap, self.viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }

    fn pause(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(ms as u64));
    }
}
