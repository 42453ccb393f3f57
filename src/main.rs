//! Terminal Pacman runner (default binary).
//!
//! Startup checks, then the start menu, then the game. It uses crossterm
//! for input and a framebuffer-based renderer.

use std::fs::File;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use tui_pacman::config::GameConfig;
use tui_pacman::core::{GameState, Maze, SimpleRng};
use tui_pacman::game_loop::{run_game, run_menu, GameOutcome, TerminalFrontend};
use tui_pacman::startup::check_environment;
use tui_pacman::types::MenuChoice;

fn main() -> Result<ExitCode> {
    let config = GameConfig::from_env();
    init_logging(&config);

    if let Err(e) = check_environment() {
        log::error!("startup check failed: {e}");
        eprintln!("{e}");
        return Ok(ExitCode::from(e.exit_code() as u8));
    }

    let mut frontend = TerminalFrontend::enter()?;
    let result = run(&mut frontend, &config);

    // Always try to restore terminal state.
    let _ = frontend.exit();

    if let Some(outcome) = result? {
        println!("Game Over");
        println!("Score: {}", outcome.score());
    }
    Ok(ExitCode::SUCCESS)
}

/// `None` when Exit was chosen on the menu.
fn run(frontend: &mut TerminalFrontend, config: &GameConfig) -> Result<Option<GameOutcome>> {
    let tick = Duration::from_millis(config.tick_ms as u64);

    if run_menu(frontend, tick)? == MenuChoice::Exit {
        return Ok(None);
    }

    let seed = config.seed_or_random();
    log::debug!("ghost seed {seed}");
    let mut rng = SimpleRng::new(seed);
    let mut game = GameState::with_lives(Maze::classic(), config.lives);

    let outcome = run_game(frontend, &mut game, &mut rng, tick)?;
    log::info!("game ended: {outcome:?} at level {}", game.level());
    Ok(Some(outcome))
}

fn init_logging(config: &GameConfig) {
    let Some(path) = config.log_path.as_deref() else {
        return;
    };

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("tui-pacman starting up");
    log::debug!("config: {config:?}");
    for key in &config.ignored {
        log::warn!("ignoring invalid value for {key}");
    }
}
