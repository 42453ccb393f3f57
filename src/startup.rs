//! Startup checks run before the terminal is taken over.
//!
//! Each failure maps to its own process exit code:
//!
//! | Code | Failure |
//! |------|---------|
//! | 1 | locale is not UTF-8 (the glyphs need it) |
//! | 2 | terminal smaller than the maze plus HUD, or no terminal at all |
//! | 3 | terminal without color support |

use std::fmt;
use std::io;

use crate::types::{MIN_TERMINAL_COLORS, MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};

#[derive(Debug)]
pub enum StartupError {
    Locale,
    NoTerminal(io::Error),
    TerminalTooSmall { width: u16, height: u16 },
    NoColor,
}

impl StartupError {
    pub fn exit_code(&self) -> i32 {
        match self {
            StartupError::Locale => 1,
            StartupError::NoTerminal(_) | StartupError::TerminalTooSmall { .. } => 2,
            StartupError::NoColor => 3,
        }
    }
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::Locale => write!(
                f,
                "Error: locale is not UTF-8. Set LANG (or LC_ALL) to a UTF-8 locale, e.g. en_US.UTF-8."
            ),
            StartupError::NoTerminal(e) => write!(f, "Error: cannot query the terminal size: {e}"),
            StartupError::TerminalTooSmall { width, height } => write!(
                f,
                "Error: terminal is {width}x{height}, it must be at least \
                 {MIN_TERMINAL_WIDTH}x{MIN_TERMINAL_HEIGHT}. Increase the size and try again."
            ),
            StartupError::NoColor => write!(f, "Error: terminal does not support colors."),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartupError::NoTerminal(e) => Some(e),
            _ => None,
        }
    }
}

/// Whether the effective character-type locale is UTF-8.
///
/// Follows the POSIX precedence: `LC_ALL`, then `LC_CTYPE`, then `LANG`;
/// the first non-empty one decides.
pub fn locale_is_utf8<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .filter_map(|key| lookup(*key))
        .find(|v| !v.is_empty())
        .map(|v| {
            let v = v.to_ascii_lowercase();
            v.contains("utf-8") || v.contains("utf8")
        })
        .unwrap_or(false)
}

pub fn check_size(width: u16, height: u16) -> Result<(), StartupError> {
    if width < MIN_TERMINAL_WIDTH || height < MIN_TERMINAL_HEIGHT {
        return Err(StartupError::TerminalTooSmall { width, height });
    }
    Ok(())
}

/// A terminal supports color unless it is missing, `dumb`, or reports fewer
/// than the basic eight colors.
pub fn check_color(term: Option<&str>, color_count: u16) -> Result<(), StartupError> {
    match term {
        None | Some("") | Some("dumb") => Err(StartupError::NoColor),
        Some(_) if color_count < MIN_TERMINAL_COLORS => Err(StartupError::NoColor),
        Some(_) => Ok(()),
    }
}

/// Run every check against the real environment and terminal.
pub fn check_environment() -> Result<(), StartupError> {
    if !locale_is_utf8(|key| std::env::var(key).ok()) {
        return Err(StartupError::Locale);
    }

    let (width, height) = crossterm::terminal::size().map_err(StartupError::NoTerminal)?;
    check_size(width, height)?;

    let term = std::env::var("TERM").ok();
    check_color(term.as_deref(), crossterm::style::available_color_count())?;

    log::debug!("terminal {width}x{height}, TERM={term:?}");
    Ok(())
}
