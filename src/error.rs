use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// The snake covers the whole grid, so there is nowhere left for food.
    #[error("no free cell left to place food")]
    NoFreeCell,
    #[error("terminal is {actual:?} but the grid needs at least {needed:?} (columns, rows)")]
    TerminalTooSmall { needed: (u16, u16), actual: (u16, u16) },
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("terminal command failed: {0}")]
    Terminal(#[from] crossterm::ErrorKind),
    #[error("could not initialize logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type GameResult<T> = Result<T, GameError>;
