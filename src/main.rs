mod clock;
mod config;
mod draw;
mod error;
mod food;
mod game;
mod grid;
mod snake;
mod term;

use std::fs::File;
use std::process::exit;

use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::clock::FrameClock;
use crate::config::Settings;
use crate::error::GameResult;
use crate::game::Game;
use crate::term::{Keyboard, TermManager};

pub type Coord = i32;
pub type Position = (Coord, Coord);
pub type Rgb = (u8, u8, u8);

fn main() {
    if let Err(e) = run() {
        // The terminal has been restored by now, so this is readable
        eprintln!("snake: {}", e);
        exit(1);
    }
}

fn run() -> GameResult<()> {
    // The terminal belongs to the game, so logs go to a file
    WriteLogger::init(LevelFilter::Info, Config::default(), File::create(config::LOG_FILE)?)?;
    info!("Starting snake");

    let settings = Settings::default();
    let mut game = Game::new(settings, StdRng::from_entropy())?;

    let mut term = TermManager::new(settings.grid, config::BORDER_COLOR, config::BACKGROUND_COLOR)?;
    let mut keyboard = Keyboard;
    let mut clock = FrameClock::new();

    let res = term
        .setup()
        .and_then(|_| game.run(&mut keyboard, &mut term, &mut clock));

    if let Err(e) = term.restore() {
        error!("Failed to restore terminal: {}", e);
    }

    match &res {
        Ok(()) => info!("Bye, final length {}", game.snake().length()),
        Err(e) => error!("Exiting: {}", e),
    }

    res
}
