//! Hard-coded game configuration.

use crate::grid::Grid;
use crate::{Position, Rgb};

pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;
pub const CELL_SIZE: i32 = 20;

/// Snake moves per second
pub const TICK_RATE: u32 = 20;

pub const BACKGROUND_COLOR: Rgb = (0, 0, 0);
pub const BORDER_COLOR: Rgb = (93, 216, 228);
pub const FOOD_COLOR: Rgb = (255, 0, 0);
pub const SNAKE_COLOR: Rgb = (0, 255, 0);

pub const LOG_FILE: &str = "snake.log";

/// Everything the game loop needs to know up front, built once in `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub grid: Grid,
    pub tick_rate: u32,
    pub spawn: Position,
    pub snake_color: Rgb,
    pub food_color: Rgb,
}

impl Settings {
    pub fn new(grid: Grid) -> Self {
        Settings {
            grid,
            tick_rate: TICK_RATE,
            spawn: grid.center(),
            snake_color: SNAKE_COLOR,
            food_color: FOOD_COLOR,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::new(Grid::new(SCREEN_WIDTH, SCREEN_HEIGHT, CELL_SIZE))
    }
}
