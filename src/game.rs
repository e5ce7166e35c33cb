use log::{debug, error, info};
use rand::Rng;

use crate::config::Settings;
use crate::error::GameResult;
use crate::food::Food;
use crate::snake::{Direction, Snake};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Turn(Direction),
    /// Anything the game doesn't react to
    Other,
}

pub trait InputSource {
    /// Everything queued since the last call, without blocking.
    fn poll_events(&mut self) -> GameResult<Vec<InputEvent>>;
}

pub trait Renderer {
    fn render(&mut self, snake: &Snake, food: &Food) -> GameResult<()>;
}

pub trait FrameLimiter {
    /// Blocks until the next frame boundary at `rate` frames per second.
    fn tick(&mut self, rate: u32);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate,
    Reset,
}

pub struct Game<R> {
    settings: Settings,
    snake: Snake,
    food: Food,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub fn new(settings: Settings, mut rng: R) -> GameResult<Self> {
        let snake = Snake::new(settings.spawn, settings.snake_color);
        let food = Food::spawn(&settings.grid, snake.body(), &mut rng, settings.food_color)?;
        Ok(Game { settings, snake, food, rng })
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[cfg(test)]
    pub fn food(&self) -> &Food {
        &self.food
    }

    /// Feeds one poll's worth of events to the snake. Returns `false` once
    /// a quit request is seen; events after it are dropped.
    pub fn handle_input(&mut self, events: &[InputEvent]) -> bool {
        for ev in events {
            match ev {
                InputEvent::Quit => return false,
                InputEvent::Turn(dir) => self.snake.set_pending_direction(*dir),
                InputEvent::Other => {}
            }
        }
        true
    }

    /// One game update. Only fails when food can't be placed anymore.
    pub fn tick(&mut self) -> GameResult<TickOutcome> {
        let grid = self.settings.grid;

        self.snake.commit_direction();
        self.snake.move_step(&grid);

        if self.snake.head() == self.food.position() {
            self.snake.grow();
            self.food.randomize_position(&grid, self.snake.body(), &mut self.rng)?;
            debug!("Ate food, length now {}, next food at {:?}", self.snake.length(), self.food.position());
            Ok(TickOutcome::Ate)
        } else if self.snake.collides_with_self() {
            info!(
                "Snake ran into itself at {:?} heading {:?}, length {}, resetting",
                self.snake.head(),
                self.snake.direction(),
                self.snake.length()
            );
            // The food stays put; it can only overlap the respawned snake
            // if it happens to sit on the spawn cell.
            self.snake.reset(self.settings.spawn);
            Ok(TickOutcome::Reset)
        } else {
            Ok(TickOutcome::Moved)
        }
    }

    /// Runs until the input source asks to quit.
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
        clock: &mut dyn FrameLimiter,
    ) -> GameResult<()> {
        info!("Game started, grid {}x{}", self.settings.grid.width(), self.settings.grid.height());
        renderer.render(&self.snake, &self.food)?;

        loop {
            let events = input.poll_events()?;
            if !self.handle_input(&events) {
                info!("Quit requested, final length {}", self.snake.length());
                return Ok(());
            }

            clock.tick(self.settings.tick_rate);

            if let Err(e) = self.tick() {
                error!("Game can't continue: {}", e);
                return Err(e);
            }

            renderer.render(&self.snake, &self.food)?;
        }
    }

    #[cfg(test)]
    pub(crate) fn with_state(settings: Settings, snake: Snake, food: Food, rng: R) -> Self {
        Game { settings, snake, food, rng }
    }
}
