use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::draw::{Canvas, Drawable};
use crate::error::{GameError, GameResult};
use crate::grid::Grid;
use crate::{Position, Rgb};

pub struct Food {
    position: Position,
    color: Rgb,
}

impl Food {
    pub fn spawn<'a, R, I>(grid: &Grid, occupied: I, rng: &mut R, color: Rgb) -> GameResult<Self>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a Position>,
    {
        let position = free_cell(grid, occupied, rng)?;
        Ok(Food { position, color })
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Moves the food to a uniformly chosen cell outside `occupied`. On
    /// `NoFreeCell` the food stays where it was.
    pub fn randomize_position<'a, R, I>(&mut self, grid: &Grid, occupied: I, rng: &mut R) -> GameResult<()>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a Position>,
    {
        self.position = free_cell(grid, occupied, rng)?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn at(position: Position, color: Rgb) -> Self {
        Food { position, color }
    }
}

fn free_cell<'a, R, I>(grid: &Grid, occupied: I, rng: &mut R) -> GameResult<Position>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = &'a Position>,
{
    let taken: HashSet<Position> = occupied.into_iter().copied().collect();
    let choices: Vec<Position> = grid.cells().filter(|pos| !taken.contains(pos)).collect();

    choices.choose(rng).copied().ok_or(GameError::NoFreeCell)
}

impl Drawable for Food {
    fn color(&self) -> Rgb {
        self.color
    }

    fn draw(&self, canvas: &mut dyn Canvas) -> GameResult<()> {
        canvas.fill_cell(self.position, self.color())
    }
}
