use crate::error::GameResult;
use crate::{Position, Rgb};

/// Something cells can be painted onto. Positions are grid-aligned.
pub trait Canvas {
    /// Paint a cell with `fill`, outlined in the canvas' border color.
    fn fill_cell(&mut self, pos: Position, fill: Rgb) -> GameResult<()>;

    /// Paint a cell back to the background color.
    fn clear_cell(&mut self, pos: Position) -> GameResult<()>;
}

/// Game objects that know how to put themselves on a canvas.
pub trait Drawable {
    fn color(&self) -> Rgb;

    fn draw(&self, canvas: &mut dyn Canvas) -> GameResult<()>;
}
