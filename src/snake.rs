use std::collections::VecDeque;

use crate::draw::{Canvas, Drawable};
use crate::error::GameResult;
use crate::grid::Grid;
use crate::{Coord, Position, Rgb};
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    /// Unit step in screen coordinates (y grows downwards)
    pub fn delta(self) -> (Coord, Coord) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

pub struct Snake {
    body: VecDeque<Position>,
    length: usize,
    direction: Direction,
    pending_direction: Option<Direction>,
    vacated: Option<Position>,
    color: Rgb,
}

impl Snake {
    pub fn new(pos: Position, color: Rgb) -> Self {
        let mut snake = Snake {
            body: VecDeque::new(),
            length: 1,
            direction: Right,
            pending_direction: None,
            vacated: None,
            color,
        };
        snake.reset(pos);
        snake
    }

    /// Segments, head first
    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub fn head(&self) -> Position {
        // The body is never empty: every constructor and `reset` seed it
        self.body[0]
    }

    /// Number of segments the snake is meant to have
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[cfg(test)]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    /// Cell freed by the last move, if any
    pub fn vacated(&self) -> Option<Position> {
        self.vacated
    }

    /// Turns are checked against the committed direction, so two quick
    /// presses within a tick can't fold the snake back onto itself.
    pub fn set_pending_direction(&mut self, new_direction: Direction) {
        if new_direction != self.direction.opposite() {
            self.pending_direction = Some(new_direction);
        }
    }

    pub fn commit_direction(&mut self) {
        if let Some(dir) = self.pending_direction.take() {
            self.direction = dir;
        }
    }

    /// Advances one cell. Returns the tail cell given up, which is `None`
    /// right after eating.
    pub fn move_step(&mut self, grid: &Grid) -> Option<Position> {
        let new_head = grid.step(self.head(), self.direction);
        self.body.push_front(new_head);

        self.vacated = if self.body.len() > self.length {
            self.body.pop_back()
        } else {
            None
        };

        self.vacated
    }

    /// Takes effect on the next move, which skips trimming the tail.
    pub fn grow(&mut self) {
        self.length += 1;
    }

    pub fn collides_with_self(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&pos| pos == head)
    }

    pub fn reset(&mut self, pos: Position) {
        self.length = 1;
        self.body.clear();
        self.body.push_back(pos);
        self.direction = Right;
        self.pending_direction = None;
        self.vacated = None;
    }

    #[cfg(test)]
    pub(crate) fn from_parts(body: Vec<Position>, direction: Direction, color: Rgb) -> Self {
        assert!(!body.is_empty());
        Snake {
            length: body.len(),
            body: body.into_iter().collect(),
            direction,
            pending_direction: None,
            vacated: None,
            color,
        }
    }
}

impl Drawable for Snake {
    fn color(&self) -> Rgb {
        self.color
    }

    fn draw(&self, canvas: &mut dyn Canvas) -> GameResult<()> {
        // Only matters on canvases that keep what was drawn last frame; a
        // canvas rebuilt from scratch each frame has nothing to erase.
        if let Some(old_tail) = self.vacated() {
            canvas.clear_cell(old_tail)?;
        }

        let color = self.color();
        for pos in self.body.iter() {
            canvas.fill_cell(*pos, color)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::testing::{RecordingCanvas, Stroke};

    const GREEN: Rgb = (0, 255, 0);
    const ALL: [Direction; 4] = [Up, Down, Left, Right];

    fn grid() -> Grid {
        Grid::new(640, 480, 20)
    }

    fn body(snake: &Snake) -> Vec<Position> {
        snake.body().iter().copied().collect()
    }

    #[test]
    fn new_snake_is_one_cell_heading_right() {
        let snake = Snake::new((320, 240), GREEN);
        assert_eq!(body(&snake), vec![(320, 240)]);
        assert_eq!(snake.length(), 1);
        assert_eq!(snake.direction(), Right);
        assert_eq!(snake.pending_direction(), None);
        assert!(!snake.collides_with_self());
    }

    #[test]
    fn only_exact_reversal_is_ignored() {
        for &current in ALL.iter() {
            for &wanted in ALL.iter() {
                let mut snake = Snake::from_parts(vec![(100, 100)], current, GREEN);
                snake.set_pending_direction(wanted);
                if wanted == current.opposite() {
                    assert_eq!(snake.pending_direction(), None, "{:?} -> {:?}", current, wanted);
                } else {
                    assert_eq!(snake.pending_direction(), Some(wanted), "{:?} -> {:?}", current, wanted);
                }
            }
        }
    }

    #[test]
    fn reversal_checked_against_committed_direction() {
        let mut snake = Snake::new((100, 100), GREEN);
        snake.set_pending_direction(Up);
        // Left is the reverse of the committed Right, not of the pending Up
        snake.set_pending_direction(Left);
        assert_eq!(snake.pending_direction(), Some(Up));
        snake.set_pending_direction(Down);
        assert_eq!(snake.pending_direction(), Some(Down));
    }

    #[test]
    fn commit_consumes_pending_once() {
        let mut snake = Snake::new((100, 100), GREEN);
        snake.set_pending_direction(Down);
        snake.commit_direction();
        assert_eq!(snake.direction(), Down);
        assert_eq!(snake.pending_direction(), None);

        snake.commit_direction();
        assert_eq!(snake.direction(), Down);
    }

    #[test]
    fn plain_move_keeps_length() {
        let g = grid();
        let mut snake = Snake::from_parts(vec![(100, 100), (80, 100), (60, 100)], Right, GREEN);
        for _ in 0..10 {
            snake.move_step(&g);
            assert_eq!(snake.body().len(), snake.length());
        }
        assert_eq!(snake.head(), (300, 100));
    }

    #[test]
    fn move_reports_vacated_tail() {
        let g = grid();
        let mut snake = Snake::from_parts(vec![(100, 100), (80, 100)], Right, GREEN);
        assert_eq!(snake.move_step(&g), Some((80, 100)));
        assert_eq!(snake.vacated(), Some((80, 100)));
        assert_eq!(body(&snake), vec![(120, 100), (100, 100)]);
    }

    #[test]
    fn grow_then_move_keeps_tail() {
        let g = grid();
        let mut snake = Snake::from_parts(vec![(100, 100), (80, 100)], Right, GREEN);
        snake.grow();
        assert_eq!(snake.length(), 3);
        assert_eq!(snake.move_step(&g), None);
        assert_eq!(body(&snake), vec![(120, 100), (100, 100), (80, 100)]);

        // Back to trimming on the following move
        assert_eq!(snake.move_step(&g), Some((80, 100)));
        assert_eq!(snake.body().len(), 3);
    }

    #[test]
    fn moves_wrap_around() {
        let g = grid();
        let mut snake = Snake::new((620, 0), GREEN);
        snake.move_step(&g);
        assert_eq!(snake.head(), (0, 0));

        snake.set_pending_direction(Up);
        snake.commit_direction();
        snake.move_step(&g);
        assert_eq!(snake.head(), (0, 460));
    }

    #[test]
    fn collision_only_when_head_revisits_body() {
        let touching = Snake::from_parts(vec![(20, 0), (0, 0), (20, 0)], Right, GREEN);
        assert!(touching.collides_with_self());

        let clear = Snake::from_parts(vec![(40, 0), (20, 0), (0, 0)], Right, GREEN);
        assert!(!clear.collides_with_self());
    }

    #[test]
    fn reset_restores_initial_state() {
        let g = grid();
        let mut snake = Snake::from_parts(vec![(100, 100), (80, 100), (60, 100)], Down, GREEN);
        snake.set_pending_direction(Left);
        snake.move_step(&g);

        snake.reset((320, 240));
        assert_eq!(body(&snake), vec![(320, 240)]);
        assert_eq!(snake.length(), 1);
        assert_eq!(snake.direction(), Right);
        assert_eq!(snake.pending_direction(), None);
        assert_eq!(snake.vacated(), None);
        assert!(!snake.collides_with_self());
    }

    #[test]
    fn draw_clears_vacated_before_body() {
        let g = grid();
        let mut snake = Snake::from_parts(vec![(20, 0), (0, 0)], Right, GREEN);
        snake.move_step(&g);

        let mut canvas = RecordingCanvas::default();
        snake.draw(&mut canvas).unwrap();
        assert_eq!(
            canvas.strokes,
            vec![
                Stroke::Clear((0, 0)),
                Stroke::Fill((40, 0), GREEN),
                Stroke::Fill((20, 0), GREEN),
            ]
        );
    }
}
