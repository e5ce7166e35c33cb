use crate::snake::Direction;
use crate::{Coord, Position};

/// A toroidal grid of square cells. Positions are in screen units and always
/// sit on a cell boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: Coord,
    height: Coord,
    cell_size: Coord,
}

impl Grid {
    /// Any remainder of the screen that doesn't fill a whole cell is dropped.
    pub fn new(screen_width: Coord, screen_height: Coord, cell_size: Coord) -> Self {
        assert!(cell_size > 0, "cell size must be positive");
        assert!(
            screen_width >= cell_size && screen_height >= cell_size,
            "screen must hold at least one cell"
        );
        Grid {
            width: screen_width / cell_size,
            height: screen_height / cell_size,
            cell_size,
        }
    }

    /// Width in cells
    pub fn width(&self) -> Coord {
        self.width
    }

    /// Height in cells
    pub fn height(&self) -> Coord {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    pub fn step(&self, pos: Position, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        let x = (pos.0 + dx * self.cell_size).rem_euclid(self.width * self.cell_size);
        let y = (pos.1 + dy * self.cell_size).rem_euclid(self.height * self.cell_size);
        (x, y)
    }

    pub fn contains(&self, pos: Position) -> bool {
        let (x, y) = pos;
        x >= 0
            && y >= 0
            && x < self.width * self.cell_size
            && y < self.height * self.cell_size
            && x % self.cell_size == 0
            && y % self.cell_size == 0
    }

    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let Grid { width, height, cell_size } = *self;
        (0..width).flat_map(move |cx| (0..height).map(move |cy| (cx * cell_size, cy * cell_size)))
    }

    /// Middle of the screen, snapped down onto the cell grid.
    pub fn center(&self) -> Position {
        let x = self.width * self.cell_size / 2;
        let y = self.height * self.cell_size / 2;
        (x - x % self.cell_size, y - y % self.cell_size)
    }

    /// (column, row) of the cell holding `pos`
    pub fn to_cell(&self, pos: Position) -> (Coord, Coord) {
        (pos.0 / self.cell_size, pos.1 / self.cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction::*;

    fn grid() -> Grid {
        Grid::new(640, 480, 20)
    }

    #[test]
    fn dimensions_ignore_remainder() {
        let g = Grid::new(650, 495, 20);
        assert_eq!((g.width(), g.height()), (32, 24));
        assert_eq!(g.cell_count(), 768);
    }

    #[test]
    fn step_moves_one_cell() {
        let g = grid();
        assert_eq!(g.step((100, 100), Right), (120, 100));
        assert_eq!(g.step((100, 100), Left), (80, 100));
        assert_eq!(g.step((100, 100), Up), (100, 80));
        assert_eq!(g.step((100, 100), Down), (100, 120));
    }

    #[test]
    fn step_wraps_at_every_edge() {
        let g = grid();
        assert_eq!(g.step((620, 200), Right), (0, 200));
        assert_eq!(g.step((0, 200), Left), (620, 200));
        assert_eq!(g.step((300, 0), Up), (300, 460));
        assert_eq!(g.step((300, 460), Down), (300, 0));
    }

    #[test]
    fn wrap_uses_whole_cells_only() {
        // 650 / 20 leaves a 10px strip that must never be entered
        let g = Grid::new(650, 480, 20);
        assert_eq!(g.step((620, 0), Right), (0, 0));
        assert_eq!(g.step((0, 0), Left), (620, 0));
    }

    #[test]
    fn cells_cover_grid_once() {
        let g = Grid::new(100, 60, 20);
        let cells: Vec<_> = g.cells().collect();
        assert_eq!(cells.len(), g.cell_count());
        assert!(cells.iter().all(|&c| g.contains(c)));
        let unique: std::collections::HashSet<_> = cells.iter().collect();
        assert_eq!(unique.len(), cells.len());
    }

    #[test]
    fn contains_rejects_unaligned_and_outside() {
        let g = grid();
        assert!(g.contains((0, 0)));
        assert!(g.contains((620, 460)));
        assert!(!g.contains((640, 0)));
        assert!(!g.contains((-20, 0)));
        assert!(!g.contains((10, 0)));
    }

    #[test]
    fn center_is_aligned() {
        assert_eq!(grid().center(), (320, 240));
        let odd = Grid::new(660, 500, 20); // 33 x 25 cells
        assert_eq!(odd.center(), (320, 240));
        assert!(odd.contains(odd.center()));
    }

    #[test]
    fn to_cell_divides_by_cell_size() {
        assert_eq!(grid().to_cell((620, 40)), (31, 2));
    }

    #[test]
    #[should_panic(expected = "at least one cell")]
    fn screen_narrower_than_a_cell_is_rejected() {
        Grid::new(10, 480, 20);
    }

    #[test]
    #[should_panic(expected = "at least one cell")]
    fn screen_shorter_than_a_cell_is_rejected() {
        Grid::new(640, 19, 20);
    }

    #[test]
    fn single_cell_grid_wraps_onto_itself() {
        let g = Grid::new(20, 20, 20);
        assert_eq!(g.center(), (0, 0));
        assert_eq!(g.step((0, 0), Left), (0, 0));
    }
}
