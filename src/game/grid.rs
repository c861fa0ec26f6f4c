use super::state::Cell;

/// Fixed-size playing field of `cols` x `rows` cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cols: i32,
    rows: i32,
}

impl Grid {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols: cols as i32,
            rows: rows as i32,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    /// Total number of cells on the grid
    pub fn capacity(&self) -> usize {
        self.cols() * self.rows()
    }

    /// Check if a cell lies within [0, cols) x [0, rows)
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.cols && cell.y >= 0 && cell.y < self.rows
    }

    /// Starting cell for a fresh snake
    pub fn center(&self) -> Cell {
        Cell::new(self.cols / 2, self.rows / 2)
    }

    /// Every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |y| (0..self.cols).map(move |x| Cell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_checking() {
        let grid = Grid::new(20, 20);

        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(19, 19)));
        assert!(!grid.contains(Cell::new(-1, 0)));
        assert!(!grid.contains(Cell::new(20, 0)));
        assert!(!grid.contains(Cell::new(0, 20)));
        assert!(!grid.contains(Cell::new(0, -1)));
    }

    #[test]
    fn test_center_and_capacity() {
        let grid = Grid::new(20, 20);
        assert_eq!(grid.center(), Cell::new(10, 10));
        assert_eq!(grid.capacity(), 400);

        let odd = Grid::new(7, 5);
        assert_eq!(odd.center(), Cell::new(3, 2));
    }

    #[test]
    fn test_cells_cover_grid() {
        let grid = Grid::new(3, 2);
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[5], Cell::new(2, 1));
        assert!(cells.iter().all(|&c| grid.contains(c)));
    }
}
