use super::action::Direction;
use super::grid::Grid;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Neighbouring cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: Vec<Cell>,
    /// Direction applied on the last tick
    direction: Direction,
    /// Direction to apply on the next tick
    pending: Direction,
}

impl Snake {
    /// Create a new snake with given starting cell and direction
    pub fn new(head: Cell, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        // Lay the initial segments out behind the head
        let (dx, dy) = direction.opposite().delta();
        for i in 1..length.max(1) {
            let prev = body[i - 1];
            body.push(prev.moved_by(dx, dy));
        }

        Self {
            body,
            direction,
            pending: direction,
        }
    }

    /// Build a snake from explicit segments, head first.
    ///
    /// Returns `None` for an empty body.
    pub fn from_cells(body: Vec<Cell>, direction: Direction) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        Some(Self {
            body,
            direction,
            pending: direction,
        })
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    /// Request a direction for the next tick.
    ///
    /// A request for the exact reverse of the current direction is dropped
    /// and the pending direction stays as it was. Later requests before the
    /// next tick overwrite earlier ones.
    pub fn set_next_direction(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.pending = direction;
        true
    }

    /// Apply the pending direction and return the cell the head moves into
    pub fn commit_direction(&mut self) -> Cell {
        self.direction = self.pending;
        self.head().moved_in_direction(self.direction)
    }

    /// Check if any segment, tail included, sits on `cell`
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub(crate) fn push_head(&mut self, cell: Cell) {
        self.body.insert(0, cell);
    }

    pub(crate) fn pop_tail(&mut self) -> Option<Cell> {
        if self.body.len() > 1 {
            self.body.pop()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false, a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Snapshot of one run: snake, food and tick counter
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// `None` only once the snake covers the whole grid
    pub food: Option<Cell>,
    pub grid: Grid,
    pub steps: u32,
}

impl GameState {
    pub fn new(snake: Snake, food: Option<Cell>, grid: Grid) -> Self {
        Self {
            snake,
            food,
            grid,
            steps: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_movement() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.moved_by(1, 0), Cell::new(6, 5));
        assert_eq!(cell.moved_by(-1, 0), Cell::new(4, 5));
        assert_eq!(cell.moved_in_direction(Direction::Down), Cell::new(5, 6));
        assert_eq!(cell.moved_in_direction(Direction::Up), Cell::new(5, 4));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(5, 5));
        assert_eq!(snake.cells()[1], Cell::new(4, 5));
        assert_eq!(snake.tail(), Cell::new(3, 5));
        assert_eq!(snake.pending_direction(), Direction::Right);
    }

    #[test]
    fn test_zero_length_snake_keeps_head() {
        let snake = Snake::new(Cell::new(2, 2), Direction::Up, 0);
        assert_eq!(snake.len(), 1);
        assert!(!snake.is_empty());
        assert!(Snake::from_cells(Vec::new(), Direction::Up).is_none());
    }

    #[test]
    fn test_reversal_is_rejected() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right, 1);

        assert!(snake.set_next_direction(Direction::Up));
        assert_eq!(snake.pending_direction(), Direction::Up);

        // Opposite of the current direction, not of the pending one
        assert!(!snake.set_next_direction(Direction::Left));
        assert_eq!(snake.pending_direction(), Direction::Up);

        // Down is opposite of pending Up but not of current Right
        assert!(snake.set_next_direction(Direction::Down));
        assert_eq!(snake.pending_direction(), Direction::Down);
    }

    #[test]
    fn test_last_valid_request_wins() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right, 1);
        snake.set_next_direction(Direction::Up);
        snake.set_next_direction(Direction::Down);

        let next = snake.commit_direction();
        assert_eq!(snake.direction(), Direction::Down);
        assert_eq!(next, Cell::new(5, 6));
    }

    #[test]
    fn test_occupancy_includes_head_and_tail() {
        let snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);
        assert!(snake.occupies(Cell::new(5, 5)));
        assert!(snake.occupies(Cell::new(3, 5)));
        assert!(!snake.occupies(Cell::new(10, 10)));
    }

    #[test]
    fn test_pop_tail_never_empties() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right, 2);
        assert_eq!(snake.pop_tail(), Some(Cell::new(4, 5)));
        assert_eq!(snake.pop_tail(), None);
        assert_eq!(snake.len(), 1);
    }
}
