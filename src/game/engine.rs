use super::{
    action::Direction,
    config::GameConfig,
    grid::Grid,
    state::{Cell, CollisionType, GameState, Snake},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// What a single tick did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The snake advanced one cell without growing
    Moved,
    /// The snake advanced onto the food and grew by one
    Ate,
    /// The new head left the grid or hit the body; state is unchanged
    Collided(CollisionType),
    /// The snake ate the last free cell, no food can be placed
    BoardFilled,
}

impl StepOutcome {
    /// Whether this outcome ends the run
    pub fn is_terminal(&self) -> bool {
        matches!(self, StepOutcome::Collided(_) | StepOutcome::BoardFilled)
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    grid: Grid,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            grid: config.grid(),
            rng,
        }
    }

    /// Fresh run: one-cell snake at the grid center heading right
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(self.grid.center(), Direction::Right, 1);
        let food = self.spawn_food(&snake);
        GameState::new(snake, food, self.grid)
    }

    /// Execute one tick of the game
    pub fn step(&mut self, state: &mut GameState) -> StepOutcome {
        let new_head = state.snake.commit_direction();
        state.steps += 1;

        if !self.grid.contains(new_head) {
            return StepOutcome::Collided(CollisionType::Wall);
        }

        // The tail has not moved yet, so stepping into it is a collision
        if state.snake.occupies(new_head) {
            return StepOutcome::Collided(CollisionType::SelfCollision);
        }

        state.snake.push_head(new_head);

        if state.food == Some(new_head) {
            state.food = self.spawn_food(&state.snake);
            return match state.food {
                Some(_) => StepOutcome::Ate,
                None => StepOutcome::BoardFilled,
            };
        }

        state.snake.pop_tail();
        StepOutcome::Moved
    }

    /// Pick a uniformly random free cell.
    ///
    /// Rejection sampling first; once the attempt budget runs out the free
    /// cells are enumerated and one is drawn from them. `None` means the
    /// snake covers the grid.
    pub fn spawn_food(&mut self, snake: &Snake) -> Option<Cell> {
        let attempts = self.grid.capacity() * 4;
        for _ in 0..attempts {
            let cell = self.random_cell();
            if !snake.occupies(cell) {
                return Some(cell);
            }
        }

        let free: Vec<Cell> = self.grid.cells().filter(|&c| !snake.occupies(c)).collect();
        if free.is_empty() {
            return None;
        }
        Some(free[self.rng.gen_range(0..free.len())])
    }

    fn random_cell(&mut self) -> Cell {
        let x = self.rng.gen_range(0..self.grid.cols()) as i32;
        let y = self.rng.gen_range(0..self.grid.rows()) as i32;
        Cell::new(x, y)
    }
}
