use rand::rngs::ThreadRng;

use super::config::GameConfig;
use super::food::Food;
use super::grid::Grid;
use super::snake::{MoveOutcome, Snake};

/// What ended the snake's current run this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit the play field boundary
    Wall,
    /// Snake hit its own body
    Body,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// The collision that reset the snake, if any
    pub collision: Option<CollisionType>,
}

/// Everything the renderer needs to draw a frame
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    pub food: Food,
}

/// The game engine: drives the snake and food through each tick
pub struct GameEngine {
    grid: Grid,
    rng: ThreadRng,
}

impl GameEngine {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            grid: config.grid(),
            rng: rand::thread_rng(),
        }
    }

    /// Build the starting state: a length-1 snake at the grid center
    /// facing right, and food on a random free cell
    pub fn new_state(&mut self) -> GameState {
        let snake = Snake::new(self.grid.center());
        let food = Food::spawn(&mut self.rng, &self.grid, &snake.cells);
        GameState {
            grid: self.grid,
            snake,
            food,
        }
    }

    /// Advance the game by one tick.
    ///
    /// Order matters: the buffered direction is committed first, then the
    /// move with its wall check (a wall hit resets and ends the tick),
    /// then the food check, then the self-collision check. The food check
    /// deliberately runs before the self-collision check, so a tick can
    /// both grow the snake and reset it.
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        state.snake.apply_pending_direction();

        if state.snake.advance(&self.grid) == MoveOutcome::HitWall {
            state.snake.reset(self.grid.center());
            return TickOutcome {
                ate_food: false,
                collision: Some(CollisionType::Wall),
            };
        }

        let ate_food = state.snake.head() == state.food.position;
        if ate_food {
            state.snake.grow();
            state
                .food
                .relocate(&mut self.rng, &self.grid, &state.snake.cells);
        }

        let mut collision = None;
        if state.snake.self_collision() {
            state.snake.reset(self.grid.center());
            collision = Some(CollisionType::Body);
        }

        TickOutcome { ate_food, collision }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::direction::Direction;
    use crate::game::grid::Position;

    fn engine() -> GameEngine {
        GameEngine::new(&GameConfig::default())
    }

    const NO_EVENT: TickOutcome = TickOutcome {
        ate_food: false,
        collision: None,
    };

    #[test]
    fn test_new_state() {
        let mut engine = engine();
        let state = engine.new_state();

        assert_eq!(state.grid, Grid::new(32, 24));
        assert_eq!(state.snake.head(), Position::new(16, 12));
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.direction, Direction::Right);
        assert_ne!(state.food.position, state.snake.head());
    }

    #[test]
    fn test_three_idle_ticks_from_center() {
        let mut engine = engine();
        let mut state = engine.new_state();
        // Keep the food out of the snake's path
        state.food.position = Position::new(0, 0);

        for _ in 0..3 {
            assert_eq!(engine.tick(&mut state), NO_EVENT);
        }

        // 640x480 at cell 20: center cell (16,12) is pixel (320,240),
        // and three moves right put the head at (19,12) = pixel (380,240)
        assert_eq!(state.snake.head(), Position::new(19, 12));
        assert_eq!(state.snake.len(), 1);
    }

    #[test]
    fn test_wall_hit_resets_to_center() {
        let mut engine = engine();
        let mut state = engine.new_state();
        state.food.position = Position::new(0, 0);
        // One cell short of the right edge: pixel x=620 on the 640-wide field
        state.snake.cells = vec![Position::new(31, 12)];

        let outcome = engine.tick(&mut state);
        assert_eq!(outcome.collision, Some(CollisionType::Wall));
        assert!(!outcome.ate_food);
        assert_eq!(state.snake.head(), Position::new(16, 12));
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.direction, Direction::Right);
    }

    #[test]
    fn test_eating_food_grows_and_relocates() {
        let mut engine = engine();
        let mut state = engine.new_state();
        state.food.position = state.snake.head().moved_in_direction(Direction::Right);

        let outcome = engine.tick(&mut state);
        assert!(outcome.ate_food);
        assert_eq!(outcome.collision, None);
        assert_eq!(state.snake.target_len(), 2);
        assert!(!state.snake.cells.contains(&state.food.position));

        // The extra segment materializes on the next tick
        engine.tick(&mut state);
        assert_eq!(state.snake.len(), 2);
    }

    #[test]
    fn test_self_collision_resets() {
        let mut engine = engine();
        let mut state = engine.new_state();
        state.food.position = Position::new(0, 0);
        // A 5-segment hook: moving right lands the head on the body
        // cell (11,11), which is far enough from the tail to survive
        // the trim.
        state.snake.cells = vec![
            Position::new(10, 11),
            Position::new(10, 10),
            Position::new(11, 10),
            Position::new(11, 11),
            Position::new(12, 11),
        ];
        for _ in 0..4 {
            state.snake.grow();
        }
        state.snake.direction = Direction::Right;

        let outcome = engine.tick(&mut state);
        assert_eq!(outcome.collision, Some(CollisionType::Body));
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Position::new(16, 12));
    }

    #[test]
    fn test_eat_and_self_collide_same_tick() {
        // Food sitting on a cell the head re-enters: the food check runs
        // first (grow + relocate), then the self-collision reset wins.
        let mut engine = engine();
        let mut state = engine.new_state();
        // Target length one above the actual length, so the move does
        // not trim and the re-entered tail cell stays on the body.
        state.snake.cells = vec![
            Position::new(10, 10),
            Position::new(9, 10),
            Position::new(9, 11),
            Position::new(10, 11),
        ];
        for _ in 0..4 {
            state.snake.grow();
        }
        state.snake.direction = Direction::Down;
        state.food.position = Position::new(10, 11);

        let outcome = engine.tick(&mut state);
        assert!(outcome.ate_food);
        assert_eq!(outcome.collision, Some(CollisionType::Body));
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Position::new(16, 12));
    }
}
