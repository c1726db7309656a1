use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::board::{Board, Position};
use crate::bricks::BrickField;
use crate::food;
use crate::input::Direction;
use crate::snake::Snake;

/// Body length at which a terminal state counts as a win.
pub const WIN_LENGTH: usize = 60;

/// Session outcome, derived from the current state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Outcome {
    Win,
    Loss,
    None,
}

/// One immutable snapshot of a running session.
///
/// Every transition returns a fresh snapshot and leaves its input untouched;
/// the harness swaps snapshots in between events. The RNG travels inside the
/// snapshot, so a session is a pure function of seed plus event sequence.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub bricks: BrickField,
    pub food: Option<Position>,
    pub score: u32,
    board: Board,
    rng: StdRng,
}

impl GameState {
    /// Creates the starting snapshot with an entropy-seeded RNG.
    ///
    /// Layout: a 3-segment snake in row 5 facing left, the 28-brick corner
    /// layout, food at (3,3), score 0.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self::new_with_seed(board, rand::random())
    }

    /// Creates a deterministic starting snapshot for tests and replays.
    #[must_use]
    pub fn new_with_seed(board: Board, seed: u64) -> Self {
        let snake = Snake::from_segments(
            vec![
                Position::new(5, 5),
                Position::new(6, 5),
                Position::new(7, 5),
            ],
            Direction::Left,
        );

        Self {
            snake,
            bricks: BrickField::corner_layout(board),
            food: Some(Position::new(3, 3)),
            score: 0,
            board,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns the board geometry for this session.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Slow-cadence transition: one more brick, if the board can take it.
    #[must_use]
    pub fn on_brick_tick(&self) -> Self {
        if !self.bricks.can_place_more(self.board, &self.snake, self.food) {
            return self.clone();
        }

        let mut next = self.clone();
        next.bricks = self
            .bricks
            .place_random(&mut next.rng, self.board, &self.snake, self.food);
        next
    }

    /// Fast-cadence transition: advance the snake one cell.
    ///
    /// A blocked snake stays put and the snapshot is otherwise unchanged.
    /// Eating bumps the score and respawns the food, or leaves it absent
    /// when no free cell remains.
    #[must_use]
    pub fn on_movement_tick(&self) -> Self {
        let mut next = self.clone();
        next.snake = self.snake.advance(self.board, &self.bricks, self.food);

        // The head can only reach the food cell by eating it: food never
        // overlaps the body, so a rejected move cannot trigger this.
        if self.food.is_some() && self.food == Some(next.snake.head()) {
            next.score += 1;
            next.food = if food::free_cell_exists(self.board, &next.bricks, &next.snake) {
                Some(food::respawn(
                    &mut next.rng,
                    self.board,
                    &next.bricks,
                    &next.snake,
                ))
            } else {
                None
            };
        }

        next
    }

    /// Input transition: steer the snake, applied between movement ticks.
    #[must_use]
    pub fn on_direction_input(&self, requested: Direction) -> Self {
        let mut next = self.clone();
        next.snake = self
            .snake
            .change_direction(self.board, requested, &self.bricks);
        next
    }

    /// Returns true when the snake has no legal next move: all four head
    /// neighbors hold a brick or a body segment. Bounds never matter on the
    /// torus.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        let head = self.snake.head();
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
        .into_iter()
        .all(|direction| {
            let neighbor = self.board.step(head, direction);
            self.bricks.contains(neighbor) || self.snake.occupies(neighbor)
        })
    }

    /// Classifies the session: `Win`/`Loss` on a terminal state depending on
    /// whether the body reached [`WIN_LENGTH`], `None` while moves remain.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if !self.is_terminal() {
            Outcome::None
        } else if self.snake.len() >= WIN_LENGTH {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Position};
    use crate::bricks::BrickField;
    use crate::input::Direction;
    use crate::snake::{GROWTH_BONUS, Snake};

    use super::{GameState, Outcome, WIN_LENGTH};

    fn new_state() -> GameState {
        GameState::new_with_seed(Board::new(20, 16), 42)
    }

    #[test]
    fn initial_state_matches_the_fixed_layout() {
        let state = new_state();

        assert_eq!(state.snake.head(), Position::new(5, 5));
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.direction(), Direction::Left);
        assert_eq!(state.bricks.len(), 28);
        assert_eq!(state.food, Some(Position::new(3, 3)));
        assert_eq!(state.score, 0);
        assert_eq!(state.outcome(), Outcome::None);
    }

    #[test]
    fn movement_tick_translates_the_snake_without_growth() {
        let state = new_state();

        let next = state.on_movement_tick();

        assert_eq!(next.snake.head(), Position::new(4, 5));
        assert_eq!(next.snake.len(), 3);
        assert_eq!(next.score, 0);
        assert_eq!(next.food, Some(Position::new(3, 3)));
        // The input snapshot is untouched.
        assert_eq!(state.snake.head(), Position::new(5, 5));
    }

    #[test]
    fn eating_scores_grows_and_relocates_the_food() {
        let mut state = new_state();
        state.snake = Snake::from_segments(
            vec![
                Position::new(4, 3),
                Position::new(5, 3),
                Position::new(6, 3),
            ],
            Direction::Left,
        );

        let next = state.on_movement_tick();

        assert_eq!(next.snake.head(), Position::new(3, 3));
        assert_eq!(next.score, 1);
        assert_eq!(next.snake.pending_growth(), GROWTH_BONUS - 1);
        assert_eq!(next.snake.len(), 4);

        let food = next.food.expect("board has plenty of free cells");
        assert_ne!(food, Position::new(3, 3));
        assert!(!next.snake.occupies(food));
        assert!(!next.bricks.contains(food));
    }

    #[test]
    fn blocked_movement_tick_changes_nothing() {
        let mut state = new_state();
        // Brick directly in front of the head.
        let blocked = BrickField::from_cells(state.bricks.iter().chain([Position::new(4, 5)]));
        state.bricks = blocked;

        let next = state.on_movement_tick();

        assert_eq!(next.snake, state.snake);
        assert_eq!(next.score, state.score);
        assert_eq!(next.food, state.food);
        assert_eq!(next.bricks, state.bricks);
    }

    #[test]
    fn direction_input_only_changes_the_heading() {
        let state = new_state();

        let next = state.on_direction_input(Direction::Up);

        assert_eq!(next.snake.direction(), Direction::Up);
        assert_eq!(next.snake.head(), state.snake.head());
        assert_eq!(next.score, state.score);

        // Reversal is silently rejected.
        let rejected = state.on_direction_input(Direction::Right);
        assert_eq!(rejected.snake.direction(), Direction::Left);
    }

    #[test]
    fn brick_tick_adds_one_brick_and_respects_saturation() {
        let state = new_state();

        let next = state.on_brick_tick();
        assert_eq!(next.bricks.len(), state.bricks.len() + 1);
        assert_eq!(next.snake, state.snake);
        assert_eq!(next.food, state.food);
        assert_eq!(next.score, state.score);
    }

    #[test]
    fn brick_tick_on_a_board_with_one_free_cell_then_saturates() {
        let board = Board::new(4, 4);
        let mut state = GameState::new_with_seed(board, 5);
        state.snake = Snake::from_segments(vec![Position::new(0, 0)], Direction::Left);
        state.food = None;

        let free = Position::new(2, 2);
        let reserved = [
            state.snake.head(),
            state.snake.vacated_tail(board),
            free,
        ];
        state.bricks =
            BrickField::from_cells(board.cells().filter(|cell| !reserved.contains(cell)));

        let placed = state.on_brick_tick();
        assert!(placed.bricks.contains(free));
        assert_eq!(placed.bricks.len(), state.bricks.len() + 1);

        let saturated = placed.on_brick_tick();
        assert_eq!(saturated.bricks.len(), placed.bricks.len());
    }

    #[test]
    fn eaten_food_stays_absent_when_no_free_cell_remains() {
        let board = Board::new(4, 4);
        let mut state = GameState::new_with_seed(board, 5);
        let food_cell = Position::new(0, 1);
        state.snake = Snake::from_segments(vec![Position::new(0, 0)], Direction::Down);
        state.food = Some(food_cell);
        // Everything except the head and the food is brick.
        state.bricks = BrickField::from_cells(
            board
                .cells()
                .filter(|cell| *cell != state.snake.head() && *cell != food_cell),
        );

        let next = state.on_movement_tick();

        assert_eq!(next.snake.head(), food_cell);
        assert_eq!(next.score, 1);
        assert_eq!(next.food, None);
    }

    #[test]
    fn surrounded_head_is_terminal_and_one_gap_is_not() {
        let board = Board::new(20, 16);
        let mut state = GameState::new_with_seed(board, 1);
        state.snake = Snake::from_segments(
            vec![Position::new(10, 10), Position::new(11, 10)],
            Direction::Left,
        );
        state.bricks = BrickField::from_cells([
            Position::new(9, 10),
            Position::new(10, 9),
            Position::new(10, 11),
        ]);

        // Right neighbor is the body, the other three are bricks.
        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Outcome::Loss);

        let mut open = state.clone();
        open.bricks =
            BrickField::from_cells([Position::new(9, 10), Position::new(10, 9)]);
        assert!(!open.is_terminal());
        assert_eq!(open.outcome(), Outcome::None);
    }

    #[test]
    fn terminal_outcome_splits_on_the_win_length() {
        let board = Board::new(10, 10);

        // Serpentine body over the top rows, head at (0,0). Three of the
        // head's neighbors are body cells; one brick seals the fourth.
        let serpentine = |cells: usize| -> Vec<Position> {
            (0..cells)
                .map(|i| {
                    let y = i / 10;
                    let x = if y % 2 == 0 { i % 10 } else { 9 - i % 10 };
                    Position::new(x as i32, y as i32)
                })
                .collect()
        };

        for (length, expected) in [
            (WIN_LENGTH, Outcome::Win),
            (WIN_LENGTH - 1, Outcome::Loss),
        ] {
            let mut state = GameState::new_with_seed(board, 2);
            state.snake = Snake::from_segments(serpentine(length), Direction::Left);
            state.food = None;
            state.bricks = BrickField::from_cells([Position::new(0, 9)]);

            assert!(state.is_terminal());
            assert_eq!(state.outcome(), expected);
        }
    }
}
