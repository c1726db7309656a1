use std::collections::HashSet;

use rand::Rng;

use crate::board::{Board, Position};
use crate::snake::Snake;

/// The permanent obstacle field: a set of blocked cells that only ever grows
/// over the course of a session.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct BrickField {
    cells: HashSet<Position>,
}

impl BrickField {
    /// Creates an empty field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a field from explicit cells.
    #[must_use]
    pub fn from_cells<I: IntoIterator<Item = Position>>(cells: I) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    /// Builds the fixed starting layout: four L-shaped clusters hugging the
    /// board corners, 7 cells each (the corner cell plus three along either
    /// edge), 28 cells total, symmetric under both axis mirrors.
    #[must_use]
    pub fn corner_layout(board: Board) -> Self {
        let right = i32::from(board.width) - 1;
        let bottom = i32::from(board.height) - 1;

        let mut cells = HashSet::new();
        for (corner_x, corner_y, step_x, step_y) in [
            (0, 0, 1, 1),
            (right, 0, -1, 1),
            (0, bottom, 1, -1),
            (right, bottom, -1, -1),
        ] {
            cells.insert(Position::new(corner_x, corner_y));
            for arm in 1..=3 {
                cells.insert(Position::new(corner_x + step_x * arm, corner_y));
                cells.insert(Position::new(corner_x, corner_y + step_y * arm));
            }
        }

        Self { cells }
    }

    /// Returns true when `position` is blocked.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }

    /// Returns the number of blocked cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true when no cell is blocked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over the blocked cells in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }

    /// Returns a field extended by one randomly placed brick.
    ///
    /// Candidates are resampled until one clears [`Self::excludes`]. This
    /// loops forever on a saturated board, so callers must gate it with
    /// [`Self::can_place_more`].
    #[must_use]
    pub fn place_random<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        board: Board,
        snake: &Snake,
        food: Option<Position>,
    ) -> Self {
        loop {
            let candidate = board.random_position(rng);
            if !self.excludes(candidate, board, snake, food) {
                let mut next = self.clone();
                next.cells.insert(candidate);
                return next;
            }
        }
    }

    /// Returns true when at least one board cell can still take a brick.
    ///
    /// Exhaustive scan over the board with the same exclusion rules as
    /// placement; this is the saturation guard that keeps
    /// [`Self::place_random`] from livelocking.
    #[must_use]
    pub fn can_place_more(&self, board: Board, snake: &Snake, food: Option<Position>) -> bool {
        board
            .cells()
            .any(|cell| !self.excludes(cell, board, snake, food))
    }

    /// The four placement exclusions: an existing brick, the food cell, the
    /// snake's head, and the cell the tail is about to vacate.
    fn excludes(
        &self,
        candidate: Position,
        board: Board,
        snake: &Snake,
        food: Option<Position>,
    ) -> bool {
        self.cells.contains(&candidate)
            || candidate == snake.head()
            || candidate == snake.vacated_tail(board)
            || food == Some(candidate)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::board::{Board, Position};
    use crate::input::Direction;
    use crate::snake::Snake;

    use super::BrickField;

    fn board() -> Board {
        Board::new(20, 16)
    }

    fn snake() -> Snake {
        Snake::from_segments(
            vec![
                Position::new(5, 5),
                Position::new(6, 5),
                Position::new(7, 5),
            ],
            Direction::Left,
        )
    }

    #[test]
    fn corner_layout_has_28_symmetric_cells() {
        let b = board();
        let field = BrickField::corner_layout(b);

        assert_eq!(field.len(), 28);

        let right = i32::from(b.width) - 1;
        let bottom = i32::from(b.height) - 1;
        for cell in field.iter() {
            // Mirror images along both axes are also bricks.
            assert!(field.contains(Position::new(right - cell.x, cell.y)));
            assert!(field.contains(Position::new(cell.x, bottom - cell.y)));
        }

        assert!(field.contains(Position::new(0, 0)));
        assert!(field.contains(Position::new(3, 0)));
        assert!(field.contains(Position::new(0, 3)));
        assert!(!field.contains(Position::new(4, 0)));
        assert!(!field.contains(Position::new(1, 1)));
    }

    #[test]
    fn place_random_adds_exactly_one_brick_clearing_all_exclusions() {
        let mut rng = StdRng::seed_from_u64(3);
        let b = board();
        let s = snake();
        let food = Some(Position::new(3, 3));

        let mut field = BrickField::corner_layout(b);
        for _ in 0..50 {
            let before = field.len();
            let next = field.place_random(&mut rng, b, &s, food);

            assert_eq!(next.len(), before + 1);
            assert!(!next.contains(s.head()));
            assert!(!next.contains(s.vacated_tail(b)));
            assert!(!next.contains(Position::new(3, 3)));
            field = next;
        }
    }

    #[test]
    fn can_place_more_is_false_once_saturated() {
        let b = Board::new(4, 4);
        let s = Snake::from_segments(vec![Position::new(0, 0)], Direction::Left);
        // Facing left, the tail vacates toward (1,0).
        let reserved = [s.head(), s.vacated_tail(b)];

        let field =
            BrickField::from_cells(b.cells().filter(|cell| !reserved.contains(cell)));

        assert!(!field.can_place_more(b, &s, None));
    }

    #[test]
    fn last_free_cell_is_found_by_the_exhaustive_scan() {
        let b = Board::new(4, 4);
        let s = Snake::from_segments(vec![Position::new(0, 0)], Direction::Left);
        let free = Position::new(2, 2);
        let reserved = [s.head(), s.vacated_tail(b), free];

        let field =
            BrickField::from_cells(b.cells().filter(|cell| !reserved.contains(cell)));

        assert!(field.can_place_more(b, &s, None));

        let mut rng = StdRng::seed_from_u64(9);
        let next = field.place_random(&mut rng, b, &s, None);
        assert!(next.contains(free));
        assert!(!next.can_place_more(b, &s, None));
    }

    #[test]
    fn vacated_tail_cell_never_takes_a_brick() {
        let b = board();
        let s = snake();
        let mut rng = StdRng::seed_from_u64(17);

        // Block everything except the reserved cells so placement would have
        // to pick the vacated tail if it were legal.
        let reserved = [s.head(), s.vacated_tail(b)];
        let field =
            BrickField::from_cells(b.cells().filter(|cell| !reserved.contains(cell)));

        assert!(!field.can_place_more(b, &s, None));

        // With one genuinely free cell the sampler settles on it.
        let open = Position::new(10, 10);
        let field = BrickField::from_cells(
            b.cells()
                .filter(|cell| !reserved.contains(cell) && *cell != open),
        );
        let next = field.place_random(&mut rng, b, &s, None);
        assert!(next.contains(open));
        assert!(!next.contains(s.vacated_tail(b)));
    }
}
