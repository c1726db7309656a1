use rand::Rng;

use crate::board::{Board, Position};
use crate::bricks::BrickField;
use crate::snake::Snake;

/// Returns true when at least one cell is free of bricks and snake body.
///
/// Food respawn must be skipped entirely when this is false; on a full board
/// the game simply runs without food.
#[must_use]
pub fn free_cell_exists(board: Board, bricks: &BrickField, snake: &Snake) -> bool {
    board
        .cells()
        .any(|cell| !bricks.contains(cell) && !snake.occupies(cell))
}

/// Picks a random cell free of bricks and snake body.
///
/// Resamples until a free cell turns up, so callers must check
/// [`free_cell_exists`] first.
#[must_use]
pub fn respawn<R: Rng + ?Sized>(
    rng: &mut R,
    board: Board,
    bricks: &BrickField,
    snake: &Snake,
) -> Position {
    loop {
        let candidate = board.random_position(rng);
        if !bricks.contains(candidate) && !snake.occupies(candidate) {
            return candidate;
        }
    }
}
