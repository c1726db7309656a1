use rand::Rng;

use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a position from raw coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Toroidal board geometry.
///
/// Every cell has exactly four orthogonal neighbors; coordinates wrap on
/// both axes, so there is no out-of-bounds.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Board {
    pub width: u16,
    pub height: u16,
}

impl Board {
    /// Creates a board with the given dimensions in cells.
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Returns the total number of cells on the board.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Wraps a position onto the torus.
    ///
    /// The result lies in `[0, width) x [0, height)` for any input sign.
    #[must_use]
    pub fn wrap(self, position: Position) -> Position {
        Position {
            x: wrap_axis(position.x, i32::from(self.width)),
            y: wrap_axis(position.y, i32::from(self.height)),
        }
    }

    /// Moves one cell from `from` in `direction`, wrapping at the edges.
    #[must_use]
    pub fn step(self, from: Position, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        self.wrap(Position {
            x: from.x + dx,
            y: from.y + dy,
        })
    }

    /// Returns a uniformly random in-bounds position.
    ///
    /// This is a candidate generator only; callers check occupancy.
    #[must_use]
    pub fn random_position<R: Rng + ?Sized>(self, rng: &mut R) -> Position {
        Position {
            x: rng.gen_range(0..i32::from(self.width)),
            y: rng.gen_range(0..i32::from(self.height)),
        }
    }

    /// Enumerates every cell on the board in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        let width = i32::from(self.width);
        let height = i32::from(self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Position { x, y }))
    }

    /// Returns the per-axis deltas from `from` to the adjacent cell `to`,
    /// normalized across the wrap seam so each component is in `-1..=1`.
    #[must_use]
    pub fn adjacent_delta(self, from: Position, to: Position) -> (i32, i32) {
        (
            normalize_axis_delta(to.x - from.x, i32::from(self.width)),
            normalize_axis_delta(to.y - from.y, i32::from(self.height)),
        )
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}

fn normalize_axis_delta(delta: i32, len: i32) -> i32 {
    if delta == len - 1 {
        -1
    } else if delta == -(len - 1) {
        1
    } else {
        delta
    }
}
