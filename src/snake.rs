use std::collections::VecDeque;

use crate::board::{Board, Position};
use crate::bricks::BrickField;
use crate::input::Direction;

/// Segments owed to the body after eating one piece of food.
pub const GROWTH_BONUS: u32 = 5;

/// The player-controlled snake: ordered body, facing direction, growth debt.
///
/// All movement operations are pure: they return a new snake and leave the
/// receiver untouched. A rejected move returns a clone of the receiver.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_growth: u32,
}

impl Snake {
    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        debug_assert!(!segments.is_empty());

        Self {
            body: VecDeque::from(segments),
            direction,
            pending_growth: 0,
        }
    }

    /// Advances the snake one cell in its facing direction.
    ///
    /// When the target cell holds a brick or a body segment the move is
    /// rejected and the snake is returned unchanged: being blocked halts
    /// forward progress but is not by itself a loss. Landing on `food` adds
    /// [`GROWTH_BONUS`] to the growth debt; while debt remains, the tail is
    /// kept for one tick per owed segment.
    #[must_use]
    pub fn advance(&self, board: Board, bricks: &BrickField, food: Option<Position>) -> Self {
        let next_head = board.step(self.head(), self.direction);

        if self.occupies(next_head) || bricks.contains(next_head) {
            return self.clone();
        }

        let mut next = self.clone();
        if food == Some(next_head) {
            next.pending_growth += GROWTH_BONUS;
        }

        next.body.push_front(next_head);
        if next.pending_growth > 0 {
            next.pending_growth -= 1;
        } else {
            let _ = next.body.pop_back();
        }

        next
    }

    /// Changes the facing direction without moving.
    ///
    /// The request is silently rejected when it reverses the current
    /// direction, or when the cell it would enter next tick holds a brick or
    /// a body segment. Only the direction changes; body and growth debt are
    /// untouched.
    #[must_use]
    pub fn change_direction(
        &self,
        board: Board,
        requested: Direction,
        bricks: &BrickField,
    ) -> Self {
        if requested.is_opposite(self.direction) {
            return self.clone();
        }

        let target = board.step(self.head(), requested);
        if bricks.contains(target) || self.occupies(target) {
            return self.clone();
        }

        let mut next = self.clone();
        next.direction = requested;
        next
    }

    /// Returns the cell the tail leaves on the next normal move.
    ///
    /// Computed as the tail shifted backward along the *head's* facing
    /// direction, wrapped. Brick placement reserves this cell so a fresh
    /// brick can never cut off the move the snake is about to make.
    #[must_use]
    pub fn vacated_tail(&self, board: Board) -> Position {
        let (dx, dy) = self.direction.delta();
        let tail = self.tail();
        board.wrap(Position {
            x: tail.x - dx,
            y: tail.y - dy,
        })
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments. Never true in play.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current facing direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the number of segments still owed from recent food.
    #[must_use]
    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

/// Corner category of a body segment, derived from the travel direction
/// through it: `<incoming>` then `<outgoing>` as seen from tail to head.
///
/// Sprite and glyph selection for bent body segments keys off this.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Turn {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

/// Classifies the body segment at `current` from its neighbors in the body
/// order (`previous` is the segment nearer the head, `next` nearer the tail).
///
/// Returns `None` for straight segments. Deltas are normalized across the
/// wrap seam, so corners at the board edges classify the same as interior
/// ones.
#[must_use]
pub fn classify_turn(
    board: Board,
    previous: Position,
    current: Position,
    next: Position,
) -> Option<Turn> {
    let (dx1, dy1) = board.adjacent_delta(previous, current);
    let (dx2, dy2) = board.adjacent_delta(current, next);

    if dx1 > 0 && dy2 < 0 {
        Some(Turn::RightUp)
    } else if dx1 > 0 && dy2 > 0 {
        Some(Turn::RightDown)
    } else if dx1 < 0 && dy2 < 0 {
        Some(Turn::LeftUp)
    } else if dx1 < 0 && dy2 > 0 {
        Some(Turn::LeftDown)
    } else if dy1 < 0 && dx2 > 0 {
        Some(Turn::UpRight)
    } else if dy1 < 0 && dx2 < 0 {
        Some(Turn::UpLeft)
    } else if dy1 > 0 && dx2 > 0 {
        Some(Turn::DownRight)
    } else if dy1 > 0 && dx2 < 0 {
        Some(Turn::DownLeft)
    } else {
        None
    }
}
