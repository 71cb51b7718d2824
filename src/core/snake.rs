//! Snake actor: the ordered body-segment sequence and movement rules.
//!
//! The snake does not know about walls, food, or power-ups. Callers classify
//! the candidate head through `core::collision` first and then commit the
//! move with [`Snake::advance`].

use std::collections::VecDeque;
use std::fmt;

use crate::types::{Direction, Position};

/// Programmer-error result of committing a move whose head overlaps the body.
///
/// Never expected at runtime: the caller is supposed to run the collision
/// resolver before `advance`. Surfaced as an error rather than a panic so the
/// binary can fail with context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidMove {
    pub head: Position,
}

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "advance to ({}, {}) overlaps the snake body; collision was not resolved first",
            self.head.x, self.head.y
        )
    }
}

impl std::error::Error for InvalidMove {}

/// Ordered body segments, head first. Positions are unique while alive,
/// except during invincibility when the head may overlap the body.
#[derive(Debug, Clone)]
pub struct Snake {
    segments: VecDeque<Position>,
    direction: Direction,
}

impl Snake {
    pub fn new(start: Position, direction: Direction) -> Self {
        let mut segments = VecDeque::new();
        segments.push_back(start);
        Self {
            segments,
            direction,
        }
    }

    pub fn head(&self) -> Position {
        // Invariant: the segment list is never empty.
        *self.segments.front().unwrap()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.segments.iter().copied()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// The cell the head would occupy after one step in `direction`.
    /// Does not mutate state and may be outside the grid.
    pub fn peek_next_head(&self, direction: Direction) -> Position {
        self.head().step(direction)
    }

    /// Change travel direction. A change that exactly reverses the current
    /// direction is rejected and the previous direction is kept.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Commit a move: insert `new_head` at the front and, unless `grew`,
    /// drop the tail.
    ///
    /// Trusts its caller: the head must already be classified by the
    /// collision resolver. `new_head` may still equal the current tail cell
    /// when not growing, since that cell is vacated by the same move. While
    /// `invincible` the body-overlap check is suspended entirely and the
    /// head may occupy a cell a body segment already holds.
    pub fn advance(
        &mut self,
        new_head: Position,
        grew: bool,
        invincible: bool,
    ) -> Result<(), InvalidMove> {
        let tail = *self.segments.back().unwrap();
        let hits_body = !invincible
            && self
                .segments
                .iter()
                .any(|&seg| seg == new_head && (grew || seg != tail));
        if hits_body {
            return Err(InvalidMove { head: new_head });
        }

        self.segments.push_front(new_head);
        if !grew {
            self.segments.pop_back();
        }
        Ok(())
    }
}
