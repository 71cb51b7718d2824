//! Collision resolver: classifies a candidate head position against the
//! grid bounds and the snake body.
//!
//! Pure function of its inputs; the state machine decides what each outcome
//! means for scores and phase transitions.

use crate::core::snake::Snake;
use crate::types::Position;

/// Outcome of moving the head to a candidate cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Out of bounds and not invincible: fatal.
    WallHit,
    /// Out of bounds while invincible: the head teleports to the opposite
    /// edge; the wrapped coordinate is carried here.
    Wrapped(Position),
    /// Lands on a body segment and not invincible: fatal.
    SelfHit,
    /// Free to move; the effective (in-bounds) head is carried here.
    Clear(Position),
}

/// Classify `next_head`. The wall check runs first: a wrapped head must be
/// tested against the body using its wrapped coordinates, not the raw
/// out-of-bounds ones.
pub fn resolve(
    next_head: Position,
    snake: &Snake,
    width: i16,
    height: i16,
    invincible: bool,
) -> Collision {
    let (head, wrapped) = if next_head.in_bounds(width, height) {
        (next_head, false)
    } else if invincible {
        (next_head.wrapped(width, height), true)
    } else {
        return Collision::WallHit;
    };

    if !invincible && snake.contains(head) {
        return Collision::SelfHit;
    }

    if wrapped {
        Collision::Wrapped(head)
    } else {
        Collision::Clear(head)
    }
}
