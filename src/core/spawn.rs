//! Food and power-up spawner.
//!
//! Owns the random source so that placement is deterministic under a fixed
//! seed. Never places a collectible on an occupied cell.

use std::fmt;

use crate::core::rng::SimpleRng;
use crate::types::{Position, PowerUpKind};

/// Placement failed because no free cell exists. Only possible when the
/// snake (nearly) fills the board; recoverable - callers retry next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoSpaceAvailable;

impl fmt::Display for NoSpaceAvailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no free grid cell available for placement")
    }
}

impl std::error::Error for NoSpaceAvailable {}

/// A timed collectible on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerUp {
    pub pos: Position,
    pub kind: PowerUpKind,
    pub lifetime: u32,
}

impl PowerUp {
    pub fn new(pos: Position, kind: PowerUpKind, lifetime: u32) -> Self {
        Self {
            pos,
            kind,
            lifetime,
        }
    }

    /// Age by one tick. Returns whether the power-up is still alive.
    pub fn tick(&mut self) -> bool {
        self.lifetime = self.lifetime.saturating_sub(1);
        self.lifetime > 0
    }
}

/// Produces non-colliding random positions for collectibles.
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: SimpleRng,
    width: i16,
    height: i16,
}

impl Spawner {
    pub fn new(seed: u32, width: i16, height: i16) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            width,
            height,
        }
    }

    /// Draw uniform candidates until one misses every cell in `occupied`.
    ///
    /// Terminates: if the grid is fully occupied this fails up front, and
    /// otherwise a free cell is found with probability 1.
    pub fn place_food<F>(&mut self, occupied: F) -> Result<Position, NoSpaceAvailable>
    where
        F: Fn(Position) -> bool,
    {
        let cells = (self.width as usize) * (self.height as usize);
        let taken = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| Position::new(x, y)))
            .filter(|&p| occupied(p))
            .count();
        if taken >= cells {
            return Err(NoSpaceAvailable);
        }

        loop {
            let candidate = self.rng.next_position(self.width, self.height);
            if !occupied(candidate) {
                return Ok(candidate);
            }
        }
    }

    /// Roll the spawn chance and, under the cap, attempt exactly one
    /// placement disjoint from `occupied` (snake plus current food). A
    /// colliding candidate silently skips; the caller simply tries again on
    /// a later consumption.
    pub fn maybe_spawn_power_up<F>(
        &mut self,
        occupied: F,
        active_count: usize,
        cap: usize,
        spawn_percent: u32,
        lifetime: u32,
    ) -> Option<PowerUp>
    where
        F: Fn(Position) -> bool,
    {
        if active_count >= cap || !self.rng.roll_percent(spawn_percent) {
            return None;
        }

        let candidate = self.rng.next_position(self.width, self.height);
        if occupied(candidate) {
            return None;
        }

        let kind = self.rng.choose(&PowerUpKind::ALL);
        Some(PowerUp::new(candidate, kind, lifetime))
    }
}
