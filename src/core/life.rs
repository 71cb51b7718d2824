//! Toroidal neighbor-counting grid transform (Conway's Game of Life).
//!
//! Shares the "2D toroidal grid + wrapped neighbor rule" shape with the
//! invincibility wrap-around in the snake core. Pure and synchronous: every
//! generation is computed from a snapshot of the previous one, never in
//! place.

use crate::core::rng::SimpleRng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl LifeGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Random initial population, roughly half alive.
    pub fn random(width: usize, height: usize, rng: &mut SimpleRng) -> Self {
        let mut grid = Self::new(width, height);
        for cell in grid.cells.iter_mut() {
            *cell = rng.next_range(2) == 1;
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.idx(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let i = self.idx(x, y);
        self.cells[i] = alive;
    }

    /// Count the 8 neighbors of (x, y), wrapping both coordinates.
    pub fn count_neighbors(&self, x: usize, y: usize) -> usize {
        let mut count = 0;
        for dy in [-1i64, 0, 1] {
            for dx in [-1i64, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = (x as i64 + dx).rem_euclid(self.width as i64) as usize;
                let ny = (y as i64 + dy).rem_euclid(self.height as i64) as usize;
                if self.get(nx, ny) {
                    count += 1;
                }
            }
        }
        count
    }

    /// The next generation under B3/S23: a live cell survives with 2 or 3
    /// live neighbors, a dead cell with exactly 3 becomes alive.
    pub fn step(&self) -> LifeGrid {
        let mut next = LifeGrid::new(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let neighbors = self.count_neighbors(x, y);
                let alive = match (self.get(x, y), neighbors) {
                    (true, 2) | (true, 3) => true,
                    (false, 3) => true,
                    _ => false,
                };
                next.set(x, y, alive);
            }
        }
        next
    }
}
