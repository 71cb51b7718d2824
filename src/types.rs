//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Grid dimensions (cells).
pub const GRID_WIDTH: i16 = 40;
pub const GRID_HEIGHT: i16 = 30;

/// Base simulation rate (logical ticks per second).
pub const BASE_TICKS_PER_SECOND: u32 = 12;

/// Scoring constants.
pub const FOOD_SCORE: u32 = 10;
pub const POWER_UP_BONUS: u32 = 50;

/// Power-up tuning.
pub const POWER_UP_LIFETIME_TICKS: u32 = 300;
pub const POWER_UP_SPAWN_PERCENT: u32 = 30;
pub const POWER_UP_CAP: usize = 2;
pub const INVINCIBILITY_TICKS: u32 = 300;
pub const SPEED_BOOST_TPS: u32 = 2;

/// A grid cell coordinate. Equality is by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The position shifted by one cell in `dir`. May leave the grid; the
    /// collision resolver decides what an out-of-bounds result means.
    pub fn step(&self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// The position with both coordinates wrapped into `[0, w) x [0, h)`.
    pub fn wrapped(&self, width: i16, height: i16) -> Self {
        Self::new(self.x.rem_euclid(width), self.y.rem_euclid(height))
    }

    pub fn in_bounds(&self, width: i16, height: i16) -> bool {
        self.x >= 0 && self.x < width && self.y >= 0 && self.y < height
    }
}

/// Snake travel direction, each mapping to a unit delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True when `other` is the exact reverse of `self`. A reversal is never
    /// a legal turn: it would walk the head straight into the neck.
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Collectible power-up kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    Speed,
    ScoreBonus,
    Invincibility,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::Speed,
        PowerUpKind::ScoreBonus,
        PowerUpKind::Invincibility,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PowerUpKind::Speed => "speed",
            PowerUpKind::ScoreBonus => "score",
            PowerUpKind::Invincibility => "invincible",
        }
    }
}

/// Finite game states. `Playing` is initial; `GameOver`/`NewHighScore` are
/// terminal until a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Paused,
    GameOver,
    NewHighScore,
}

/// Discrete input intents, independent of the polling mechanism that
/// produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameIntent {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Pause,
    Restart,
    Quit,
}

impl GameIntent {
    /// The direction a movement intent requests, if any.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameIntent::MoveUp => Some(Direction::Up),
            GameIntent::MoveDown => Some(Direction::Down),
            GameIntent::MoveLeft => Some(Direction::Left),
            GameIntent::MoveRight => Some(Direction::Right),
            _ => None,
        }
    }
}

/// All tunables, fixed at construction. `Default` carries the reference
/// values above.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    pub grid_width: i16,
    pub grid_height: i16,
    pub base_ticks_per_second: u32,
    pub food_score: u32,
    pub power_up_bonus: u32,
    pub power_up_lifetime: u32,
    pub power_up_spawn_percent: u32,
    pub power_up_cap: usize,
    pub invincibility_ticks: u32,
    pub speed_boost_tps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            base_ticks_per_second: BASE_TICKS_PER_SECOND,
            food_score: FOOD_SCORE,
            power_up_bonus: POWER_UP_BONUS,
            power_up_lifetime: POWER_UP_LIFETIME_TICKS,
            power_up_spawn_percent: POWER_UP_SPAWN_PERCENT,
            power_up_cap: POWER_UP_CAP,
            invincibility_ticks: INVINCIBILITY_TICKS,
            speed_boost_tps: SPEED_BOOST_TPS,
        }
    }
}
