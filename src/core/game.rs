//! Game state machine - owns the snake, collectibles, and score for one
//! session and drives the per-tick update order.
//!
//! The machine is the sole mutator of game state. Rendering reads a
//! [`Frame`] snapshot; persistence goes through the [`HighScoreStore`]
//! collaborator at session start, on new-high-score game overs, and on quit.

use log::warn;

use crate::core::collision::{resolve, Collision};
use crate::core::snake::{InvalidMove, Snake};
use crate::core::spawn::{PowerUp, Spawner};
use crate::persist::HighScoreStore;
use crate::types::{Direction, GameConfig, GameIntent, GamePhase, Position, PowerUpKind};

/// Read-only frame description handed to the render sink each tick.
#[derive(Debug, Clone)]
pub struct Frame {
    pub grid_width: i16,
    pub grid_height: i16,
    /// Body segments, head first.
    pub segments: Vec<Position>,
    pub food: Option<Position>,
    pub power_ups: Vec<(Position, PowerUpKind)>,
    pub score: u32,
    pub high_score: u32,
    pub phase: GamePhase,
    pub invincible: bool,
}

/// One snake session plus the persisted high score carried across sessions.
pub struct Game<S: HighScoreStore> {
    config: GameConfig,
    spawner: Spawner,
    snake: Snake,
    /// `None` while a relocation is pending retry (board nearly full).
    food: Option<Position>,
    power_ups: Vec<PowerUp>,
    score: u32,
    high_score: u32,
    phase: GamePhase,
    invincible: bool,
    invincible_ticks: u32,
    ticks_per_second: u32,
    /// Last valid direction change received this tick, applied at tick start.
    pending_direction: Option<Direction>,
    store: S,
}

impl<S: HighScoreStore> Game<S> {
    pub fn new(config: GameConfig, seed: u32, store: S) -> Self {
        let high_score = store.load().unwrap_or_else(|e| {
            warn!("using high score 0: {}", e);
            0
        });

        let mut game = Self {
            config,
            spawner: Spawner::new(seed, config.grid_width, config.grid_height),
            snake: Snake::new(Position::new(0, 0), Direction::Right),
            food: None,
            power_ups: Vec::new(),
            score: 0,
            high_score,
            phase: GamePhase::Playing,
            invincible: false,
            invincible_ticks: 0,
            ticks_per_second: config.base_ticks_per_second,
            pending_direction: None,
            store,
        };
        game.reset_session();
        game
    }

    /// Full reset: new snake, new food, cleared power-ups, score 0. The high
    /// score is retained.
    fn reset_session(&mut self) {
        let center = Position::new(self.config.grid_width / 2, self.config.grid_height / 2);
        self.snake = Snake::new(center, Direction::Right);
        self.power_ups.clear();
        self.score = 0;
        self.invincible = false;
        self.invincible_ticks = 0;
        self.ticks_per_second = self.config.base_ticks_per_second;
        self.pending_direction = None;
        self.phase = GamePhase::Playing;
        self.food = None;
        self.relocate_food();
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn invincible(&self) -> bool {
        self.invincible
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Position> {
        self.food
    }

    pub fn power_ups(&self) -> &[PowerUp] {
        &self.power_ups
    }

    /// Current tick rate; the Speed power-up raises it for the session.
    pub fn ticks_per_second(&self) -> u32 {
        self.ticks_per_second
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Map a discrete input intent onto a state transition.
    ///
    /// Direction changes are buffered: repeated changes within one tick
    /// collapse to the last one that is not a reversal of the direction of
    /// travel. Quit is a loop-level concern; callers end the loop and call
    /// [`Game::finalize`].
    pub fn apply_intent(&mut self, intent: GameIntent) {
        if self.phase == GamePhase::Playing {
            if let Some(dir) = intent.direction() {
                if !self.snake.direction().is_opposite(dir) {
                    self.pending_direction = Some(dir);
                }
                return;
            }
        }

        match (self.phase, intent) {
            (GamePhase::Playing, GameIntent::Pause) => self.phase = GamePhase::Paused,
            (GamePhase::Paused, GameIntent::Pause) => self.phase = GamePhase::Playing,
            (GamePhase::GameOver | GamePhase::NewHighScore, GameIntent::Restart) => {
                self.reset_session()
            }
            _ => {}
        }
    }

    /// One simulation step. Does nothing unless Playing.
    ///
    /// `InvalidMove` escaping here means the collision resolver and the
    /// snake disagree about occupancy - a bug, not a runtime condition.
    pub fn tick(&mut self) -> Result<(), InvalidMove> {
        if self.phase != GamePhase::Playing {
            return Ok(());
        }

        if let Some(dir) = self.pending_direction.take() {
            self.snake.set_direction(dir);
        }

        let candidate = self.snake.peek_next_head(self.snake.direction());
        let head = match resolve(
            candidate,
            &self.snake,
            self.config.grid_width,
            self.config.grid_height,
            self.invincible,
        ) {
            Collision::WallHit | Collision::SelfHit => {
                self.end_session();
                return Ok(());
            }
            Collision::Wrapped(p) | Collision::Clear(p) => p,
        };

        let grew = self.food == Some(head);
        self.snake.advance(head, grew, self.invincible)?;

        if grew {
            self.score += self.config.food_score;
            self.relocate_food();
            self.try_spawn_power_up();
        }

        // Power-up consumption is independent of food: landing on both in
        // one tick applies both effects.
        let mut i = 0;
        while i < self.power_ups.len() {
            if self.power_ups[i].pos == head {
                let kind = self.power_ups.remove(i).kind;
                self.apply_power_up(kind);
            } else {
                i += 1;
            }
        }

        if self.invincible {
            self.invincible_ticks = self.invincible_ticks.saturating_sub(1);
            if self.invincible_ticks == 0 {
                self.invincible = false;
            }
        }

        self.power_ups.retain_mut(|p| p.tick());

        // A failed relocation (board nearly full) retries here.
        if self.food.is_none() {
            self.relocate_food();
        }

        Ok(())
    }

    /// Run pending high-score persistence before the process exits.
    pub fn finalize(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
            if let Err(e) = self.store.save(self.high_score) {
                warn!("failed to persist high score on exit: {}", e);
            }
        }
    }

    pub fn frame(&self) -> Frame {
        Frame {
            grid_width: self.config.grid_width,
            grid_height: self.config.grid_height,
            segments: self.snake.segments().collect(),
            food: self.food,
            power_ups: self.power_ups.iter().map(|p| (p.pos, p.kind)).collect(),
            score: self.score,
            high_score: self.high_score,
            phase: self.phase,
            invincible: self.invincible,
        }
    }

    fn end_session(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
            if let Err(e) = self.store.save(self.high_score) {
                warn!("failed to persist high score: {}", e);
            }
            self.phase = GamePhase::NewHighScore;
        } else {
            self.phase = GamePhase::GameOver;
        }
    }

    fn relocate_food(&mut self) {
        let snake = &self.snake;
        match self.spawner.place_food(|p| snake.contains(p)) {
            Ok(pos) => self.food = Some(pos),
            Err(e) => {
                warn!("food placement skipped: {}", e);
                self.food = None;
            }
        }
    }

    fn try_spawn_power_up(&mut self) {
        let snake = &self.snake;
        let food = self.food;
        let occupied = |p: Position| snake.contains(p) || food == Some(p);
        if let Some(power_up) = self.spawner.maybe_spawn_power_up(
            occupied,
            self.power_ups.len(),
            self.config.power_up_cap,
            self.config.power_up_spawn_percent,
            self.config.power_up_lifetime,
        ) {
            self.power_ups.push(power_up);
        }
    }

    fn apply_power_up(&mut self, kind: PowerUpKind) {
        match kind {
            PowerUpKind::Speed => self.ticks_per_second += self.config.speed_boost_tps,
            PowerUpKind::ScoreBonus => self.score += self.config.power_up_bonus,
            PowerUpKind::Invincibility => {
                self.invincible = true;
                self.invincible_ticks = self.config.invincibility_ticks;
            }
        }
    }
}
