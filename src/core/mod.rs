//! Core module - pure game logic with no external dependencies
//!
//! Everything here is deterministic given a seed and a sequence of intents.
//! It has zero dependencies on UI, timing, or I/O.

pub mod collision;
pub mod game;
pub mod life;
pub mod rng;
pub mod snake;
pub mod spawn;

pub use collision::{resolve, Collision};
pub use game::{Frame, Game};
pub use life::LifeGrid;
pub use rng::SimpleRng;
pub use snake::{InvalidMove, Snake};
pub use spawn::{NoSpaceAvailable, PowerUp, Spawner};
