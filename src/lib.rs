//! TUI Snake.
//!
//! `core` holds the deterministic game logic (snake, collision, spawning,
//! state machine, and a toroidal Conway-life grid transform). `term` is
//! the framebuffer renderer, `input` maps key events to game intents, and
//! `persist` is the high-score store. Only `term`, `input`, and `persist`
//! touch I/O.

pub mod core;
pub mod input;
pub mod persist;
pub mod term;
pub mod types;
