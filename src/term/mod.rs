//! Terminal rendering layer.
//!
//! Renders into a simple framebuffer of styled character cells and flushes
//! it to the terminal. `GameView` is pure (frame -> framebuffer) and
//! unit-testable; only `TerminalRenderer` touches the terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
