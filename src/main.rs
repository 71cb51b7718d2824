//! Terminal snake runner.
//!
//! One logical tick = drain input + one state update + one render, gated by
//! a poll timeout that maintains the current tick rate. The Speed power-up
//! raises the rate mid-session, so the tick duration is recomputed every
//! iteration.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::Game;
use tui_snake::input::map_key;
use tui_snake::persist::FileHighScoreStore;
use tui_snake::term::{GameView, TerminalRenderer, Viewport};
use tui_snake::types::{GameConfig, GameIntent};

const HIGH_SCORE_FILE: &str = "high_score.txt";

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let store = FileHighScoreStore::new(HIGH_SCORE_FILE);
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1);

    let mut game = Game::new(GameConfig::default(), seed, store);
    let view = GameView::default();

    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game.frame(), Viewport::new(w, h));
        term.draw(&fb)?;

        let tick_duration = Duration::from_millis(1000 / game.ticks_per_second().max(1) as u64);

        // Wait for input, but never past the next tick boundary.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(intent) = map_key(key) {
                        if intent == GameIntent::Quit {
                            game.finalize();
                            return Ok(());
                        }
                        game.apply_intent(intent);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick()?;
        }
    }
}
