//! GameView: maps a `core::Frame` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::game::Frame;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GamePhase, PowerUpKind};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders a frame description into styled cells.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the frame into a framebuffer sized to the viewport.
    pub fn render(&self, frame: &Frame, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let grid_px_w = (frame.grid_width as u16) * self.cell_w;
        let grid_px_h = (frame.grid_height as u16) * self.cell_h;
        let frame_w = grid_px_w + 2;
        let frame_h = grid_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        // Leave a row above the border for the HUD.
        let start_y = 1 + viewport.height.saturating_sub(frame_h + 1) / 2;

        self.draw_hud(&mut fb, frame);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h);

        if let Some(food) = frame.food {
            self.draw_grid_cell(
                &mut fb,
                start_x,
                start_y,
                food.x as u16,
                food.y as u16,
                '●',
                CellStyle::fg(Rgb::RED),
            );
        }

        for &(pos, kind) in &frame.power_ups {
            self.draw_grid_cell(
                &mut fb,
                start_x,
                start_y,
                pos.x as u16,
                pos.y as u16,
                '◆',
                CellStyle::fg(kind_color(kind)).bold(),
            );
        }

        let body_color = if frame.invincible {
            Rgb::BLUE
        } else {
            Rgb::GREEN
        };
        for (i, seg) in frame.segments.iter().enumerate() {
            let style = if i == 0 {
                CellStyle::fg(Rgb::WHITE).bold()
            } else {
                CellStyle::fg(body_color)
            };
            self.draw_grid_cell(
                &mut fb,
                start_x,
                start_y,
                seg.x as u16,
                seg.y as u16,
                '█',
                style,
            );
        }

        match frame.phase {
            GamePhase::Playing => {}
            GamePhase::Paused => {
                self.draw_banner(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED", None)
            }
            GamePhase::GameOver => self.draw_banner(
                &mut fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                "GAME OVER",
                Some("R to restart, Q to quit"),
            ),
            GamePhase::NewHighScore => self.draw_banner(
                &mut fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                "NEW HIGH SCORE!",
                Some("R to restart, Q to quit"),
            ),
        }

        fb
    }

    // The HUD spans the whole viewport row, not the board frame: a board
    // narrower than the text would otherwise pile the labels on top of
    // each other.
    fn draw_hud(&self, fb: &mut FrameBuffer, frame: &Frame) {
        let hud = CellStyle::default().bold();
        fb.put_str(0, 0, &format!("Score: {}", frame.score), hud);

        if frame.invincible {
            let text = "INVINCIBLE!";
            let x = fb.width().saturating_sub(text.len() as u16) / 2;
            fb.put_str(x, 0, text, CellStyle::fg(Rgb::YELLOW).bold());
        }

        let high = format!("High: {}", frame.high_score);
        let x = fb.width().saturating_sub(high.len() as u16);
        fb.put_str(x, 0, &high, hud);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::fg(Rgb::new(200, 200, 200));
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_banner(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        title: &str,
        hint: Option<&str>,
    ) {
        let mid_y = start_y + frame_h / 2;
        let title_x = start_x + frame_w.saturating_sub(title.len() as u16) / 2;
        fb.put_str(title_x, mid_y, title, CellStyle::fg(Rgb::WHITE).bold());

        if let Some(hint) = hint {
            let hint_x = start_x + frame_w.saturating_sub(hint.len() as u16) / 2;
            fb.put_str(hint_x, mid_y + 1, hint, CellStyle::default());
        }
    }
}

fn kind_color(kind: PowerUpKind) -> Rgb {
    match kind {
        PowerUpKind::Speed => Rgb::ORANGE,
        PowerUpKind::ScoreBonus => Rgb::YELLOW,
        PowerUpKind::Invincibility => Rgb::PURPLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GamePhase, Position};

    fn test_frame() -> Frame {
        Frame {
            grid_width: 5,
            grid_height: 5,
            segments: vec![Position::new(2, 2), Position::new(1, 2)],
            food: Some(Position::new(4, 2)),
            power_ups: vec![(Position::new(0, 0), PowerUpKind::Invincibility)],
            score: 30,
            high_score: 120,
            phase: GamePhase::Playing,
            invincible: false,
        }
    }

    fn find_char(fb: &FrameBuffer, target: char) -> Vec<(u16, u16)> {
        let mut hits = Vec::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.get(x, y).unwrap().ch == target {
                    hits.push((x, y));
                }
            }
        }
        hits
    }

    fn render_to_string(fb: &FrameBuffer) -> String {
        let mut out = String::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                out.push(fb.get(x, y).unwrap().ch);
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_render_draws_all_entities() {
        let view = GameView::new(1, 1);
        let fb = view.render(&test_frame(), Viewport::new(30, 20));

        assert_eq!(find_char(&fb, '█').len(), 2, "two snake segments");
        assert_eq!(find_char(&fb, '●').len(), 1, "one food cell");
        assert_eq!(find_char(&fb, '◆').len(), 1, "one power-up");
    }

    #[test]
    fn test_head_is_styled_distinctly() {
        let view = GameView::new(1, 1);
        let fb = view.render(&test_frame(), Viewport::new(30, 20));
        let segs = find_char(&fb, '█');
        let styles: Vec<_> = segs
            .iter()
            .map(|&(x, y)| fb.get(x, y).unwrap().style)
            .collect();
        assert!(styles.iter().any(|s| s.fg == Rgb::WHITE && s.bold));
        assert!(styles.iter().any(|s| s.fg == Rgb::GREEN));
    }

    #[test]
    fn test_invincible_recolors_body_and_shows_hud_flag() {
        let view = GameView::new(1, 1);
        let mut frame = test_frame();
        frame.invincible = true;
        let fb = view.render(&frame, Viewport::new(40, 20));

        let text = render_to_string(&fb);
        assert!(text.contains("INVINCIBLE!"));
        let segs = find_char(&fb, '█');
        assert!(segs
            .iter()
            .any(|&(x, y)| fb.get(x, y).unwrap().style.fg == Rgb::BLUE));
    }

    #[test]
    fn test_hud_shows_scores() {
        let view = GameView::new(1, 1);
        let fb = view.render(&test_frame(), Viewport::new(40, 20));
        let text = render_to_string(&fb);
        assert!(text.contains("Score: 30"));
        assert!(text.contains("High: 120"));
    }

    #[test]
    fn test_hud_intact_when_board_narrower_than_labels() {
        // 5x5 board at 1x1 cells is 7 columns framed; every HUD label is
        // wider than that, so they must anchor to the viewport row instead.
        let view = GameView::new(1, 1);
        let mut frame = test_frame();
        frame.invincible = true;
        let fb = view.render(&frame, Viewport::new(40, 20));
        let text = render_to_string(&fb);
        assert!(text.contains("Score: 30"));
        assert!(text.contains("INVINCIBLE!"));
        assert!(text.contains("High: 120"));
    }

    #[test]
    fn test_banners_per_phase() {
        let view = GameView::new(1, 1);
        for (phase, banner) in [
            (GamePhase::Paused, "PAUSED"),
            (GamePhase::GameOver, "GAME OVER"),
            (GamePhase::NewHighScore, "NEW HIGH SCORE!"),
        ] {
            let mut frame = test_frame();
            frame.phase = phase;
            let fb = view.render(&frame, Viewport::new(40, 20));
            let text = render_to_string(&fb);
            assert!(text.contains(banner), "missing banner for {:?}", phase);
        }
    }

    #[test]
    fn test_missing_food_renders_nothing() {
        let view = GameView::new(1, 1);
        let mut frame = test_frame();
        frame.food = None;
        let fb = view.render(&frame, Viewport::new(30, 20));
        assert!(find_char(&fb, '●').is_empty());
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let view = GameView::default();
        let _ = view.render(&test_frame(), Viewport::new(3, 2));
    }
}
