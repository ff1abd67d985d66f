//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested.

use crate::core::{CubeSnapshot, GameSnapshot};
use crate::fb::{FrameBuffer, GlyphStyle, Rgb};
use crate::types::{Style, GRID_HEIGHT, GRID_WIDTH};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Terminal layout for the board, side panel and overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 makes cells look roughly square in most terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Foreground color for a cube style.
pub fn style_color(style: Style) -> Rgb {
    match style {
        Style::Green => Rgb::new(100, 220, 120),
        Style::Red => Rgb::new(220, 80, 80),
        Style::Blue => Rgb::new(80, 120, 220),
        Style::Yellow => Rgb::new(240, 220, 80),
        Style::Purple => Rgb::new(200, 120, 220),
        Style::Cyan => Rgb::new(80, 220, 220),
        Style::Orange => Rgb::new(255, 165, 0),
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Board frame size including the border.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            GRID_WIDTH as u16 * self.cell_w + 2,
            GRID_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(GlyphStyle::default());

        let (frame_w, frame_h) = self.frame_size();
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        let empty = GlyphStyle::plain(Rgb::new(90, 90, 100), BOARD_BG).dim();
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (x, y) = (x as u16, y as u16);
                match cell {
                    Some(style) => self.draw_cube(fb, origin_x, origin_y, x, y, *style),
                    None => self.fill_cell(fb, origin_x, origin_y, x, y, '·', empty),
                }
            }
        }

        for cube in &snap.active {
            if let (Ok(x), Ok(y)) = (u16::try_from(cube.x), u16::try_from(cube.y)) {
                if (x as usize) < GRID_WIDTH && (y as usize) < GRID_HEIGHT {
                    self.draw_cube(fb, origin_x, origin_y, x, y, cube.style);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, origin_x + frame_w + 2, origin_y);

        if snap.show_game_over() {
            let mid = origin_y + frame_h / 2;
            self.draw_centered(fb, origin_x, frame_w, mid, "GAME OVER");
            self.draw_centered(fb, origin_x, frame_w, mid + 1, "R to restart");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = GlyphStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);
        let (right, bottom) = (x + w - 1, y + h - 1);

        fb.put(x, y, '┌', style);
        fb.put(right, y, '┐', style);
        fb.put(x, bottom, '└', style);
        fb.put(right, bottom, '┘', style);
        for dx in x + 1..right {
            fb.put(dx, y, '─', style);
            fb.put(dx, bottom, '─', style);
        }
        for dy in y + 1..bottom {
            fb.put(x, dy, '│', style);
            fb.put(right, dy, '│', style);
        }
    }

    fn draw_cube(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, x: u16, y: u16, style: Style) {
        let glyph = GlyphStyle::plain(style_color(style), BOARD_BG).bold();
        self.fill_cell(fb, ox, oy, x, y, '█', glyph);
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        ox: u16,
        oy: u16,
        x: u16,
        y: u16,
        ch: char,
        style: GlyphStyle,
    ) {
        let px = ox + 1 + x * self.cell_w;
        let py = oy + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        top: u16,
    ) {
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        let label = GlyphStyle::default().bold();
        let value = GlyphStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = top;
        for (name, v) in [
            ("SCORE", snap.score),
            ("HIGH", snap.high_score),
            ("LEVEL", snap.level),
            ("LINES", snap.total_cleared_rows),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "NEXT", label);
        self.draw_preview(fb, &snap.next, panel_x, y + 1);
    }

    /// Queued piece, shifted so its top-left cube sits at (x, y).
    fn draw_preview(&self, fb: &mut FrameBuffer, cubes: &[CubeSnapshot], x: u16, y: u16) {
        let min_x = cubes.iter().map(|c| c.x).min().unwrap_or(0);
        let min_y = cubes.iter().map(|c| c.y).min().unwrap_or(0);
        for cube in cubes {
            let style = GlyphStyle::plain(style_color(cube.style), PANEL_BG).bold();
            let px = x + (cube.x - min_x) as u16 * self.cell_w;
            let py = y + (cube.y - min_y) as u16 * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }

    fn draw_centered(&self, fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        let style = GlyphStyle::plain(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x + w.saturating_sub(text_w) / 2, y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, ScriptedShapes};
    use crate::types::ShapeId;

    fn row_text(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width()).filter_map(|x| fb.get(x, y)).map(|g| g.ch).collect()
    }

    fn contains_text(fb: &FrameBuffer, needle: &str) -> bool {
        (0..fb.height()).any(|y| row_text(fb, y).contains(needle))
    }

    fn snapshot() -> GameSnapshot {
        let mut source = ScriptedShapes::new([ShapeId::T, ShapeId::I]);
        GameState::new(&mut source).snapshot()
    }

    #[test]
    fn border_is_centered_in_viewport() {
        let view = GameView::default();
        let (w, h) = view.frame_size();
        assert_eq!((w, h), (22, 22));

        let fb = view.render(&snapshot(), Viewport::new(60, 24));
        let (ox, oy) = ((60 - w) / 2, (24 - h) / 2);
        assert_eq!(fb.get(ox, oy).unwrap().ch, '┌');
        assert_eq!(fb.get(ox + w - 1, oy + h - 1).unwrap().ch, '┘');
    }

    #[test]
    fn active_cubes_use_their_style_color() {
        let view = GameView::default();
        let snap = snapshot();
        let fb = view.render(&snap, Viewport::new(60, 24));
        let (w, h) = view.frame_size();
        let (ox, oy) = ((60 - w) / 2, (24 - h) / 2);

        let cube = snap.active[0];
        let glyph = fb
            .get(ox + 1 + cube.x as u16 * 2, oy + 1 + cube.y as u16)
            .unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.style.fg, style_color(Style::Blue));
    }

    #[test]
    fn side_panel_lists_stats() {
        let mut snap = snapshot();
        snap.score = 125;
        let fb = GameView::default().render(&snap, Viewport::new(60, 24));
        for label in ["SCORE", "HIGH", "LEVEL", "LINES", "NEXT", "125"] {
            assert!(contains_text(&fb, label), "missing {label}");
        }
    }

    #[test]
    fn overlay_only_after_game_end() {
        let view = GameView::default();
        let mut snap = snapshot();
        assert!(!contains_text(&view.render(&snap, Viewport::new(60, 24)), "GAME OVER"));

        snap.game_end = true;
        let fb = view.render(&snap, Viewport::new(60, 24));
        assert!(contains_text(&fb, "GAME OVER"));
        assert!(contains_text(&fb, "R to restart"));
    }

    #[test]
    fn narrow_viewport_drops_side_panel() {
        let fb = GameView::default().render(&snapshot(), Viewport::new(24, 24));
        assert!(!contains_text(&fb, "SCORE"));
    }
}
