//! Drawing surfaces for the particle field.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::color::{RgbaColor, blend_over};

/// Virtual pixel size of one terminal cell.
pub const CELL_WIDTH_PX: f32 = 8.0;
pub const CELL_HEIGHT_PX: f32 = 16.0;

/// Braille dots per cell.
const DOTS_PER_CELL_X: u16 = 2;
const DOTS_PER_CELL_Y: u16 = 4;

/// Virtual pixels covered by one braille dot (square).
const DOT_PX: f32 = CELL_WIDTH_PX / DOTS_PER_CELL_X as f32;

const BRAILLE_BASE: u32 = 0x2800;

/// Bit for each dot, indexed by `[row][col]` inside a cell.
const DOT_BITS: [[u8; 2]; 4] = [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];

/// An immediate-mode 2D surface in virtual pixels.
pub trait Surface {
    /// Drawable width and height.
    fn size(&self) -> (f32, f32);

    fn clear(&mut self);

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: RgbaColor);
}

/// Terminal surface that maps pixels onto braille dots.
///
/// Each cell is [`CELL_WIDTH_PX`] x [`CELL_HEIGHT_PX`] pixels and holds a
/// 2x4 grid of dots, so one dot covers a 4x4 pixel square.
#[derive(Debug, Clone)]
pub struct BrailleSurface {
    cols: u16,
    rows: u16,
    /// Lit dot mask per cell, row-major.
    cells: Vec<u8>,
    /// Color of the last circle that touched each cell.
    colors: Vec<Option<RgbaColor>>,
    background: (u8, u8, u8),
}

impl BrailleSurface {
    pub fn new(cols: u16, rows: u16) -> Self {
        let len = cols as usize * rows as usize;
        Self {
            cols,
            rows,
            cells: vec![0; len],
            colors: vec![None; len],
            background: (0, 0, 0),
        }
    }

    /// Pixel dimensions of a `cols` x `rows` terminal area.
    pub fn pixel_size(cols: u16, rows: u16) -> (f32, f32) {
        (cols as f32 * CELL_WIDTH_PX, rows as f32 * CELL_HEIGHT_PX)
    }

    /// Reallocate for a new terminal size, dropping everything drawn.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        if (cols, rows) != (self.cols, self.rows) {
            *self = Self {
                background: self.background,
                ..Self::new(cols, rows)
            };
        }
    }

    /// Background that translucent colors are composited over.
    pub fn set_background(&mut self, rgb: (u8, u8, u8)) {
        self.background = rgb;
    }

    /// Braille character at a cell, if any dot there is lit.
    pub fn cell_char(&self, col: u16, row: u16) -> Option<char> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        match self.cells[row as usize * self.cols as usize + col as usize] {
            0 => None,
            mask => char::from_u32(BRAILLE_BASE + mask as u32),
        }
    }

    /// Number of cells with at least one lit dot.
    pub fn lit_cells(&self) -> usize {
        self.cells.iter().filter(|&&mask| mask != 0).count()
    }

    fn dot_extent(&self) -> (i32, i32) {
        (
            i32::from(self.cols) * i32::from(DOTS_PER_CELL_X),
            i32::from(self.rows) * i32::from(DOTS_PER_CELL_Y),
        )
    }

    fn light_dot(&mut self, dot_x: i32, dot_y: i32, color: RgbaColor) {
        let (max_x, max_y) = self.dot_extent();
        if dot_x < 0 || dot_y < 0 || dot_x >= max_x || dot_y >= max_y {
            return;
        }
        let col = dot_x as usize / DOTS_PER_CELL_X as usize;
        let row = dot_y as usize / DOTS_PER_CELL_Y as usize;
        let idx = row * self.cols as usize + col;
        let bit = DOT_BITS[dot_y as usize % DOTS_PER_CELL_Y as usize]
            [dot_x as usize % DOTS_PER_CELL_X as usize];
        self.cells[idx] |= bit;
        self.colors[idx] = Some(color);
    }
}

impl Surface for BrailleSurface {
    fn size(&self) -> (f32, f32) {
        Self::pixel_size(self.cols, self.rows)
    }

    fn clear(&mut self) {
        self.cells.fill(0);
        self.colors.fill(None);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: RgbaColor) {
        let center_x = (x / DOT_PX).floor() as i32;
        let center_y = (y / DOT_PX).floor() as i32;
        // The dot under the center is always lit so tiny circles stay visible.
        self.light_dot(center_x, center_y, color);

        // A dot is covered when its center lies within the circle grown by
        // half a dot.
        let reach = radius + DOT_PX / 2.0;
        let span = (reach / DOT_PX).ceil() as i32;
        for dot_y in center_y - span..=center_y + span {
            for dot_x in center_x - span..=center_x + span {
                let px = (dot_x as f32 + 0.5) * DOT_PX - x;
                let py = (dot_y as f32 + 0.5) * DOT_PX - y;
                if px * px + py * py <= reach * reach {
                    self.light_dot(dot_x, dot_y, color);
                }
            }
        }
    }
}

impl Widget for &BrailleSurface {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cols = self.cols.min(area.width);
        let rows = self.rows.min(area.height);
        for row in 0..rows {
            for col in 0..cols {
                let idx = row as usize * self.cols as usize + col as usize;
                let (Some(ch), Some(color)) = (self.cell_char(col, row), self.colors[idx]) else {
                    continue;
                };
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char(ch)
                        .set_style(Style::new().fg(blend_over(color, self.background)));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOLD: RgbaColor = RgbaColor::new(255, 221, 0, 1.0);

    #[test]
    fn test_pixel_size() {
        let surface = BrailleSurface::new(100, 50);
        assert_eq!(surface.size(), (800.0, 800.0));
    }

    #[test]
    fn test_very_wide_surface() {
        let mut surface = BrailleSurface::new(40_000, 2);
        surface.fill_circle(4.0, 4.0, 1.0, GOLD);
        let far_x = 39_999.0 * CELL_WIDTH_PX + 2.0;
        surface.fill_circle(far_x, 4.0, 1.0, GOLD);
        assert_eq!(surface.lit_cells(), 2);
        assert!(surface.cell_char(39_999, 0).is_some());
    }

    #[test]
    fn test_small_circle_lights_one_dot() {
        let mut surface = BrailleSurface::new(4, 2);
        // Center of the top-left dot of cell (1, 0).
        surface.fill_circle(10.0, 2.0, 1.0, GOLD);
        assert_eq!(surface.lit_cells(), 1);
        assert_eq!(surface.cell_char(1, 0), Some('\u{2801}'));
    }

    #[test]
    fn test_larger_circle_spreads() {
        let mut surface = BrailleSurface::new(4, 2);
        surface.fill_circle(10.0, 10.0, 2.9, GOLD);
        let ch = surface.cell_char(1, 0).unwrap();
        assert!((ch as u32 - BRAILLE_BASE).count_ones() > 1);
    }

    #[test]
    fn test_clear_and_out_of_bounds() {
        let mut surface = BrailleSurface::new(2, 2);
        surface.fill_circle(-50.0, -50.0, 2.0, GOLD);
        assert_eq!(surface.lit_cells(), 0);

        surface.fill_circle(4.0, 4.0, 1.0, GOLD);
        assert!(surface.lit_cells() > 0);
        surface.clear();
        assert_eq!(surface.lit_cells(), 0);
    }

    #[test]
    fn test_render_into_buffer() {
        let mut surface = BrailleSurface::new(3, 1);
        surface.set_background((0, 0, 0));
        surface.fill_circle(2.0, 2.0, 1.0, GOLD);

        let area = Rect::new(0, 0, 3, 1);
        let mut buf = Buffer::empty(area);
        (&surface).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "\u{2801}");
        assert_eq!(buf[(0, 0)].fg, ratatui::style::Color::Rgb(255, 221, 0));
        assert_eq!(buf[(1, 0)].symbol(), " ");
    }

    #[test]
    fn test_resize_keeps_background() {
        let mut surface = BrailleSurface::new(2, 2);
        surface.set_background((1, 2, 3));
        surface.resize(5, 4);
        assert_eq!(surface.size(), (40.0, 64.0));
        assert_eq!(surface.background, (1, 2, 3));
    }
}
