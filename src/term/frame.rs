//! Character frame for terminal rendering
//!
//! A frame is a plain grid of styled glyphs with no I/O attached, so view
//! output can be asserted in unit tests.

use crossterm::style::Color;

/// A single styled character cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub color: Color,
    pub dim: bool,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            color: Color::Reset,
            dim: false,
        }
    }
}

/// 2D grid of glyphs, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<Glyph>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Glyph::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Out-of-bounds writes are silently dropped
    pub fn put(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = glyph;
        }
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, color: Color) {
        self.put(
            x,
            y,
            Glyph {
                ch,
                color,
                dim: false,
            },
        );
    }

    pub fn put_str(&mut self, x: u16, y: u16, text: &str, color: Color) {
        let mut cx = x;
        for ch in text.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, color);
            cx += 1;
        }
    }

    /// Text content of one row, for tests
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .map(|x| self.get(x, y).map_or(' ', |g| g.ch))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_and_get() {
        let mut frame = Frame::new(4, 2);
        frame.put_char(0, 0, 'A', Color::Cyan);
        frame.put_char(3, 1, 'B', Color::Red);

        assert_eq!(frame.get(0, 0).map(|g| g.ch), Some('A'));
        assert_eq!(frame.get(0, 0).map(|g| g.color), Some(Color::Cyan));
        assert_eq!(frame.get(3, 1).map(|g| g.ch), Some('B'));
        assert_eq!(frame.get(4, 0), None);
    }

    #[test]
    fn test_out_of_bounds_write_is_ignored() {
        let mut frame = Frame::new(2, 2);
        frame.put_char(5, 5, 'X', Color::Reset);
        assert!(frame.row_text(0).chars().all(|c| c == ' '));
    }

    #[test]
    fn test_put_str_clips_at_edge() {
        let mut frame = Frame::new(5, 1);
        frame.put_str(2, 0, "HELLO", Color::Reset);
        assert_eq!(frame.row_text(0), "  HEL");
    }
}
