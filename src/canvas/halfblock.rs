//! `HalfBlock` rasterizer - ▀▄█ characters, two vertical pixels per cell
//!
//! - ▀ (upper half block): top = fg, bottom = bg
//! - ▄ (lower half block): top = bg, bottom = fg
//! - █ (full block): both = fg
//! - ' ' (space): both = bg

use ratatui::style::Color as TermColor;

use super::canvas::Canvas;
use super::color::Color;

/// A single terminal cell with foreground and background colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyledCell {
    pub ch: char,
    pub fg: TermColor,
    pub bg: TermColor,
}

impl Default for StyledCell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: TermColor::White,
            bg: TermColor::Black,
        }
    }
}

/// A line of styled cells
#[derive(Debug, Clone, Default)]
pub struct StyledLine {
    pub cells: Vec<StyledCell>,
}

#[derive(Debug, Default)]
pub struct HalfBlockRasterizer;

impl HalfBlockRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Canvas pixel size that maps 1:1 onto a `cols x rows` cell area
    pub fn canvas_size(cols: u16, rows: u16) -> (u32, u32) {
        (u32::from(cols), u32::from(rows) * 2)
    }

    /// Sample `canvas` into `rows` lines of `cols` cells
    pub fn rasterize(&self, canvas: &Canvas, cols: u16, rows: u16) -> Vec<StyledLine> {
        if canvas.width == 0 || canvas.height == 0 {
            return vec![StyledLine::default(); rows as usize];
        }

        let scale_x = f64::from(canvas.width) / f64::from(cols);
        let scale_y = f64::from(canvas.height) / (f64::from(rows) * 2.0);
        let max_x = canvas.width - 1;
        let max_y = canvas.height - 1;
        let bg = canvas.background();

        (0..rows)
            .map(|row| {
                let cells = (0..cols)
                    .map(|col| {
                        let x = ((f64::from(col) * scale_x) as u32).min(max_x);
                        let top_y = ((f64::from(row) * 2.0 * scale_y) as u32).min(max_y);
                        let bot_y = (((f64::from(row) * 2.0 + 1.0) * scale_y) as u32).min(max_y);

                        let top = canvas.get_pixel(x, top_y).unwrap_or(bg);
                        let bot = canvas.get_pixel(x, bot_y).unwrap_or(bg);
                        let (ch, fg, bg) = self.select_halfblock(&top, &bot);
                        StyledCell { ch, fg, bg }
                    })
                    .collect();
                StyledLine { cells }
            })
            .collect()
    }

    /// Pick a glyph and colors for a top/bottom pixel pair
    fn select_halfblock(&self, top: &Color, bot: &Color) -> (char, TermColor, TermColor) {
        if top.distance(bot) < 0.01 {
            return ('█', top.to_ratatui(), top.to_ratatui());
        }

        if top.luminance() >= bot.luminance() {
            ('▀', top.to_ratatui(), bot.to_ratatui())
        } else {
            ('▄', bot.to_ratatui(), top.to_ratatui())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halfblock_same_colors() {
        let rasterizer = HalfBlockRasterizer::new();
        let (ch, _, _) = rasterizer.select_halfblock(&Color::WHITE, &Color::WHITE);
        assert_eq!(ch, '█');
    }

    #[test]
    fn test_halfblock_bar_top_edge() {
        // Dark above, bar below: lower half block in the bar color
        let rasterizer = HalfBlockRasterizer::new();
        let (ch, fg, _) = rasterizer.select_halfblock(&Color::BLACK, &Color::WHITE);
        assert_eq!(ch, '▄');
        assert_eq!(fg, Color::WHITE.to_ratatui());
    }

    #[test]
    fn test_rasterize_dimensions() {
        let canvas = Canvas::with_background(20, 10, Color::BLACK);
        let lines = HalfBlockRasterizer::new().rasterize(&canvas, 20, 5);
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.cells.len() == 20));
    }

    #[test]
    fn test_canvas_size() {
        assert_eq!(HalfBlockRasterizer::canvas_size(80, 24), (80, 48));
    }
}
