//! Virtual canvas with float coordinates

use super::color::Color;
use super::shapes::Shape;

/// Virtual framebuffer canvas
///
/// Shapes use continuous (f64) coordinates; pixels are row-major RGB.
#[derive(Debug, Clone)]
pub struct Canvas {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    pixels: Vec<Color>,
    bg_color: Color,
}

impl Canvas {
    /// Create canvas filled with a background color
    pub fn with_background(width: u32, height: u32, bg: Color) -> Self {
        let size = (width * height) as usize;
        Self {
            width,
            height,
            pixels: vec![bg; size],
            bg_color: bg,
        }
    }

    /// Clear canvas to background color
    pub fn clear(&mut self) {
        self.pixels.fill(self.bg_color);
    }

    pub fn background(&self) -> Color {
        self.bg_color
    }

    /// Get pixel at coordinates
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Draw a shape onto the canvas
    pub fn draw<S: Shape>(&mut self, shape: &S) {
        shape.rasterize(self.width, self.height, &mut self.pixels);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::shapes::{FilledRect, Rect};

    #[test]
    fn test_new_canvas() {
        let canvas = Canvas::with_background(100, 50, Color::BLACK);
        assert_eq!(canvas.width, 100);
        assert_eq!(canvas.height, 50);
        assert_eq!(canvas.get_pixel(99, 49), Some(Color::BLACK));
        assert_eq!(canvas.get_pixel(100, 0), None);
    }

    #[test]
    fn test_draw_and_clear() {
        let mut canvas = Canvas::with_background(10, 10, Color::BLACK);
        canvas.draw(&FilledRect::new(Rect::new(2.0, 2.0, 3.0, 3.0), Color::WHITE));
        assert_eq!(canvas.get_pixel(3, 3), Some(Color::WHITE));
        assert_eq!(canvas.get_pixel(6, 6), Some(Color::BLACK));
        canvas.clear();
        assert_eq!(canvas.get_pixel(3, 3), Some(Color::BLACK));
    }

    #[test]
    fn test_get_pixel_out_of_bounds() {
        let canvas = Canvas::with_background(4, 4, Color::BLACK);
        assert_eq!(canvas.get_pixel(4, 0), None);
    }
}
