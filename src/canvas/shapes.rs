//! Geometric shapes for canvas drawing

use super::Color;

/// Axis-aligned rectangle, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.x
    }
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
    #[inline]
    pub fn top(&self) -> f64 {
        self.y
    }
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Pixel span `[lo, hi)` covered along one axis, clipped to `[0, limit)`
    ///
    /// A pixel is covered when its center lies inside the rectangle.
    fn pixel_span(lo: f64, hi: f64, limit: u32) -> (u32, u32) {
        let limit = f64::from(limit);
        let first = (lo - 0.5).ceil().clamp(0.0, limit);
        let last = (hi - 0.5).ceil().clamp(first, limit);
        (first as u32, last as u32)
    }

    pub(crate) fn pixel_columns(&self, limit: u32) -> (u32, u32) {
        Self::pixel_span(self.left(), self.right(), limit)
    }

    pub(crate) fn pixel_rows(&self, limit: u32) -> (u32, u32) {
        Self::pixel_span(self.top(), self.bottom(), limit)
    }
}

/// Shape trait for drawable primitives
pub trait Shape {
    /// Draw the shape onto a row-major pixel buffer
    fn rasterize(&self, width: u32, height: u32, pixels: &mut [Color]);
}

/// Solid rectangle
#[derive(Debug, Clone, Copy)]
pub struct FilledRect {
    pub rect: Rect,
    pub color: Color,
}

impl FilledRect {
    pub fn new(rect: Rect, color: Color) -> Self {
        Self { rect, color }
    }
}

impl Shape for FilledRect {
    fn rasterize(&self, width: u32, height: u32, pixels: &mut [Color]) {
        let (x0, x1) = self.rect.pixel_columns(width);
        let (y0, y1) = self.rect.pixel_rows(height);
        for y in y0..y1 {
            let row = (y * width) as usize;
            pixels[row + x0 as usize..row + x1 as usize].fill(self.color);
        }
    }
}
