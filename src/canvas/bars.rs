//! Paints a sort snapshot as bottom-anchored bars

use super::canvas::Canvas;
use super::color::Palette;
use super::shapes::{FilledRect, Rect};
use crate::config::Layout;
use crate::engine::Snapshot;

/// Maps snapshots onto a canvas
///
/// Bar `i` sits at `x = i * bar_width` with height `values[i]`, both in
/// container pixels, scaled to the canvas size.
#[derive(Debug, Clone)]
pub struct BarPainter {
    layout: Layout,
    palette: Palette,
}

impl BarPainter {
    pub fn new(layout: Layout, palette: Palette) -> Self {
        Self { layout, palette }
    }

    /// Blank canvas sized `cols x rows` pixels in this painter's background
    pub fn blank(&self, cols: u32, rows: u32) -> Canvas {
        Canvas::with_background(cols, rows, self.palette.background)
    }

    /// Container-space rectangle of bar `i`
    pub fn bar_rect(&self, i: usize, value: f64) -> Rect {
        let bw = self.layout.bar_width;
        let h = self.layout.container_height;
        Rect::new(i as f64 * bw, h - value, bw, value)
    }

    /// Clear `canvas` and draw every bar of `snapshot`
    pub fn paint(&self, snapshot: &Snapshot, canvas: &mut Canvas) {
        canvas.clear();
        let sx = f64::from(canvas.width) / self.layout.container_width;
        let sy = f64::from(canvas.height) / self.layout.container_height;

        for (i, (value, tag)) in snapshot.values.iter().zip(&snapshot.tags).enumerate() {
            let r = self.bar_rect(i, *value);
            let scaled = Rect::new(r.x * sx, r.y * sy, r.width * sx, r.height * sy);
            canvas.draw(&FilledRect::new(scaled, self.palette.fill_for(*tag)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Color;
    use crate::engine::Tag;

    fn painter() -> BarPainter {
        let layout = Layout {
            container_width: 40.0,
            container_height: 10.0,
            bar_width: 10.0,
        };
        BarPainter::new(layout, Palette::default())
    }

    #[test]
    fn test_bar_rect_bottom_anchored() {
        let r = painter().bar_rect(2, 4.0);
        assert_eq!(r, Rect::new(20.0, 6.0, 10.0, 4.0));
        assert_eq!(r.bottom(), 10.0);
    }

    #[test]
    fn test_paint_colors_by_tag() {
        let painter = painter();
        let palette = Palette::default();
        let snapshot = Snapshot {
            values: vec![10.0, 10.0, 10.0, 0.0],
            tags: vec![Tag::Default, Tag::ActiveRange, Tag::Pivot, Tag::Default],
        };
        let mut canvas = painter.blank(40, 10);
        painter.paint(&snapshot, &mut canvas);

        assert_eq!(canvas.get_pixel(5, 5), Some(palette.default_bar));
        assert_eq!(canvas.get_pixel(15, 5), Some(palette.active_bar));
        assert_eq!(canvas.get_pixel(25, 5), Some(palette.pivot_bar));
        // Zero-height bar leaves the background visible
        assert_eq!(canvas.get_pixel(35, 9), Some(palette.background));
    }

    #[test]
    fn test_paint_scales_to_canvas() {
        let painter = painter();
        let snapshot = Snapshot {
            values: vec![5.0, 0.0, 0.0, 0.0],
            tags: vec![Tag::Default; 4],
        };
        let mut canvas = painter.blank(4, 2);
        painter.paint(&snapshot, &mut canvas);
        assert_eq!(canvas.get_pixel(0, 1), Some(Color::WHITE));
        assert_eq!(canvas.get_pixel(0, 0), Some(Palette::default().background));
    }
}
