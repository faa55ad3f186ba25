//! # Bar canvas
//!
//! ```text
//!   Snapshot ──► BarPainter ──► Canvas (float coords, RGB)
//!                                  │
//!                                  ▼
//!                         HalfBlockRasterizer ▀▄█ ──► terminal cells
//! ```

mod bars;
mod canvas;
mod color;
mod halfblock;
mod shapes;

pub use bars::BarPainter;
pub use canvas::Canvas;
pub use color::{Color, Palette};
pub use halfblock::{HalfBlockRasterizer, StyledCell, StyledLine};
pub use shapes::{FilledRect, Rect, Shape};
