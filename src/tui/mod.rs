//! Terminal front-end: samples the engine and paints bars

mod app;
mod terminal;
mod ui;

pub use app::run;
pub use terminal::{init, restore, Tui};
pub use ui::{status_line, BarsWidget};
