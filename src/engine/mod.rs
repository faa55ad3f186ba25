//! # Instrumented concurrent quicksort
//!
//! ```text
//!   Visualizer::setup ──► RecursionDriver::sort(0, N-1)
//!                               │
//!                               ▼
//!                         Partitioner ──► Pacer::delay ──► SortState::swap
//!                               │
//!              spawn_local ┌────┴────┐ spawn_local
//!                          ▼         ▼
//!                   sort(lo, p-1)  sort(p+1, hi)   (joined before returning)
//!
//!   Renderer ──► Visualizer::snapshot   (independent cadence)
//! ```
//!
//! All tasks run cooperatively on one thread inside a `LocalSet` and only
//! yield at `Pacer::delay`.

mod driver;
mod pacer;
mod partition;
mod range;
mod state;
mod visualizer;

pub use driver::RecursionDriver;
pub use pacer::{JitterPacer, Pacer, TimerPacer, DEFAULT_PACE_MS};
pub use partition::Partitioner;
pub use range::SortRange;
pub use state::{Magnitude, Snapshot, SortState, SortStats, Tag};
pub use visualizer::Visualizer;
