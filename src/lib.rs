#![allow(clippy::module_inception)]

//! # Sortscope
//!
//! An instrumented concurrent quicksort. Each recursive call partitions its
//! range with paced swaps, then fans out into two cooperative tasks over the
//! disjoint sub-ranges and joins both. Per-index tags record which ranges and
//! cursors are live so a renderer can sample and paint the sort as it runs.

pub mod app;
pub mod canvas;
pub mod config;
pub mod engine;
pub mod errors;
pub mod tui;

pub use config::{load_config, Layout, VisualizerConfig};
pub use engine::{Pacer, Snapshot, SortState, SortStats, Tag, Visualizer};
pub use errors::{Result, SortscopeError};
