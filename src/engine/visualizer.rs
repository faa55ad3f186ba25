//! Setup and sampling facade over the sort engine

use std::rc::Rc;

use rand::Rng;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use super::driver::RecursionDriver;
use super::pacer::Pacer;
use super::partition::Partitioner;
use super::state::{Magnitude, Snapshot, SortState, SortStats};
use crate::config::Layout;
use crate::errors::Result;

/// A running (or finished) instrumented sort
///
/// Created by [`Visualizer::setup`], which fires the top-level sort and
/// returns immediately. Renderers call [`Visualizer::snapshot`] at their
/// own cadence.
pub struct Visualizer {
    layout: Layout,
    state: Rc<SortState>,
    handle: JoinHandle<()>,
    started: Instant,
    finished: bool,
}

impl Visualizer {
    /// Fill `floor(width / bar_width)` bars with random heights and start sorting
    ///
    /// Must be called from inside a `tokio::task::LocalSet`.
    pub fn setup(layout: Layout, pacer: Rc<dyn Pacer>) -> Result<Self> {
        Self::setup_with_rng(layout, pacer, &mut rand::rng())
    }

    /// Like [`Visualizer::setup`] with a caller-provided random source
    pub fn setup_with_rng<R: Rng>(
        layout: Layout,
        pacer: Rc<dyn Pacer>,
        rng: &mut R,
    ) -> Result<Self> {
        layout.validate()?;
        let count = layout.bar_count();
        let height = layout.container_height;
        let values = (0..count).map(|_| rng.random_range(0.0..height)).collect();

        tracing::info!(
            bars = count,
            width = layout.container_width,
            height,
            bar_width = layout.bar_width,
            pacer = %pacer.describe(),
            "setup"
        );
        Ok(Self::from_values(layout, values, pacer))
    }

    /// Start sorting an explicit set of magnitudes
    ///
    /// `layout` is only used by renderers; the bar count is `values.len()`.
    /// Must be called from inside a `tokio::task::LocalSet`.
    pub fn from_values(layout: Layout, values: Vec<Magnitude>, pacer: Rc<dyn Pacer>) -> Self {
        let state = Rc::new(SortState::new(values));
        let driver = RecursionDriver::new(Partitioner::new(Rc::clone(&state), pacer));
        let last = state.len().saturating_sub(1);
        let handle = tokio::task::spawn_local(driver.sort(0, last));

        Self {
            layout,
            state,
            handle,
            started: Instant::now(),
            finished: false,
        }
    }

    /// Current values and tags
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn state(&self) -> &Rc<SortState> {
        &self.state
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn stats(&self) -> SortStats {
        self.state.stats()
    }

    /// Whether the whole sort tree has completed
    pub fn is_finished(&self) -> bool {
        self.finished || self.handle.is_finished()
    }

    /// Wait for the whole sort tree to complete
    ///
    /// # Panics
    /// Re-raises a panic from any sort task.
    pub async fn wait(&mut self) {
        if self.finished {
            return;
        }
        if let Err(err) = (&mut self.handle).await {
            if err.is_panic() {
                std::panic::resume_unwind(err.into_panic());
            }
            tracing::warn!("sort cancelled: {}", err);
        }
        self.finished = true;

        let stats = self.state.stats();
        tracing::info!(
            elapsed_ms = self.started.elapsed().as_millis() as u64,
            swaps = stats.swaps,
            partitions = stats.partitions,
            tasks = stats.tasks_spawned,
            sorted = self.state.is_sorted(),
            "sort finished"
        );
    }
}
