//! Recursive fan-out/join driver
//!
//! Each call partitions its range, then spawns one task per side of the
//! pivot and waits for both. The two child ranges never overlap each other
//! nor the pivot, so the children may interleave freely on the shared state.

use std::panic;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use tokio::task::JoinError;

use super::partition::Partitioner;
use super::range::SortRange;
use super::state::{SortState, Tag};

pub struct RecursionDriver {
    partitioner: Partitioner,
}

impl RecursionDriver {
    pub fn new(partitioner: Partitioner) -> Rc<Self> {
        Rc::new(Self { partitioner })
    }

    pub fn state(&self) -> &Rc<SortState> {
        self.partitioner.state()
    }

    /// Sort the inclusive range `[start, end]`
    ///
    /// `start >= end` returns at once without touching the state. The
    /// returned future must be polled inside a `tokio::task::LocalSet`,
    /// since sub-sorts are spawned with `spawn_local`.
    pub fn sort(self: &Rc<Self>, start: usize, end: usize) -> LocalBoxFuture<'static, ()> {
        let driver = Rc::clone(self);
        async move {
            if start >= end {
                return;
            }
            let range = SortRange::new(start, end);
            tracing::debug!(%range, "sorting");

            let pivot = driver.partitioner.partition(range).await;
            driver.state().set_tag(pivot, Tag::Default);

            // pivot == start leaves an empty left side; saturating keeps it a no-op
            let left = tokio::task::spawn_local(driver.sort(start, pivot.saturating_sub(1)));
            let right = tokio::task::spawn_local(driver.sort(pivot + 1, end));
            driver.state().record_spawn(2);

            let (left, right) = tokio::join!(left, right);
            propagate(left, range);
            propagate(right, range);
        }
        .boxed_local()
    }
}

fn propagate(joined: Result<(), JoinError>, range: SortRange) {
    if let Err(err) = joined {
        if err.is_panic() {
            panic::resume_unwind(err.into_panic());
        }
        tracing::warn!(%range, "sub-sort cancelled: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::pacer::TimerPacer;
    use tokio::task::LocalSet;

    fn driver(values: Vec<f64>) -> Rc<RecursionDriver> {
        let state = Rc::new(SortState::new(values));
        RecursionDriver::new(Partitioner::new(state, Rc::new(TimerPacer::from_millis(25))))
    }

    #[tokio::test(start_paused = true)]
    async fn test_sorts_small_array() {
        let d = driver(vec![9.0, 4.0, 7.0, 1.0, 3.0, 8.0]);
        LocalSet::new().run_until(d.sort(0, 5)).await;
        assert_eq!(d.state().values(), vec![1.0, 3.0, 4.0, 7.0, 8.0, 9.0]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_base_cases_do_nothing() {
        let d = driver(vec![3.0, 2.0, 1.0]);
        let local = LocalSet::new();
        local.run_until(d.sort(1, 1)).await;
        local.run_until(d.sort(2, 1)).await;
        let stats = d.state().stats();
        assert_eq!(stats.swaps, 0);
        assert_eq!(stats.delays, 0);
        assert_eq!(stats.partitions, 0);
        assert_eq!(stats.tasks_spawned, 0);
        assert_eq!(d.state().values(), vec![3.0, 2.0, 1.0]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_all_tags_default_when_done() {
        let d = driver(vec![5.0, 1.0, 4.0, 2.0, 3.0, 0.5, 6.0]);
        LocalSet::new().run_until(d.sort(0, 6)).await;
        assert!(d.state().snapshot().tags.iter().all(|t| *t == Tag::Default));
        assert!(d.state().active_ranges().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_delay_per_swap() {
        let d = driver(vec![2.0, 8.0, 6.0, 3.0, 9.0, 1.0, 7.0, 5.0, 4.0]);
        LocalSet::new().run_until(d.sort(0, 8)).await;
        let stats = d.state().stats();
        assert!(stats.swaps > 0);
        assert_eq!(stats.swaps, stats.delays);
        assert_eq!(stats.tasks_spawned, 2 * stats.partitions);
    }
}
