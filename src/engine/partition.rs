//! Lomuto partition with paced, tag-instrumented swaps

use std::rc::Rc;

use super::pacer::Pacer;
use super::range::SortRange;
use super::state::{SortState, Tag};

/// Partitions ranges of a shared [`SortState`]
pub struct Partitioner {
    state: Rc<SortState>,
    pacer: Rc<dyn Pacer>,
}

impl Partitioner {
    pub fn new(state: Rc<SortState>, pacer: Rc<dyn Pacer>) -> Self {
        Self { state, pacer }
    }

    pub fn state(&self) -> &Rc<SortState> {
        &self.state
    }

    /// Partition `range` around its last element and return the pivot's final index
    ///
    /// On return every index of `range` except the returned one is tagged
    /// `Default`; the returned index still carries `Pivot` until the caller
    /// resets it. Values left of it are strictly smaller than the pivot value,
    /// values right of it are greater or equal.
    ///
    /// # Panics
    /// If `range` extends past the end of the state.
    pub async fn partition(&self, range: SortRange) -> usize {
        let state = &self.state;
        state.begin_partition(range);

        let (start, end) = (range.start(), range.end());
        let pivot_value = state.read(end);

        state.set_range_tag(range, Tag::ActiveRange);
        let mut cursor = start;
        state.set_tag(cursor, Tag::Pivot);

        for i in start..end {
            if state.read(i) < pivot_value {
                self.paced_swap(i, cursor).await;
                state.set_tag(cursor, Tag::ActiveRange);
                cursor += 1;
                state.set_tag(cursor, Tag::Pivot);
            }
        }

        if cursor != end {
            self.paced_swap(end, cursor).await;
        }

        for i in range.indices().filter(|&i| i != cursor) {
            state.set_tag(i, Tag::Default);
        }

        state.end_partition(range);
        tracing::trace!(%range, pivot = cursor, "partitioned");
        cursor
    }

    async fn paced_swap(&self, i: usize, j: usize) {
        self.pacer.delay().await;
        self.state.record_delay();
        self.state.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::pacer::TimerPacer;
    use std::time::Duration;
    use tokio::task::LocalSet;

    fn partitioner(values: Vec<f64>) -> Partitioner {
        Partitioner::new(
            Rc::new(SortState::new(values)),
            Rc::new(TimerPacer::from_millis(1)),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_pivot_is_smallest() {
        let p = partitioner(vec![5.0, 3.0, 8.0, 1.0]);
        let pivot = p.partition(SortRange::new(0, 3)).await;
        assert_eq!(pivot, 0);
        let values = p.state().values();
        assert_eq!(values[0], 1.0);
        let mut rest = values[1..].to_vec();
        rest.sort_by(f64::total_cmp);
        assert_eq!(rest, vec![3.0, 5.0, 8.0]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_element_range_no_swaps() {
        let p = partitioner(vec![2.0, 7.0, 1.0]);
        let pivot = p.partition(SortRange::new(1, 1)).await;
        assert_eq!(pivot, 1);
        assert_eq!(p.state().stats().swaps, 0);
        assert_eq!(p.state().stats().delays, 0);
        assert_eq!(p.state().values(), vec![2.0, 7.0, 1.0]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pivot_is_largest_stays_in_place() {
        let p = partitioner(vec![1.0, 2.0, 3.0, 9.0]);
        let pivot = p.partition(SortRange::new(0, 3)).await;
        assert_eq!(pivot, 3);
        assert_eq!(p.state().values(), vec![1.0, 2.0, 3.0, 9.0]);
        // Each in-place "swap" of a smaller element with itself is still paced
        assert_eq!(p.state().stats().swaps, 3);
        assert_eq!(p.state().stats().delays, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tags_after_partition() {
        let p = partitioner(vec![4.0, 9.0, 2.0, 6.0, 5.0]);
        let range = SortRange::new(0, 4);
        let pivot = p.partition(range).await;
        let tags = p.state().snapshot().tags;
        for (i, tag) in tags.iter().enumerate() {
            if i == pivot {
                assert_eq!(*tag, Tag::Pivot);
            } else {
                assert_eq!(*tag, Tag::Default);
            }
        }
        assert!(p.state().active_ranges().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_subrange_untouched_outside() {
        let p = partitioner(vec![100.0, 4.0, 1.0, 3.0, -1.0]);
        let pivot = p.partition(SortRange::new(1, 3)).await;
        let values = p.state().values();
        assert_eq!(values[0], 100.0);
        assert_eq!(values[4], -1.0);
        assert_eq!(values[pivot], 3.0);
        assert_eq!(pivot, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_duplicates_go_right() {
        let p = partitioner(vec![2.0, 2.0, 1.0, 2.0]);
        let pivot = p.partition(SortRange::new(0, 3)).await;
        let values = p.state().values();
        assert_eq!(pivot, 1);
        assert!(values[..pivot].iter().all(|v| *v < 2.0));
        assert!(values[pivot + 1..].iter().all(|v| *v >= 2.0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_swap_waits_for_pacer() {
        LocalSet::new()
            .run_until(async {
                let state = Rc::new(SortState::new(vec![5.0, 3.0, 8.0, 1.0]));
                let pacer = Rc::new(TimerPacer::from_millis(25));
                let p = Partitioner::new(Rc::clone(&state), pacer);
                let task =
                    tokio::task::spawn_local(async move { p.partition(SortRange::new(0, 3)).await });

                // 10ms in: the only swap is still waiting on its delay
                tokio::time::sleep(Duration::from_millis(10)).await;
                assert_eq!(state.values(), vec![5.0, 3.0, 8.0, 1.0]);
                assert_eq!(state.stats().swaps, 0);
                assert_eq!(state.stats().delays, 0);
                assert_eq!(state.tag(0), Tag::Pivot);
                assert_eq!(state.active_ranges(), vec![SortRange::new(0, 3)]);

                // 30ms in: the delay has elapsed and the swap is visible
                tokio::time::sleep(Duration::from_millis(20)).await;
                assert_eq!(state.read(0), 1.0);
                assert_eq!(state.read(3), 5.0);
                assert_eq!(state.stats().swaps, 1);
                assert_eq!(state.stats().delays, 1);

                assert_eq!(task.await.unwrap(), 0);
            })
            .await;
    }
}
