//! Shared sort state: magnitudes, display tags and instrumentation
//!
//! Every slot lives in a [`Cell`] so that any number of cooperative tasks
//! can hold the same `Rc<SortState>` and mutate it without a lock. This is
//! sound only because the driver hands each task a range disjoint from every
//! other outstanding task's range, and because all tasks run on one thread.

use std::cell::{Cell, RefCell};

use super::range::SortRange;

/// Magnitude type of a single bar
pub type Magnitude = f64;

/// Display role of an index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tag {
    /// Not part of any in-flight partition
    #[default]
    Default,
    /// Inside the range of an in-flight partition
    ActiveRange,
    /// Current low-partition cursor of an in-flight partition
    Pivot,
}

/// Copy of the state taken at one instant, for renderers
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub values: Vec<Magnitude>,
    pub tags: Vec<Tag>,
}

impl Snapshot {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Counters collected while sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortStats {
    /// Committed swaps
    pub swaps: u64,
    /// Completed pacer delays
    pub delays: u64,
    /// Partition calls started
    pub partitions: u64,
    /// Sub-sort tasks spawned by the driver
    pub tasks_spawned: u64,
}

/// Magnitudes plus parallel tags
#[derive(Debug)]
pub struct SortState {
    values: Box<[Cell<Magnitude>]>,
    tags: Box<[Cell<Tag>]>,
    stats: Cell<SortStats>,
    active: RefCell<Vec<SortRange>>,
}

impl SortState {
    /// Create state from initial magnitudes, every tag `Default`
    pub fn new(values: Vec<Magnitude>) -> Self {
        let tags = vec![Tag::Default; values.len()];
        Self {
            values: values.into_iter().map(Cell::new).collect(),
            tags: tags.into_iter().map(Cell::new).collect(),
            stats: Cell::new(SortStats::default()),
            active: RefCell::new(Vec::new()),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read the magnitude at `i`
    ///
    /// # Panics
    /// If `i` is out of range.
    #[inline]
    pub fn read(&self, i: usize) -> Magnitude {
        self.values[i].get()
    }

    /// Exchange magnitudes at `i` and `j` in one step
    ///
    /// # Panics
    /// If either index is out of range.
    pub fn swap(&self, i: usize, j: usize) {
        self.values[i].swap(&self.values[j]);
        self.bump(|s| s.swaps += 1);
    }

    /// Tag currently carried by `i`
    #[inline]
    pub fn tag(&self, i: usize) -> Tag {
        self.tags[i].get()
    }

    /// Set the display tag of `i`
    ///
    /// # Panics
    /// If `i` is out of range.
    #[inline]
    pub fn set_tag(&self, i: usize, tag: Tag) {
        self.tags[i].set(tag);
    }

    /// Tag every index in `range` with `tag`
    pub fn set_range_tag(&self, range: SortRange, tag: Tag) {
        for i in range.indices() {
            self.set_tag(i, tag);
        }
    }

    /// Copy out values and tags
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            values: self.values.iter().map(Cell::get).collect(),
            tags: self.tags.iter().map(Cell::get).collect(),
        }
    }

    /// Current magnitudes only
    pub fn values(&self) -> Vec<Magnitude> {
        self.values.iter().map(Cell::get).collect()
    }

    /// Whether magnitudes are non-decreasing
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0].get() <= w[1].get())
    }

    pub fn stats(&self) -> SortStats {
        self.stats.get()
    }

    /// Ranges of partition calls that have not returned yet
    pub fn active_ranges(&self) -> Vec<SortRange> {
        self.active.borrow().clone()
    }

    pub(crate) fn record_delay(&self) {
        self.bump(|s| s.delays += 1);
    }

    pub(crate) fn record_spawn(&self, tasks: u64) {
        self.bump(|s| s.tasks_spawned += tasks);
    }

    pub(crate) fn begin_partition(&self, range: SortRange) {
        assert!(
            range.end() < self.len(),
            "partition range {range} out of bounds for {} bars",
            self.len()
        );
        self.active.borrow_mut().push(range);
        self.bump(|s| s.partitions += 1);
    }

    pub(crate) fn end_partition(&self, range: SortRange) {
        let mut active = self.active.borrow_mut();
        if let Some(pos) = active.iter().position(|r| *r == range) {
            active.swap_remove(pos);
        }
    }

    fn bump(&self, f: impl FnOnce(&mut SortStats)) {
        let mut stats = self.stats.get();
        f(&mut stats);
        self.stats.set(stats);
    }
}
