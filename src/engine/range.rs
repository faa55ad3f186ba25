use std::fmt;

/// Inclusive index span `[start, end]` handed from the driver to the partitioner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortRange {
    start: usize,
    end: usize,
}

impl SortRange {
    /// # Panics
    /// If `start > end`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "invalid sort range [{start}, {end}]");
        Self { start, end }
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn contains(&self, i: usize) -> bool {
        self.start <= i && i <= self.end
    }

    /// Whether two ranges share an index
    pub fn overlaps(&self, other: &SortRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    pub fn indices(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }
}

impl fmt::Display for SortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
