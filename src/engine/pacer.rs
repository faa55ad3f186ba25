//! Pacing: the single suspension point of every sort task
//!
//! A pacer is awaited exactly once before each swap. It parks the calling
//! task on a timer so other ready tasks (sibling sub-sorts, the renderer)
//! get to run, which is what makes progress visible to a sampler.

use std::cell::RefCell;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default delay before each swap, in milliseconds
pub const DEFAULT_PACE_MS: u64 = 25;

/// Suspension primitive awaited before each swap
///
/// Implementations must always complete and must suspend on a timer or
/// other scheduler-visible future, never spin.
#[async_trait(?Send)]
pub trait Pacer {
    async fn delay(&self);

    /// Human readable description for logs
    fn describe(&self) -> String;
}

/// Fixed-interval pacer
#[derive(Debug, Clone)]
pub struct TimerPacer {
    interval: Duration,
}

impl TimerPacer {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for TimerPacer {
    fn default() -> Self {
        Self::from_millis(DEFAULT_PACE_MS)
    }
}

#[async_trait(?Send)]
impl Pacer for TimerPacer {
    async fn delay(&self) {
        tokio::time::sleep(self.interval).await;
    }

    fn describe(&self) -> String {
        format!("timer({}ms)", self.interval.as_millis())
    }
}

/// Fixed interval plus a pseudo-random extra delay per call
///
/// Randomizes which sibling task wakes first, so interleavings of
/// concurrent sub-sorts vary from run to run (or from seed to seed).
#[derive(Debug)]
pub struct JitterPacer {
    base: Duration,
    max_jitter: Duration,
    rng: RefCell<StdRng>,
}

impl JitterPacer {
    pub fn new(base: Duration, max_jitter: Duration, seed: u64) -> Self {
        Self {
            base,
            max_jitter,
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy(base: Duration, max_jitter: Duration) -> Self {
        Self {
            base,
            max_jitter,
            rng: RefCell::new(StdRng::from_os_rng()),
        }
    }

    fn next_interval(&self) -> Duration {
        let max = self.max_jitter.as_micros() as u64;
        if max == 0 {
            return self.base;
        }
        let extra = self.rng.borrow_mut().random_range(0..=max);
        self.base + Duration::from_micros(extra)
    }
}

#[async_trait(?Send)]
impl Pacer for JitterPacer {
    async fn delay(&self) {
        let interval = self.next_interval();
        tokio::time::sleep(interval).await;
    }

    fn describe(&self) -> String {
        format!(
            "jitter({}ms + up to {}ms)",
            self.base.as_millis(),
            self.max_jitter.as_millis()
        )
    }
}
