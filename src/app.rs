//! Wiring from configuration to a running visualizer

use std::rc::Rc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::task::LocalSet;

use crate::config::{PacingConfig, VisualizerConfig};
use crate::engine::{JitterPacer, Pacer, SortStats, TimerPacer, Visualizer};
use crate::errors::Result;

/// Build the pacer described by `pacing`
pub fn build_pacer(pacing: &PacingConfig) -> Rc<dyn Pacer> {
    let base = Duration::from_millis(pacing.pace_ms);
    if pacing.jitter_ms == 0 {
        return Rc::new(TimerPacer::new(base));
    }
    let jitter = Duration::from_millis(pacing.jitter_ms);
    match pacing.seed {
        Some(seed) => Rc::new(JitterPacer::new(base, jitter, seed)),
        None => Rc::new(JitterPacer::from_entropy(base, jitter)),
    }
}

/// Set up a visualizer from configuration
///
/// Must be called from inside a `LocalSet`.
pub fn start(config: &VisualizerConfig) -> Result<Visualizer> {
    let pacer = build_pacer(&config.pacing);
    match config.pacing.seed {
        Some(seed) => {
            Visualizer::setup_with_rng(config.layout, pacer, &mut StdRng::seed_from_u64(seed))
        }
        None => Visualizer::setup(config.layout, pacer),
    }
}

/// Outcome of a headless run
#[derive(Debug, Clone, PartialEq)]
pub struct SortReport {
    pub bars: usize,
    pub stats: SortStats,
    pub sorted: bool,
    pub elapsed: Duration,
}

/// Sort without a terminal, logging progress every tick
pub async fn run_headless(config: &VisualizerConfig) -> Result<SortReport> {
    LocalSet::new().run_until(drive_headless(config)).await
}

async fn drive_headless(config: &VisualizerConfig) -> Result<SortReport> {
    let started = tokio::time::Instant::now();
    let mut visualizer = start(config)?;
    let mut ticker = tokio::time::interval(Duration::from_millis(config.pacing.tick_ms.max(1)));

    while !visualizer.is_finished() {
        ticker.tick().await;
        let stats = visualizer.stats();
        tracing::trace!(
            swaps = stats.swaps,
            in_flight = visualizer.state().active_ranges().len(),
            "progress"
        );
    }
    visualizer.wait().await;

    Ok(SortReport {
        bars: visualizer.state().len(),
        stats: visualizer.stats(),
        sorted: visualizer.state().is_sorted(),
        elapsed: started.elapsed(),
    })
}
