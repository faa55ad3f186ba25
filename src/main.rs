use std::path::PathBuf;

use clap::Parser;
use sortscope::config::VisualizerConfig;
use sortscope::{app, load_config, tui};

/// Watch a paced, concurrent quicksort run in your terminal
#[derive(Debug, Parser)]
#[command(name = "sortscope", version, about)]
struct Cli {
    /// Config file (TOML, or JSON by extension)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Container width in pixels
    #[arg(long)]
    width: Option<f64>,

    /// Container height in pixels (bar heights are drawn below this)
    #[arg(long)]
    height: Option<f64>,

    /// Width of a single bar in pixels
    #[arg(long)]
    bar_width: Option<f64>,

    /// Delay before each swap, in milliseconds
    #[arg(long)]
    pace_ms: Option<u64>,

    /// Extra random delay per swap, in milliseconds
    #[arg(long)]
    jitter_ms: Option<u64>,

    /// Seed for bar heights and jitter
    #[arg(long)]
    seed: Option<u64>,

    /// Render interval, in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Sort without the terminal UI and log a summary
    #[arg(long)]
    headless: bool,

    /// Info-level logging
    #[arg(short, long)]
    verbose: bool,

    /// Debug-level logging
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn apply(&self, config: &mut VisualizerConfig) {
        if let Some(v) = self.width {
            config.layout.container_width = v;
        }
        if let Some(v) = self.height {
            config.layout.container_height = v;
        }
        if let Some(v) = self.bar_width {
            config.layout.bar_width = v;
        }
        if let Some(v) = self.pace_ms {
            config.pacing.pace_ms = v;
        }
        if let Some(v) = self.jitter_ms {
            config.pacing.jitter_ms = v;
        }
        if self.seed.is_some() {
            config.pacing.seed = self.seed;
        }
        if let Some(v) = self.tick_ms {
            config.pacing.tick_ms = v;
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set log level based on flags
    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting sortscope version {}", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(cli.config.as_deref())?;
    cli.apply(&mut config);
    config.layout.validate()?;
    tracing::debug!(?config, "effective configuration");

    if cli.headless {
        let report = app::run_headless(&config).await?;
        tracing::info!(
            bars = report.bars,
            swaps = report.stats.swaps,
            partitions = report.stats.partitions,
            tasks = report.stats.tasks_spawned,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "headless run complete"
        );
        if !report.sorted {
            anyhow::bail!("sort finished but the bars are not in order");
        }
        return Ok(());
    }

    if let Err(e) = tui::run(&config).await {
        tracing::error!("Visualizer error: {}", e);
        return Err(e.into());
    }
    Ok(())
}
