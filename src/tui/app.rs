//! Live terminal view of a running sort
//!
//! The render loop and every sort task share one `LocalSet`. Each tick the
//! loop pulls a snapshot, paints it and hands control back to the scheduler,
//! so sampling cadence is independent of the pacer.

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::layout::{Constraint, Layout as Split};
use ratatui::widgets::Paragraph;
use tokio::task::LocalSet;

use super::terminal::{self, terminal_error, Tui};
use super::ui::{status_line, BarsWidget};
use crate::app::start;
use crate::canvas::{BarPainter, HalfBlockRasterizer, Palette};
use crate::config::VisualizerConfig;
use crate::engine::Visualizer;
use crate::errors::Result;

struct App {
    visualizer: Visualizer,
    painter: BarPainter,
    rasterizer: HalfBlockRasterizer,
    reported: bool,
}

impl App {
    fn new(visualizer: Visualizer, config: &VisualizerConfig) -> Self {
        let painter = BarPainter::new(*visualizer.layout(), Palette::from(&config.palette));
        Self {
            visualizer,
            painter,
            rasterizer: HalfBlockRasterizer::new(),
            reported: false,
        }
    }

    fn draw(&self, tui: &mut Tui) -> Result<()> {
        let snapshot = self.visualizer.snapshot();
        let stats = self.visualizer.stats();
        let finished = self.visualizer.is_finished();

        tui.draw(|frame| {
            let [bars_area, status_area] =
                Split::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

            let (width, height) = HalfBlockRasterizer::canvas_size(bars_area.width, bars_area.height);
            let mut canvas = self.painter.blank(width, height);
            self.painter.paint(&snapshot, &mut canvas);
            let lines = self
                .rasterizer
                .rasterize(&canvas, bars_area.width, bars_area.height);

            frame.render_widget(BarsWidget::new(&lines), bars_area);
            frame.render_widget(
                Paragraph::new(status_line(snapshot.len(), &stats, finished)),
                status_area,
            );
        })
        .map_err(terminal_error)?;
        Ok(())
    }

    /// Log completion once, when the sort tree has fully joined
    async fn note_completion(&mut self) {
        if !self.reported && self.visualizer.is_finished() {
            self.visualizer.wait().await;
            self.reported = true;
        }
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && (matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)))
}

/// Run the interactive visualizer until the user quits
pub async fn run(config: &VisualizerConfig) -> Result<()> {
    let mut tui = terminal::init()?;
    let result = LocalSet::new().run_until(event_loop(&mut tui, config)).await;
    terminal::restore()?;
    result
}

async fn event_loop(tui: &mut Tui, config: &VisualizerConfig) -> Result<()> {
    let mut app = App::new(start(config)?, config);
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(Duration::from_millis(config.pacing.tick_ms.max(1)));

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                app.note_completion().await;
                app.draw(tui)?;
            }
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if is_quit(&key) => break,
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(terminal_error(err)),
                None => break,
            },
        }
    }

    if !app.visualizer.is_finished() {
        tracing::info!("quit before the sort finished; in-flight tasks are dropped with the LocalSet");
    }
    Ok(())
}
