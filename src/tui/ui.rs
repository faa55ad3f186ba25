//! Widgets for the bar view and the status line

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::canvas::StyledLine;
use crate::engine::SortStats;

/// Draws pre-rasterized half-block lines cell by cell
pub struct BarsWidget<'a> {
    lines: &'a [StyledLine],
}

impl<'a> BarsWidget<'a> {
    pub fn new(lines: &'a [StyledLine]) -> Self {
        Self { lines }
    }
}

impl Widget for BarsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (dy, line) in self.lines.iter().take(area.height as usize).enumerate() {
            for (dx, styled) in line.cells.iter().take(area.width as usize).enumerate() {
                let pos = (area.x + dx as u16, area.y + dy as u16);
                if let Some(cell) = buf.cell_mut(pos) {
                    cell.set_char(styled.ch).set_fg(styled.fg).set_bg(styled.bg);
                }
            }
        }
    }
}

/// One-line summary of sort progress
pub fn status_line(bars: usize, stats: &SortStats, finished: bool) -> Line<'static> {
    let state = if finished {
        Span::styled(" sorted ", Style::default().fg(Color::Black).bg(Color::Green))
    } else {
        Span::styled(" sorting ", Style::default().fg(Color::Black).bg(Color::Yellow))
    };
    Line::from(vec![
        state,
        Span::raw(format!(
            " {bars} bars  {} swaps  {} partitions  {} tasks  ",
            stats.swaps, stats.partitions, stats.tasks_spawned
        )),
        Span::styled("q to quit", Style::default().fg(Color::DarkGray)),
    ])
}
