//! Building blocks shared by the screens.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::text::truncate;
use crate::ui::theme::Theme;

/// Spinner animation frames.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const LOADING_LABEL: &str = "Loading";
pub const FAILURE_LABEL: &str = "Something went wrong";

const PLACEHOLDER_FILL: char = '░';

pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}

/// Vertical middle row of `area`, full width.
fn middle_row(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: area.height.min(1),
    }
}

/// Full-screen loading branch.
pub fn render_loading(frame: &mut Frame<'_>, area: Rect, theme: &Theme, tick: u64) {
    let line = Line::from(vec![
        Span::styled(
            format!("{} ", spinner_frame(tick)),
            Style::default().fg(theme.accent),
        ),
        Span::styled(LOADING_LABEL, Style::default().fg(theme.text)),
    ]);
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        middle_row(area),
    );
}

/// Full-screen failure branch. Offers no retry.
pub fn render_failure(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled("✗ ", Style::default().fg(theme.error).add_modifier(Modifier::BOLD)),
        Span::styled(FAILURE_LABEL, Style::default().fg(theme.text)),
    ]);
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        middle_row(area),
    );
}

pub fn divider(width: u16, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        "─".repeat(width as usize),
        Style::default().fg(theme.separator),
    ))
}

/// Image placeholder rows: a shaded block with the caption on the middle row.
pub fn placeholder_rows(caption: &str, width: u16, height: u16) -> Vec<String> {
    let width = width as usize;
    let fill = |n: usize| PLACEHOLDER_FILL.to_string().repeat(n);
    (0..height)
        .map(|row| {
            if row != height / 2 || width < 3 {
                return fill(width);
            }
            let label = format!(" {} ", truncate(caption, width.saturating_sub(2)));
            let free = width.saturating_sub(label.chars().count());
            let left = free / 2;
            format!("{}{}{}", fill(left), label, fill(free - left))
        })
        .collect()
}

pub fn placeholder_lines(caption: &str, width: u16, height: u16, theme: &Theme) -> Vec<Line<'static>> {
    placeholder_rows(caption, width, height)
        .into_iter()
        .map(|row| Line::from(Span::styled(row, Style::default().fg(theme.muted))))
        .collect()
}
