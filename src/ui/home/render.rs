use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use ratatui::Frame;

use super::state::HomeState;
use crate::data::Movie;
use crate::ui::mvi::LoadState;
use crate::ui::text::{pad, truncate};
use crate::ui::theme::Theme;
use crate::ui::widgets::{render_failure, render_loading};

const EMPTY_LIST: &str = "No movies in this list";
const HIGHLIGHT_SYMBOL: &str = "▌ ";
const RATING_WIDTH: usize = 6;
const YEAR_WIDTH: usize = 6;

pub fn draw(frame: &mut Frame<'_>, area: Rect, state: &HomeState, title: &str, theme: &Theme, tick: u64) {
    let movies = match (state.load, &state.movies) {
        (LoadState::Ready, Some(movies)) => movies,
        (LoadState::Error, _) => return render_failure(frame, area, theme),
        _ => return render_loading(frame, area, theme, tick),
    };

    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(" ● ", Style::default().fg(theme.accent)),
            Span::styled(
                format!("{} ", title),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
        ]))
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme.separator))
        .padding(Padding::horizontal(theme.padding_small));

    if movies.is_empty() {
        let line = Line::from(Span::styled(EMPTY_LIST, Style::default().fg(theme.muted)));
        frame.render_widget(Paragraph::new(line).block(block), area);
        return;
    }

    let row_width = (area.width as usize)
        .saturating_sub(2 * theme.padding_small as usize)
        .saturating_sub(HIGHLIGHT_SYMBOL.chars().count());
    let items: Vec<ListItem<'static>> = movies
        .iter()
        .map(|movie| ListItem::new(row(movie, row_width, theme)))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_style(
            Style::default()
                .bg(theme.highlight)
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn row(movie: &Movie, width: usize, theme: &Theme) -> Line<'static> {
    let title_width = width.saturating_sub(RATING_WIDTH + YEAR_WIDTH);
    let year = movie
        .release_year()
        .map(|year| format!("({})", year))
        .unwrap_or_default();
    Line::from(vec![
        Span::styled(pad(&movie.title, title_width), Style::default().fg(theme.text)),
        Span::styled(pad(&year, YEAR_WIDTH), Style::default().fg(theme.muted)),
        Span::styled(
            truncate(&format!("★ {:.1}", movie.vote_average), RATING_WIDTH),
            Style::default().fg(theme.accent),
        ),
    ])
}
