//! Draws a [`ScreenTree`] into a frame.
//!
//! Regions are solved against a parent whose top is row 0 of the content,
//! then projected into the viewport at the current scroll offset. Each region
//! renders exactly `height` lines so partially visible regions can be cut by
//! skipping rows.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::view::{
    cast_item, recommendation_item, CarouselItemView, ContentTree, HeaderView, Region,
    ScreenTree, SummaryView, ToolbarView, BACKDROP_HEIGHT, CAROUSEL_HEIGHT, CAROUSEL_METRICS,
    CAROUSEL_POSTER_ROWS, CAST_TITLE, HEADER_HEIGHT, OVERVIEW_MAX_LINES, RECOMMENDATIONS_TITLE,
    SUMMARY_HEIGHT, SUMMARY_POSTER_WIDTH,
};
use crate::ui::carousel::CarouselState;
use crate::ui::layout::project;
use crate::ui::text::{center, pad, truncate, wrap};
use crate::ui::theme::Theme;
use crate::ui::widgets::{divider, placeholder_lines, placeholder_rows, render_failure, render_loading};

const BACK_ARROW: &str = "←";
const BULLET: &str = "● ";
const ACCENT_BAR: &str = "▌ ";
const EMPTY_CAROUSEL: &str = "Nothing to show";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CarouselFocus {
    #[default]
    Cast,
    Recommendations,
}

/// Scroll and focus of the detail screen; everything drawing needs besides
/// the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailViewport {
    pub scroll: u16,
    pub focus: CarouselFocus,
    pub cast: CarouselState,
    pub recommendations: CarouselState,
}

pub fn draw(
    frame: &mut Frame<'_>,
    area: Rect,
    tree: &ScreenTree,
    viewport: &DetailViewport,
    theme: &Theme,
    tick: u64,
) {
    match tree {
        ScreenTree::Loading => render_loading(frame, area, theme, tick),
        ScreenTree::Error => render_failure(frame, area, theme),
        ScreenTree::Content(content) => draw_content(frame, area, content, viewport, theme),
    }
}

fn draw_content(
    frame: &mut Frame<'_>,
    area: Rect,
    content: &ContentTree,
    viewport: &DetailViewport,
    theme: &Theme,
) {
    let parent = Rect {
        x: area.x,
        y: 0,
        width: area.width,
        height: area.height,
    };
    let solved = match content.layout.solve(parent) {
        Ok(solved) => solved,
        Err(err) => {
            tracing::error!(error = %err, "Detail layout could not be solved");
            render_failure(frame, area, theme);
            return;
        }
    };

    for &region in solved.order() {
        let Some(rect) = solved.rect(region) else {
            continue;
        };
        let Some(projection) = project(rect, area, viewport.scroll) else {
            continue;
        };
        let lines = region_lines(region, content, rect.width, viewport, theme);
        frame.render_widget(
            Paragraph::new(lines).scroll((projection.skip_rows, 0)),
            projection.screen,
        );
    }
}

fn region_lines(
    region: Region,
    content: &ContentTree,
    width: u16,
    viewport: &DetailViewport,
    theme: &Theme,
) -> Vec<Line<'static>> {
    match region {
        Region::Toolbar => toolbar_lines(&content.toolbar, width, theme),
        Region::Header => header_lines(&content.header, width, theme),
        Region::Backdrop => {
            placeholder_lines(content.backdrop.caption, width, BACKDROP_HEIGHT, theme)
        }
        Region::Summary => summary_lines(&content.summary, width, theme),
        Region::FirstDivider | Region::SecondDivider => vec![divider(width, theme)],
        Region::FollowButton => button_lines(content.follow_label, width, theme),
        Region::Cast => {
            let state = viewport.cast;
            let items = state.materialize(
                &content.data.cast,
                CAROUSEL_METRICS,
                carousel_width(width, theme),
                cast_item,
            );
            carousel_lines(
                CAST_TITLE,
                CarouselWindow {
                    items,
                    first: state.offset(),
                    len: content.data.cast.len(),
                    focused: viewport.focus == CarouselFocus::Cast,
                },
                width,
                theme,
            )
        }
        Region::Recommendations => {
            let state = viewport.recommendations;
            let items = state.materialize(
                &content.data.recommendation,
                CAROUSEL_METRICS,
                carousel_width(width, theme),
                recommendation_item,
            );
            carousel_lines(
                RECOMMENDATIONS_TITLE,
                CarouselWindow {
                    items,
                    first: state.offset(),
                    len: content.data.recommendation.len(),
                    focused: viewport.focus == CarouselFocus::Recommendations
                        || !content.has_cast(),
                },
                width,
                theme,
            )
        }
    }
}

fn toolbar_lines(toolbar: &ToolbarView, width: u16, theme: &Theme) -> Vec<Line<'static>> {
    let lead = format!("  {} ", BACK_ARROW);
    let lead_width = lead.chars().count();
    let title_width = (width as usize).saturating_sub(lead_width * 2);
    vec![
        Line::default(),
        Line::from(vec![
            Span::styled(lead, Style::default().fg(theme.accent)),
            Span::styled(
                center(&toolbar.title, title_width),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        divider(width, theme),
    ]
}

fn header_lines(header: &HeaderView, width: u16, theme: &Theme) -> Vec<Line<'static>> {
    let indent = " ".repeat(theme.padding_large as usize);
    let text_width = (width as usize).saturating_sub(indent.len() + ACCENT_BAR.chars().count());
    let muted = Style::default().fg(theme.muted);
    let mut lines = vec![
        Line::default(),
        Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(ACCENT_BAR, Style::default().fg(theme.accent)),
            Span::styled(
                truncate(&header.title, text_width),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw(indent.clone()),
            Span::raw("  "),
            Span::styled(truncate(&header.original_title, text_width), muted),
        ]),
        Line::from(vec![
            Span::raw(indent),
            Span::raw("  "),
            Span::styled(truncate(&header.id_label, text_width), muted),
        ]),
    ];
    lines.truncate(HEADER_HEIGHT as usize);
    lines
}

fn summary_lines(summary: &SummaryView, width: u16, theme: &Theme) -> Vec<Line<'static>> {
    let inset = theme.padding_large as usize;
    let poster_width = SUMMARY_POSTER_WIDTH.min(width.saturating_sub(theme.padding_large));
    let text_width = (width as usize)
        .saturating_sub(inset * 2)
        .saturating_sub(poster_width as usize + 2);
    // The last row belongs to the first divider.
    let rows = SUMMARY_HEIGHT - 1;
    let poster = placeholder_rows(summary.poster.caption, poster_width, rows);

    let mut column: Vec<Span<'static>> = vec![
        Span::styled(pad(&summary.genre, text_width), Style::default().fg(theme.muted)),
        Span::styled(
            pad(&format!("★ {}", summary.rating), text_width),
            Style::default().fg(theme.accent),
        ),
    ];
    column.extend(
        wrap(&summary.overview, text_width, OVERVIEW_MAX_LINES)
            .into_iter()
            .map(|line| Span::styled(line, Style::default().fg(theme.text))),
    );

    let mut lines: Vec<Line<'static>> = poster
        .into_iter()
        .enumerate()
        .map(|(row, cell)| {
            let mut spans = vec![
                Span::raw(" ".repeat(inset)),
                Span::styled(cell, Style::default().fg(theme.muted)),
                Span::raw("  "),
            ];
            if let Some(text) = column.get(row) {
                spans.push(text.clone());
            }
            Line::from(spans)
        })
        .collect();
    lines.push(Line::default());
    lines
}

fn button_lines(label: &str, width: u16, theme: &Theme) -> Vec<Line<'static>> {
    let fill = Style::default().bg(theme.accent);
    let blank = Line::from(Span::styled(" ".repeat(width as usize), fill));
    vec![
        blank.clone(),
        Line::from(Span::styled(
            center(label, width as usize),
            fill.fg(Color::Black).add_modifier(Modifier::BOLD),
        )),
        blank,
    ]
}

fn carousel_width(width: u16, theme: &Theme) -> u16 {
    width.saturating_sub(theme.padding_large.saturating_mul(2))
}

struct CarouselWindow {
    items: Vec<CarouselItemView>,
    first: usize,
    len: usize,
    focused: bool,
}

fn carousel_lines(
    title: &str,
    window: CarouselWindow,
    width: u16,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let indent = " ".repeat(theme.padding_large as usize);
    let item_width = CAROUSEL_METRICS.item_width;
    let gap = " ".repeat(CAROUSEL_METRICS.gap as usize);

    let mut title_style = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);
    if window.focused {
        title_style = title_style.add_modifier(Modifier::UNDERLINED);
    }
    let indicator = if window.len == 0 {
        String::new()
    } else {
        format!(
            "{}–{} of {}",
            window.first + 1,
            window.first + window.items.len(),
            window.len
        )
    };
    let heading_width = title.chars().count() + BULLET.chars().count();
    let fill = (carousel_width(width, theme) as usize)
        .saturating_sub(heading_width + indicator.chars().count());

    let mut lines = vec![
        Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(BULLET, Style::default().fg(theme.accent)),
            Span::styled(title.to_string(), title_style),
            Span::raw(" ".repeat(fill)),
            Span::styled(indicator, Style::default().fg(theme.muted)),
        ]),
        Line::default(),
    ];

    if window.items.is_empty() {
        for row in 0..CAROUSEL_POSTER_ROWS + 2 {
            let text = if row == CAROUSEL_POSTER_ROWS / 2 {
                EMPTY_CAROUSEL
            } else {
                ""
            };
            lines.push(Line::from(vec![
                Span::raw(indent.clone()),
                Span::styled(text, Style::default().fg(theme.muted)),
            ]));
        }
    } else {
        let posters: Vec<Vec<String>> = window
            .items
            .iter()
            .map(|item| placeholder_rows(item.image.caption, item_width, CAROUSEL_POSTER_ROWS))
            .collect();
        for row in 0..CAROUSEL_POSTER_ROWS as usize {
            let cells: Vec<&str> = posters.iter().map(|rows| rows[row].as_str()).collect();
            lines.push(Line::from(vec![
                Span::raw(indent.clone()),
                Span::styled(cells.join(&gap), Style::default().fg(theme.muted)),
            ]));
        }
        let primary: Vec<String> = window
            .items
            .iter()
            .map(|item| pad(&item.primary, item_width as usize))
            .collect();
        let secondary: Vec<String> = window
            .items
            .iter()
            .map(|item| pad(&item.secondary, item_width as usize))
            .collect();
        lines.push(Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(primary.join(&gap), Style::default().fg(theme.text)),
        ]));
        lines.push(Line::from(vec![
            Span::raw(indent),
            Span::styled(secondary.join(&gap), Style::default().fg(theme.muted)),
        ]));
    }
    lines.resize(CAROUSEL_HEIGHT as usize, Line::default());
    lines
}
