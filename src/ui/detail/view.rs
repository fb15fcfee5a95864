//! Pure description of the detail screen.
//!
//! [`compose`] maps state to a [`ScreenTree`]; drawing happens elsewhere.
//! Keeping the two apart lets layout decisions be checked without a
//! terminal.

use std::sync::Arc;

use super::state::{DetailState, MovieDetailView};
use crate::data::{CastModel, Movie, MovieDetailResponse};
use crate::ui::carousel::CarouselMetrics;
use crate::ui::constraint::{ConstraintLayout, Constraints, Link};
use crate::ui::mvi::LoadState;
use crate::ui::theme::Theme;

pub const DEFAULT_TITLE: &str = "Movie";
pub const ORIGINAL_TITLE_SUFFIX: &str = "(original title)";
pub const FOLLOW_LABEL: &str = "Add to my list";
pub const CAST_TITLE: &str = "Cast";
pub const RECOMMENDATIONS_TITLE: &str = "Recommendations";

pub const TOOLBAR_HEIGHT: u16 = 3;
pub const HEADER_HEIGHT: u16 = 4;
pub const BACKDROP_HEIGHT: u16 = 6;
/// Poster rows plus the row the first divider sits on.
pub const SUMMARY_HEIGHT: u16 = 7;
pub const DIVIDER_HEIGHT: u16 = 1;
pub const BUTTON_HEIGHT: u16 = 3;
/// Title row, gap, poster, two caption rows, bottom gap.
pub const CAROUSEL_HEIGHT: u16 = 10;
pub const CAROUSEL_POSTER_ROWS: u16 = 5;
pub const SUMMARY_POSTER_WIDTH: u16 = 10;
pub const OVERVIEW_MAX_LINES: usize = 4;

pub const CAROUSEL_METRICS: CarouselMetrics = CarouselMetrics {
    item_width: 14,
    gap: 2,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Toolbar,
    Header,
    Backdrop,
    Summary,
    FirstDivider,
    FollowButton,
    SecondDivider,
    Cast,
    Recommendations,
}

/// Top-level branch of the screen.
#[derive(Debug, Clone)]
pub enum ScreenTree {
    Loading,
    Error,
    Content(ContentTree),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarView {
    pub title: String,
}

impl ToolbarView {
    /// The movie title, or [`DEFAULT_TITLE`] while there is no record. An
    /// empty title is shown as is.
    pub fn for_detail(detail: Option<&MovieDetailResponse>) -> Self {
        Self {
            title: detail.map_or_else(|| DEFAULT_TITLE.to_string(), |d| d.title.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub title: String,
    /// Empty when the record has no original title.
    pub original_title: String,
    pub id_label: String,
}

/// Image region. Terminals cannot show the image, so the placeholder is all
/// that is ever drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlot {
    pub caption: &'static str,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub poster: ImageSlot,
    /// First genre, empty when there is none.
    pub genre: String,
    pub rating: String,
    /// Overview text, empty when the record has none.
    pub overview: String,
}

#[derive(Debug, Clone)]
pub struct ContentTree {
    pub layout: ConstraintLayout<Region>,
    pub toolbar: ToolbarView,
    pub header: HeaderView,
    pub backdrop: ImageSlot,
    pub summary: SummaryView,
    pub follow_label: &'static str,
    /// Source for the carousels; item views are built lazily while drawing.
    pub data: Arc<MovieDetailView>,
}

impl ContentTree {
    pub fn has_cast(&self) -> bool {
        self.layout.contains(Region::Cast)
    }
}

/// One carousel tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselItemView {
    pub image: ImageSlot,
    pub primary: String,
    pub secondary: String,
}

pub fn cast_item(cast: &CastModel) -> CarouselItemView {
    CarouselItemView {
        image: ImageSlot {
            caption: "profile",
            url: cast.profile_url(),
        },
        primary: cast.name.clone(),
        secondary: cast.original_name.clone(),
    }
}

pub fn recommendation_item(movie: &Movie) -> CarouselItemView {
    CarouselItemView {
        image: ImageSlot {
            caption: "poster",
            url: movie.poster_url(),
        },
        primary: movie.title.clone(),
        secondary: format!("★ {:.1}", movie.vote_average),
    }
}

pub fn compose(state: &DetailState, theme: &Theme) -> ScreenTree {
    match (state.load, &state.detail) {
        (LoadState::Loading, _) => ScreenTree::Loading,
        (LoadState::Error, _) => ScreenTree::Error,
        (LoadState::Ready, Some(data)) => ScreenTree::Content(content(Arc::clone(data), theme)),
        // Ready always carries data; render the spinner rather than a hole.
        (LoadState::Ready, None) => ScreenTree::Loading,
    }
}

fn content(data: Arc<MovieDetailView>, theme: &Theme) -> ContentTree {
    let detail = &data.detail;
    let original_title = detail
        .original_title
        .as_deref()
        .filter(|title| !title.is_empty())
        .map(|title| format!("{} {}", title, ORIGINAL_TITLE_SUFFIX))
        .unwrap_or_default();

    ContentTree {
        layout: layout(&data, theme),
        toolbar: ToolbarView::for_detail(Some(detail)),
        header: HeaderView {
            title: detail.title.clone(),
            original_title,
            id_label: format!("ID: {}", detail.id),
        },
        backdrop: ImageSlot {
            caption: "movie backdrop",
            url: detail.tile_url(),
        },
        summary: SummaryView {
            poster: ImageSlot {
                caption: "poster",
                url: detail.poster_url(),
            },
            genre: detail.primary_genre().unwrap_or_default().to_string(),
            rating: format!("{:.1}", detail.vote_average),
            overview: detail.overview.clone().unwrap_or_default(),
        },
        follow_label: FOLLOW_LABEL,
        data,
    }
}

/// Region constraints for one movie. The cast carousel is left out when the
/// cast is empty, and recommendations then hang off the second divider.
pub fn layout(data: &MovieDetailView, theme: &Theme) -> ConstraintLayout<Region> {
    let gap = theme.padding_small;
    let mut layout = ConstraintLayout::new();
    layout
        .constrain(
            Region::Toolbar,
            Constraints::top(Link::parent_top(), TOOLBAR_HEIGHT),
        )
        .constrain(
            Region::Header,
            Constraints::top(Link::below(Region::Toolbar, 0), HEADER_HEIGHT),
        )
        .constrain(
            Region::Backdrop,
            Constraints::top(Link::below(Region::Header, gap), BACKDROP_HEIGHT)
                .inset(theme.padding_large, theme.padding_large),
        )
        .constrain(
            Region::Summary,
            Constraints::top(Link::below(Region::Backdrop, gap), SUMMARY_HEIGHT),
        )
        .constrain(
            Region::FirstDivider,
            Constraints::bottom(Link::bottom_of(Region::Summary), DIVIDER_HEIGHT),
        )
        .constrain(
            Region::FollowButton,
            Constraints::top(Link::below(Region::FirstDivider, gap), BUTTON_HEIGHT)
                .inset(theme.padding_large, theme.padding_large),
        )
        .constrain(
            Region::SecondDivider,
            Constraints::top(Link::below(Region::FollowButton, gap), DIVIDER_HEIGHT),
        );

    let previous = if data.cast.is_empty() {
        Region::SecondDivider
    } else {
        layout.constrain(
            Region::Cast,
            Constraints::top(Link::below(Region::SecondDivider, gap), CAROUSEL_HEIGHT),
        );
        Region::Cast
    };
    layout.constrain(
        Region::Recommendations,
        Constraints::top(Link::below(previous, gap), CAROUSEL_HEIGHT),
    );
    layout
}
