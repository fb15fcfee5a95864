//! Movie detail screen.

pub mod intent;
pub mod reducer;
pub mod render;
pub mod state;
pub mod view;
pub mod view_model;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::Frame;

pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use render::{CarouselFocus, DetailViewport};
pub use state::{DetailState, MovieDetailView};
pub use view::{compose, ContentTree, Region, ScreenTree};
pub use view_model::MovieDetailViewModel;

use crate::ui::theme::Theme;
use crate::usecase::FetchMovieDetailUseCase;

/// Host callback invoked when the user asks to leave the screen.
pub type BackCallback = Box<dyn Fn() + Send>;

/// One detail screen instance: its own view-model plus scroll and focus.
pub struct DetailScreen {
    movie_id: i64,
    view_model: MovieDetailViewModel,
    on_back: BackCallback,
    theme: Theme,
    viewport: DetailViewport,
    /// Size of the area the screen draws into.
    area: Rect,
    entered: bool,
}

impl DetailScreen {
    pub fn new(
        movie_id: i64,
        use_case: FetchMovieDetailUseCase,
        theme: Theme,
        on_back: BackCallback,
    ) -> Self {
        Self {
            movie_id,
            view_model: MovieDetailViewModel::new(use_case),
            on_back,
            theme,
            viewport: DetailViewport::default(),
            area: Rect::default(),
            entered: false,
        }
    }

    pub fn movie_id(&self) -> i64 {
        self.movie_id
    }

    pub fn view_model(&self) -> &MovieDetailViewModel {
        &self.view_model
    }

    pub fn view_model_mut(&mut self) -> &mut MovieDetailViewModel {
        &mut self.view_model
    }

    pub fn viewport(&self) -> &DetailViewport {
        &self.viewport
    }

    /// First display of the screen. Triggers the fetch once; later calls
    /// are no-ops.
    pub fn on_enter(&mut self) {
        if self.entered {
            return;
        }
        self.entered = true;
        self.view_model.fetch_movie_detail(self.movie_id);
    }

    /// Apply queued fetch results. Returns true if anything changed.
    pub fn pump(&mut self) -> bool {
        let changed = self.view_model.pump();
        if changed {
            self.viewport.cast.reset();
            self.viewport.recommendations.reset();
            self.clamp_scroll();
        }
        changed
    }

    pub fn tree(&self) -> ScreenTree {
        compose(self.view_model.state(), &self.theme)
    }

    pub fn on_resize(&mut self, area: Rect) {
        self.area = area;
        self.clamp_scroll();
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => (self.on_back)(),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-self.page()),
            KeyCode::PageDown => self.scroll_by(self.page()),
            KeyCode::Home => self.viewport.scroll = 0,
            KeyCode::End => self.viewport.scroll = self.max_scroll(),
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Left => self.scroll_carousel(-1),
            KeyCode::Right => self.scroll_carousel(1),
            _ => {}
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>, area: Rect, tick: u64) {
        render::draw(frame, area, &self.tree(), &self.viewport, &self.theme, tick);
    }

    /// Carousel that Left/Right act on. Falls back to recommendations when
    /// the cast carousel is not shown.
    pub fn focus(&self) -> CarouselFocus {
        match self.tree() {
            ScreenTree::Content(content) if content.has_cast() => self.viewport.focus,
            _ => CarouselFocus::Recommendations,
        }
    }

    fn page(&self) -> i32 {
        i32::from(self.area.height.saturating_sub(1).max(1))
    }

    fn content_height(&self) -> u16 {
        let ScreenTree::Content(content) = self.tree() else {
            return 0;
        };
        match content.layout.solve(Rect { y: 0, ..self.area }) {
            Ok(solved) => solved.content_height(),
            Err(err) => {
                tracing::warn!(error = %err, "Detail layout could not be solved");
                0
            }
        }
    }

    fn max_scroll(&self) -> u16 {
        self.content_height().saturating_sub(self.area.height)
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.viewport.scroll) + delta).max(0);
        self.viewport.scroll = u16::try_from(next).unwrap_or(u16::MAX).min(self.max_scroll());
    }

    fn clamp_scroll(&mut self) {
        self.viewport.scroll = self.viewport.scroll.min(self.max_scroll());
    }

    fn toggle_focus(&mut self) {
        if self.focus() != self.viewport.focus {
            return;
        }
        self.viewport.focus = match self.viewport.focus {
            CarouselFocus::Cast => CarouselFocus::Recommendations,
            CarouselFocus::Recommendations => CarouselFocus::Cast,
        };
    }

    fn scroll_carousel(&mut self, delta: isize) {
        let Some(data) = self.view_model.movie_detail() else {
            return;
        };
        match self.focus() {
            CarouselFocus::Cast => self.viewport.cast.scroll_by(delta, data.cast.len()),
            CarouselFocus::Recommendations => self
                .viewport
                .recommendations
                .scroll_by(delta, data.recommendation.len()),
        }
    }
}
