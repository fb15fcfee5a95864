//! Movie list screen.

pub mod intent;
pub mod reducer;
pub mod render;
pub mod state;
pub mod view_model;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::Frame;

pub use intent::HomeIntent;
pub use reducer::HomeReducer;
pub use state::HomeState;
pub use view_model::HomeViewModel;

use crate::ui::theme::Theme;
use crate::usecase::GetPopularMoviesUseCase;

/// What the host should do after a key on the list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    None,
    OpenDetail(i64),
}

pub struct HomeScreen {
    view_model: HomeViewModel,
    theme: Theme,
    entered: bool,
}

impl HomeScreen {
    pub fn new(use_case: GetPopularMoviesUseCase, theme: Theme) -> Self {
        Self {
            view_model: HomeViewModel::new(use_case),
            theme,
            entered: false,
        }
    }

    pub fn view_model(&self) -> &HomeViewModel {
        &self.view_model
    }

    pub fn view_model_mut(&mut self) -> &mut HomeViewModel {
        &mut self.view_model
    }

    /// Human-readable list name, e.g. "Top rated" for `top_rated`.
    pub fn title(&self) -> String {
        category_title(self.view_model.category())
    }

    pub fn on_enter(&mut self) {
        if self.entered {
            return;
        }
        self.entered = true;
        self.view_model.fetch_movies();
    }

    pub fn pump(&mut self) -> bool {
        self.view_model.pump()
    }

    pub fn on_key(&mut self, key: KeyEvent) -> HomeAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.view_model.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.view_model.move_selection(1),
            KeyCode::PageUp => self.view_model.move_selection(-10),
            KeyCode::PageDown => self.view_model.move_selection(10),
            KeyCode::Enter => {
                if let Some(movie) = self.view_model.selected_movie() {
                    return HomeAction::OpenDetail(movie.id);
                }
            }
            _ => {}
        }
        HomeAction::None
    }

    pub fn draw(&self, frame: &mut Frame<'_>, area: Rect, tick: u64) {
        render::draw(
            frame,
            area,
            self.view_model.state(),
            &self.title(),
            &self.theme,
            tick,
        );
    }
}

fn category_title(category: &str) -> String {
    let spaced = category.replace(['_', '-'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
