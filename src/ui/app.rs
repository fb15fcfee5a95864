use std::sync::mpsc;
use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use crate::data::MovieRepository;
use crate::ui::detail::view::ToolbarView;
use crate::ui::detail::DetailScreen;
use crate::ui::events::AppEvent;
use crate::ui::home::{HomeAction, HomeScreen};
use crate::ui::layout::body_rect;
use crate::ui::theme::Theme;
use crate::usecase::{FetchMovieDetailUseCase, GetPopularMoviesUseCase};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScreenKind {
    Home,
    Detail,
}

/// Screen stack: the list is always at the bottom, a detail screen may sit
/// on top of it.
pub struct App {
    should_quit: bool,
    repository: Arc<dyn MovieRepository>,
    theme: Theme,
    home: HomeScreen,
    detail: Option<DetailScreen>,
    events: mpsc::Sender<AppEvent>,
    /// Area the active screen draws into.
    body: Rect,
    tick: u64,
}

impl App {
    pub fn new(
        repository: Arc<dyn MovieRepository>,
        theme: Theme,
        category: &str,
        events: mpsc::Sender<AppEvent>,
    ) -> Self {
        let home = HomeScreen::new(
            GetPopularMoviesUseCase::new(Arc::clone(&repository), category),
            theme,
        );
        Self {
            should_quit: false,
            repository,
            theme,
            home,
            detail: None,
            events,
            body: Rect::default(),
            tick: 0,
        }
    }

    /// Enter the list screen and, if given, open `initial_movie` on top.
    pub fn start(&mut self, initial_movie: Option<i64>) {
        self.home.on_enter();
        if let Some(id) = initial_movie {
            self.open_detail(id);
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn screen(&self) -> ScreenKind {
        if self.detail.is_some() {
            ScreenKind::Detail
        } else {
            ScreenKind::Home
        }
    }

    pub fn home(&self) -> &HomeScreen {
        &self.home
    }

    pub fn home_mut(&mut self) -> &mut HomeScreen {
        &mut self.home
    }

    pub fn detail(&self) -> Option<&DetailScreen> {
        self.detail.as_ref()
    }

    pub fn detail_mut(&mut self) -> Option<&mut DetailScreen> {
        self.detail.as_mut()
    }

    /// Push a detail screen for `id`, replacing any open one.
    pub fn open_detail(&mut self, id: i64) {
        tracing::info!(movie_id = id, "Opening detail screen");
        let events = self.events.clone();
        let mut screen = DetailScreen::new(
            id,
            FetchMovieDetailUseCase::new(Arc::clone(&self.repository)),
            self.theme,
            Box::new(move || {
                let _ = events.send(AppEvent::Back);
            }),
        );
        screen.on_resize(self.body);
        screen.on_enter();
        self.detail = Some(screen);
    }

    /// Pop the detail screen. Dropping it tears down its subscription.
    pub fn navigate_back(&mut self) {
        if let Some(screen) = self.detail.take() {
            tracing::info!(movie_id = screen.movie_id(), "Leaving detail screen");
        }
    }

    /// Apply results queued by the screens' subscriptions.
    pub fn pump(&mut self) -> bool {
        let home = self.home.pump();
        let detail = self.detail.as_mut().is_some_and(DetailScreen::pump);
        home || detail
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.pump();
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.body = body_rect(Rect::new(0, 0, cols, rows));
        if let Some(detail) = self.detail.as_mut() {
            detail.on_resize(self.body);
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if let Some(detail) = self.detail.as_mut() {
            detail.on_key(key);
            return;
        }
        if let HomeAction::OpenDetail(id) = self.home.on_key(key) {
            self.open_detail(id);
        }
    }

    /// Title shown in the header for the active screen.
    pub fn title(&self) -> String {
        let list = self.home.title();
        match self.detail.as_ref() {
            Some(detail) => {
                let record = detail.view_model().movie_detail().map(|view| &view.detail);
                format!("{} › {}", list, ToolbarView::for_detail(record).title)
            }
            None => list,
        }
    }
}
