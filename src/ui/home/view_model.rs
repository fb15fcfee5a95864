use std::sync::Arc;

use tokio::sync::mpsc;

use super::intent::HomeIntent;
use super::reducer::HomeReducer;
use super::state::HomeState;
use crate::data::Movie;
use crate::stream::{Event, Subscription};
use crate::ui::mvi::{LoadState, Reducer};
use crate::usecase::GetPopularMoviesUseCase;

/// Owns the list screen's state. Same queue-then-pump model as the detail
/// view-model, except every emission replaces the list.
pub struct HomeViewModel {
    use_case: GetPopularMoviesUseCase,
    state: HomeState,
    tx: mpsc::UnboundedSender<HomeIntent>,
    rx: mpsc::UnboundedReceiver<HomeIntent>,
    subscription: Option<Subscription>,
}

impl HomeViewModel {
    pub fn new(use_case: GetPopularMoviesUseCase) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            use_case,
            state: HomeState::default(),
            tx,
            rx,
            subscription: None,
        }
    }

    pub fn state(&self) -> &HomeState {
        &self.state
    }

    pub fn load_state(&self) -> LoadState {
        self.state.load
    }

    pub fn category(&self) -> &str {
        self.use_case.category()
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        self.state.selected_movie()
    }

    /// Must be called from within a tokio runtime.
    pub fn fetch_movies(&mut self) {
        if let Some(mut previous) = self.subscription.take() {
            previous.unsubscribe();
        }
        self.dispatch(HomeIntent::Fetch);
        let generation = self.state.generation;
        let category = self.use_case.category().to_string();
        tracing::debug!(%category, generation, "Fetching movie list");

        let tx = self.tx.clone();
        let mut emitted = false;
        let subscription = self.use_case.invoke().subscribe(move |event| match event {
            Event::Next(movies) => {
                emitted = true;
                let _ = tx.send(HomeIntent::Loaded {
                    generation,
                    movies: Arc::new(movies),
                });
            }
            Event::Failed(err) => {
                tracing::warn!(%category, error = %err, "Movie list stream failed");
                let _ = tx.send(HomeIntent::Failed { generation });
            }
            Event::Completed if !emitted => {
                tracing::warn!(%category, "Movie list stream ended without a result");
                let _ = tx.send(HomeIntent::Failed { generation });
            }
            Event::Completed => {}
        });
        self.subscription = Some(subscription);
    }

    pub fn move_selection(&mut self, delta: isize) {
        self.dispatch(HomeIntent::MoveSelection(delta));
    }

    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Ok(intent) = self.rx.try_recv() {
            changed |= self.dispatch(intent);
        }
        changed
    }

    pub async fn settle(&mut self) -> bool {
        match self.rx.recv().await {
            Some(intent) => self.dispatch(intent),
            None => false,
        }
    }

    fn dispatch(&mut self, intent: HomeIntent) -> bool {
        let before = self.state.clone();
        self.state = HomeReducer::reduce(std::mem::take(&mut self.state), intent);
        if before.load != self.state.load {
            tracing::info!(
                category = %self.use_case.category(),
                from = ?before.load,
                to = ?self.state.load,
                "Home state changed"
            );
        }
        before != self.state
    }
}
