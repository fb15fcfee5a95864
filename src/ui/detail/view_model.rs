use std::sync::Arc;

use tokio::sync::mpsc;

use super::intent::DetailIntent;
use super::reducer::DetailReducer;
use super::state::{DetailState, MovieDetailView};
use crate::stream::{Event, Subscription};
use crate::ui::mvi::{LoadState, Reducer};
use crate::usecase::FetchMovieDetailUseCase;

/// Owns the detail screen's state and its fetch subscription.
///
/// Results arrive on a background task and are queued; [`pump`] applies
/// them on the caller's thread, so state only changes where it is drawn.
///
/// [`pump`]: MovieDetailViewModel::pump
pub struct MovieDetailViewModel {
    use_case: FetchMovieDetailUseCase,
    state: DetailState,
    tx: mpsc::UnboundedSender<DetailIntent>,
    rx: mpsc::UnboundedReceiver<DetailIntent>,
    subscription: Option<Subscription>,
}

impl MovieDetailViewModel {
    pub fn new(use_case: FetchMovieDetailUseCase) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            use_case,
            state: DetailState::default(),
            tx,
            rx,
            subscription: None,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn load_state(&self) -> LoadState {
        self.state.load
    }

    pub fn movie_detail(&self) -> Option<&Arc<MovieDetailView>> {
        self.state.detail.as_ref()
    }

    /// Start fetching `id`, replacing any fetch in flight.
    ///
    /// Must be called from within a tokio runtime.
    pub fn fetch_movie_detail(&mut self, id: i64) {
        if let Some(mut previous) = self.subscription.take() {
            previous.unsubscribe();
        }
        self.dispatch(DetailIntent::Fetch { id });
        let generation = self.state.generation;
        tracing::debug!(movie_id = id, generation, "Fetching movie detail");

        let tx = self.tx.clone();
        let mut resolved = false;
        let subscription = self.use_case.invoke(id).subscribe(move |event| match event {
            Event::Next(detail) => {
                resolved = true;
                let view = Arc::new(MovieDetailView::from_response(detail));
                let _ = tx.send(DetailIntent::Loaded { generation, view });
            }
            Event::Failed(err) => {
                tracing::warn!(movie_id = id, error = %err, "Movie detail stream failed");
                let _ = tx.send(DetailIntent::Failed { generation });
            }
            Event::Completed if !resolved => {
                tracing::warn!(movie_id = id, "Movie detail stream ended without a result");
                let _ = tx.send(DetailIntent::Failed { generation });
            }
            Event::Completed => {}
        });
        self.subscription = Some(subscription);
    }

    /// Apply every queued result. Returns true if the state changed.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Ok(intent) = self.rx.try_recv() {
            changed |= self.dispatch(intent);
        }
        changed
    }

    /// Wait for the next queued result and apply it.
    pub async fn settle(&mut self) -> bool {
        match self.rx.recv().await {
            Some(intent) => self.dispatch(intent),
            None => false,
        }
    }

    fn dispatch(&mut self, intent: DetailIntent) -> bool {
        let before = self.state.clone();
        self.state = DetailReducer::reduce(std::mem::take(&mut self.state), intent);
        if before.load != self.state.load {
            tracing::info!(
                movie_id = ?self.state.movie_id,
                from = ?before.load,
                to = ?self.state.load,
                "Detail state changed"
            );
        }
        before != self.state
    }
}

impl Drop for MovieDetailViewModel {
    fn drop(&mut self) {
        if self.subscription.as_ref().is_some_and(Subscription::is_active) {
            tracing::debug!(movie_id = ?self.state.movie_id, "Tearing down detail subscription");
        }
    }
}
