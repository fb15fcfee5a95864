//! State of the movie detail screen.

use std::sync::Arc;

use crate::data::{CastModel, Movie, MovieDetailResponse};
use crate::ui::mvi::{LoadState, UiState};

/// Everything the detail screen shows for one movie.
///
/// Built once per successful fetch and never mutated; a newer fetch replaces
/// the whole value.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetailView {
    pub detail: MovieDetailResponse,
    pub cast: Vec<CastModel>,
    pub recommendation: Vec<Movie>,
}

impl MovieDetailView {
    pub fn from_response(detail: MovieDetailResponse) -> Self {
        let cast = detail.cast().to_vec();
        let recommendation = detail.recommended().to_vec();
        Self {
            detail,
            cast,
            recommendation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailState {
    pub load: LoadState,
    /// Latest successful result. Survives a re-trigger for the same movie
    /// until replaced; a trigger for another movie clears it.
    pub detail: Option<Arc<MovieDetailView>>,
    /// Bumped on every trigger; results tagged with an older value are stale.
    pub generation: u64,
    /// Movie requested by the latest trigger.
    pub movie_id: Option<i64>,
}

impl UiState for DetailState {}

impl DetailState {
    pub fn is_ready(&self) -> bool {
        self.load == LoadState::Ready
    }
}
