//! State of the movie list screen.

use std::sync::Arc;

use crate::data::Movie;
use crate::ui::mvi::{LoadState, UiState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeState {
    pub load: LoadState,
    /// Latest emitted list. Each emission replaces it.
    pub movies: Option<Arc<Vec<Movie>>>,
    /// Index of the highlighted row.
    pub selected: usize,
    pub generation: u64,
}

impl UiState for HomeState {}

impl HomeState {
    pub fn selected_movie(&self) -> Option<&Movie> {
        self.movies.as_ref()?.get(self.selected)
    }
}
