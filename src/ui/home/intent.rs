use std::sync::Arc;

use crate::data::Movie;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum HomeIntent {
    Fetch,
    Loaded {
        generation: u64,
        movies: Arc<Vec<Movie>>,
    },
    Failed {
        generation: u64,
    },
    /// Move the highlight by `delta` rows.
    MoveSelection(isize),
}

impl Intent for HomeIntent {}
