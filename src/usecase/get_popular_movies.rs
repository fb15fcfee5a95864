use std::sync::Arc;

use crate::data::{Movie, MovieRepository};
use crate::stream::Observable;

/// Fetches the movie list shown on the home screen.
#[derive(Clone)]
pub struct GetPopularMoviesUseCase {
    repository: Arc<dyn MovieRepository>,
    category: String,
}

impl GetPopularMoviesUseCase {
    pub fn new(repository: Arc<dyn MovieRepository>, category: impl Into<String>) -> Self {
        Self {
            repository,
            category: category.into(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Re-emits every list the repository publishes for the category.
    pub fn invoke(&self) -> Observable<Vec<Movie>> {
        self.repository.fetch_list(&self.category)
    }
}
