use std::sync::Arc;

use crate::data::{FetchState, MovieDetailResponse, MovieRepository};
use crate::stream::Observable;

/// Fetches one movie's detail record.
#[derive(Clone)]
pub struct FetchMovieDetailUseCase {
    repository: Arc<dyn MovieRepository>,
}

impl FetchMovieDetailUseCase {
    pub fn new(repository: Arc<dyn MovieRepository>) -> Self {
        Self { repository }
    }

    /// Re-emits only the successful payloads of the repository stream.
    ///
    /// `Loading` and `Error` states are dropped here; the caller tracks its
    /// own loading state and treats a stream that ends without a payload as
    /// a failure.
    pub fn invoke(&self, id: i64) -> Observable<MovieDetailResponse> {
        self.repository
            .fetch_detail(id)
            .filter_map(FetchState::into_success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Catalog, FixtureRepository, RepositoryError};

    fn repository_with(detail: &str) -> Arc<dyn MovieRepository> {
        let repository = FixtureRepository::from_catalog(Catalog::default());
        repository.upsert_detail(serde_json::from_str(detail).unwrap());
        Arc::new(repository)
    }

    #[tokio::test]
    async fn loading_state_is_filtered_out() {
        let use_case = FetchMovieDetailUseCase::new(repository_with(r#"{"id": 3, "title": "Three"}"#));
        let values = use_case.invoke(3).collect().await.unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].title, "Three");
    }

    #[tokio::test]
    async fn error_state_yields_empty_stream() {
        let use_case = FetchMovieDetailUseCase::new(repository_with(r#"{"id": 3, "title": "Three"}"#));
        let values: Result<Vec<_>, RepositoryError> = use_case.invoke(99).collect().await;
        assert_eq!(values, Ok(Vec::new()));
    }
}
