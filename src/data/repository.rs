use crate::data::models::{Movie, MovieDetailResponse};
use crate::data::RepositoryError;
use crate::stream::Observable;

/// Progress of a single-resource fetch as reported by a repository.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Success(T),
    Error(RepositoryError),
}

impl<T> FetchState<T> {
    pub fn into_success(self) -> Option<T> {
        match self {
            FetchState::Success(value) => Some(value),
            FetchState::Loading | FetchState::Error(_) => None,
        }
    }
}

/// Source of movie data.
///
/// Both operations return lazy streams: no request is made until the
/// returned observable is subscribed. A repository may emit more than once
/// when its underlying data changes.
pub trait MovieRepository: Send + Sync {
    fn fetch_list(&self, category: &str) -> Observable<Vec<Movie>>;

    fn fetch_detail(&self, id: i64) -> Observable<FetchState<MovieDetailResponse>>;
}
