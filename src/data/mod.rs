//! Repository seam and the movie records it serves.

mod error;
pub mod fixtures;
pub mod models;
pub mod repository;
pub mod tmdb;

use std::sync::Arc;

use crate::config::{RepositoryConfig, RepositorySource};

pub use error::RepositoryError;
pub use fixtures::{Catalog, FixtureRepository};
pub use models::{CastModel, Credits, Genre, Movie, MovieDetailResponse, Page};
pub use repository::{FetchState, MovieRepository};
pub use tmdb::TmdbRepository;

/// Build the repository selected by configuration.
pub fn build_repository(
    config: &RepositoryConfig,
) -> Result<Arc<dyn MovieRepository>, RepositoryError> {
    match config.source {
        RepositorySource::Fixtures => {
            let repository = match &config.fixtures_path {
                Some(path) => FixtureRepository::from_path(path)?,
                None => FixtureRepository::bundled()?,
            };
            tracing::info!(movies = repository.len(), "Using fixture repository");
            Ok(Arc::new(repository))
        }
        RepositorySource::Tmdb => {
            let repository = TmdbRepository::new(config)?;
            tracing::info!(base_url = %config.base_url, "Using TMDB repository");
            Ok(Arc::new(repository))
        }
    }
}
