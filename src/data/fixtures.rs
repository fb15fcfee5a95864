//! In-memory repository backed by a JSON catalog.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::data::models::{Movie, MovieDetailResponse};
use crate::data::repository::{FetchState, MovieRepository};
use crate::data::RepositoryError;
use crate::stream::Observable;

const BUNDLED_CATALOG: &str = include_str!("../../assets/catalog.json");

/// Catalog file contents: named lists plus full detail records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub lists: HashMap<String, Vec<Movie>>,
    #[serde(default)]
    pub details: Vec<MovieDetailResponse>,
}

impl Catalog {
    pub fn parse(content: &str, origin: &Path) -> Result<Self, RepositoryError> {
        serde_json::from_str(content).map_err(|err| RepositoryError::Catalog {
            path: origin.to_path_buf(),
            message: err.to_string(),
        })
    }

    fn detail(&self, id: i64) -> Option<MovieDetailResponse> {
        self.details.iter().find(|detail| detail.id == id).cloned()
    }
}

/// Serves movies from a [`Catalog`] held in memory.
///
/// Detail fetches emit `Loading` followed by `Success`, or `Error` for ids
/// the catalog does not know.
#[derive(Clone)]
pub struct FixtureRepository {
    catalog: Arc<RwLock<Catalog>>,
}

impl FixtureRepository {
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path).map_err(|err| RepositoryError::Catalog {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Ok(Self::from_catalog(Catalog::parse(&content, path)?))
    }

    /// The sample catalog shipped with the binary.
    pub fn bundled() -> Result<Self, RepositoryError> {
        let catalog = Catalog::parse(BUNDLED_CATALOG, &PathBuf::from("<bundled>"))?;
        Ok(Self::from_catalog(catalog))
    }

    /// Number of distinct detail records.
    pub fn len(&self) -> usize {
        self.catalog.read().details.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert or replace a detail record. Later fetches see the new record.
    pub fn upsert_detail(&self, detail: MovieDetailResponse) {
        let mut catalog = self.catalog.write();
        match catalog.details.iter_mut().find(|d| d.id == detail.id) {
            Some(existing) => *existing = detail,
            None => catalog.details.push(detail),
        }
    }
}

impl MovieRepository for FixtureRepository {
    fn fetch_list(&self, category: &str) -> Observable<Vec<Movie>> {
        match self.catalog.read().lists.get(category) {
            Some(movies) => Observable::just(movies.clone()),
            None => Observable::fail(RepositoryError::UnknownCategory {
                category: category.to_string(),
            }),
        }
    }

    fn fetch_detail(&self, id: i64) -> Observable<FetchState<MovieDetailResponse>> {
        let catalog = Arc::clone(&self.catalog);
        Observable::create(move |emitter| async move {
            if !emitter.emit(FetchState::Loading) {
                return;
            }
            let detail = catalog.read().detail(id);
            let state = match detail {
                Some(detail) => FetchState::Success(detail),
                None => FetchState::Error(RepositoryError::NotFound { id }),
            };
            emitter.emit(state);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_parses() {
        let repository = FixtureRepository::bundled().unwrap();
        assert!(!repository.is_empty());
        assert!(repository.catalog.read().lists.contains_key("popular"));
    }

    #[test]
    fn parse_error_names_origin() {
        let err = Catalog::parse("{not json", Path::new("broken.json")).unwrap_err();
        assert!(matches!(err, RepositoryError::Catalog { ref path, .. } if path == Path::new("broken.json")));
    }

    #[test]
    fn upsert_replaces_existing_record() {
        let repository = FixtureRepository::from_catalog(Catalog::default());
        let mut detail: MovieDetailResponse =
            serde_json::from_str(r#"{"id": 5, "title": "Before"}"#).unwrap();
        repository.upsert_detail(detail.clone());
        detail.title = "After".into();
        repository.upsert_detail(detail);

        assert_eq!(repository.len(), 1);
        assert_eq!(repository.catalog.read().detail(5).unwrap().title, "After");
    }
}
