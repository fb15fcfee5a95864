//! Movie records as delivered by the repository.
//!
//! Field names follow the TMDB v3 JSON shape so the same types decode both
//! the HTTP responses and the bundled catalog.

use serde::{Deserialize, Serialize};

/// Base URL for poster, backdrop and profile images.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

fn image_url(path: Option<&str>) -> Option<String> {
    path.filter(|p| !p.is_empty())
        .map(|p| format!("{}{}", IMAGE_BASE_URL, p))
}

/// Entry in a movie list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub release_date: Option<String>,
}

impl Movie {
    pub fn poster_url(&self) -> Option<String> {
        image_url(self.poster_path.as_deref())
    }

    /// Four-digit release year, if the release date carries one.
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|date| date.get(..4))
            .filter(|year| year.chars().all(|c| c.is_ascii_digit()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastModel {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub original_name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
}

impl CastModel {
    pub fn profile_url(&self) -> Option<String> {
        image_url(self.profile_path.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastModel>,
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Full record for a single movie, with credits and recommendations
/// appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetailResponse {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub credits: Option<Credits>,
    #[serde(default)]
    pub recommendations: Option<Page<Movie>>,
}

impl MovieDetailResponse {
    pub fn poster_url(&self) -> Option<String> {
        image_url(self.poster_path.as_deref())
    }

    /// Wide backdrop image, falling back to the poster.
    pub fn tile_url(&self) -> Option<String> {
        image_url(self.backdrop_path.as_deref()).or_else(|| self.poster_url())
    }

    pub fn primary_genre(&self) -> Option<&str> {
        self.genres.first().map(|genre| genre.name.as_str())
    }

    pub fn cast(&self) -> &[CastModel] {
        self.credits
            .as_ref()
            .map(|credits| credits.cast.as_slice())
            .unwrap_or_default()
    }

    pub fn recommended(&self) -> &[Movie] {
        self.recommendations
            .as_ref()
            .map(|page| page.results.as_slice())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_decodes_with_missing_optionals() {
        let detail: MovieDetailResponse = serde_json::from_str(
            r#"{"id": 42, "title": "Sample", "original_title": "Ejemplo", "overview": null}"#,
        )
        .unwrap();

        assert_eq!(detail.id, 42);
        assert_eq!(detail.original_title.as_deref(), Some("Ejemplo"));
        assert!(detail.overview.is_none());
        assert!(detail.cast().is_empty());
        assert!(detail.recommended().is_empty());
        assert_eq!(detail.primary_genre(), None);
    }

    #[test]
    fn tile_url_falls_back_to_poster() {
        let detail: MovieDetailResponse =
            serde_json::from_str(r#"{"id": 1, "title": "T", "poster_path": "/p.jpg"}"#).unwrap();
        assert_eq!(
            detail.tile_url().as_deref(),
            Some("https://image.tmdb.org/t/p/w500/p.jpg")
        );
    }

    #[test]
    fn release_year_requires_digits() {
        let mut movie: Movie = serde_json::from_str(r#"{"id": 1, "title": "T"}"#).unwrap();
        assert_eq!(movie.release_year(), None);
        movie.release_date = Some("1999-03-31".into());
        assert_eq!(movie.release_year(), Some("1999"));
        movie.release_date = Some("TBA".into());
        assert_eq!(movie.release_year(), None);
    }
}
