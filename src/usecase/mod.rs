//! Use cases: thin adapters between the repository and the view-models.

mod fetch_movie_detail;
mod get_popular_movies;

pub use fetch_movie_detail::FetchMovieDetailUseCase;
pub use get_popular_movies::GetPopularMoviesUseCase;
