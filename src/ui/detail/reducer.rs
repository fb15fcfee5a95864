//! Reducer for the detail screen.

use super::intent::DetailIntent;
use super::state::DetailState;
use crate::ui::mvi::{LoadState, Reducer};

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Fetch { id } => DetailState {
                load: LoadState::Loading,
                generation: state.generation + 1,
                // Another movie's payload must not outlive the switch.
                detail: state.detail.filter(|_| state.movie_id == Some(id)),
                movie_id: Some(id),
            },

            DetailIntent::Loaded { generation, .. } if generation != state.generation => state,
            DetailIntent::Loaded { view, .. } => match state.load {
                // A fetch that already failed stays failed.
                LoadState::Error => state,
                LoadState::Loading | LoadState::Ready => DetailState {
                    load: LoadState::Ready,
                    detail: Some(view),
                    ..state
                },
            },

            DetailIntent::Failed { generation } if generation != state.generation => state,
            DetailIntent::Failed { .. } => match state.load {
                LoadState::Loading => DetailState {
                    load: LoadState::Error,
                    ..state
                },
                LoadState::Ready | LoadState::Error => state,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MovieDetailResponse;
    use crate::ui::detail::state::MovieDetailView;
    use std::sync::Arc;

    fn view(title: &str) -> Arc<MovieDetailView> {
        let detail: MovieDetailResponse =
            serde_json::from_str(&format!(r#"{{"id": 1, "title": "{}"}}"#, title)).unwrap();
        Arc::new(MovieDetailView::from_response(detail))
    }

    fn fetched() -> DetailState {
        DetailReducer::reduce(DetailState::default(), DetailIntent::Fetch { id: 1 })
    }

    #[test]
    fn fetch_resets_to_loading_and_bumps_generation() {
        let ready = DetailState {
            load: LoadState::Ready,
            detail: Some(view("kept")),
            generation: 3,
            movie_id: Some(1),
        };
        let state = DetailReducer::reduce(ready, DetailIntent::Fetch { id: 1 });
        assert_eq!(state.load, LoadState::Loading);
        assert_eq!(state.generation, 4);
        assert_eq!(state.movie_id, Some(1));
        assert_eq!(state.detail.unwrap().detail.title, "kept");
    }

    #[test]
    fn fetch_for_other_movie_drops_previous_payload() {
        let ready = DetailState {
            load: LoadState::Ready,
            detail: Some(view("previous")),
            generation: 3,
            movie_id: Some(1),
        };
        let state = DetailReducer::reduce(ready, DetailIntent::Fetch { id: 2 });
        assert_eq!(state.movie_id, Some(2));
        assert!(state.detail.is_none());

        let failed = DetailReducer::reduce(state, DetailIntent::Failed { generation: 4 });
        assert_eq!(failed.load, LoadState::Error);
        assert!(failed.detail.is_none());
    }

    #[test]
    fn loaded_moves_to_ready() {
        let state = DetailReducer::reduce(
            fetched(),
            DetailIntent::Loaded {
                generation: 1,
                view: view("A"),
            },
        );
        assert_eq!(state.load, LoadState::Ready);
        assert_eq!(state.detail.unwrap().detail.title, "A");
    }

    #[test]
    fn later_payload_replaces_data_while_ready() {
        let ready = DetailReducer::reduce(
            fetched(),
            DetailIntent::Loaded {
                generation: 1,
                view: view("A"),
            },
        );
        let state = DetailReducer::reduce(
            ready,
            DetailIntent::Loaded {
                generation: 1,
                view: view("B"),
            },
        );
        assert_eq!(state.load, LoadState::Ready);
        assert_eq!(state.detail.unwrap().detail.title, "B");
    }

    #[test]
    fn failed_moves_to_error_without_data() {
        let state = DetailReducer::reduce(fetched(), DetailIntent::Failed { generation: 1 });
        assert_eq!(state.load, LoadState::Error);
        assert!(state.detail.is_none());
    }

    #[test]
    fn stale_results_are_ignored() {
        let second = DetailReducer::reduce(fetched(), DetailIntent::Fetch { id: 1 });
        let state = DetailReducer::reduce(
            second.clone(),
            DetailIntent::Loaded {
                generation: 1,
                view: view("old"),
            },
        );
        assert_eq!(state, second);
        let state = DetailReducer::reduce(state, DetailIntent::Failed { generation: 1 });
        assert_eq!(state, second);
    }

    #[test]
    fn failure_after_ready_is_ignored() {
        let ready = DetailReducer::reduce(
            fetched(),
            DetailIntent::Loaded {
                generation: 1,
                view: view("A"),
            },
        );
        let state = DetailReducer::reduce(ready.clone(), DetailIntent::Failed { generation: 1 });
        assert_eq!(state, ready);
    }
}
