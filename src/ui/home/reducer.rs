use super::intent::HomeIntent;
use super::state::HomeState;
use crate::ui::mvi::{LoadState, Reducer};

pub struct HomeReducer;

impl Reducer for HomeReducer {
    type State = HomeState;
    type Intent = HomeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HomeIntent::Fetch => HomeState {
                load: LoadState::Loading,
                generation: state.generation + 1,
                ..state
            },

            HomeIntent::Loaded { generation, .. } if generation != state.generation => state,
            HomeIntent::Loaded { movies, .. } => match state.load {
                LoadState::Error => state,
                LoadState::Loading | LoadState::Ready => HomeState {
                    load: LoadState::Ready,
                    selected: state.selected.min(movies.len().saturating_sub(1)),
                    movies: Some(movies),
                    ..state
                },
            },

            HomeIntent::Failed { generation } if generation != state.generation => state,
            HomeIntent::Failed { .. } => match state.load {
                LoadState::Loading => HomeState {
                    load: LoadState::Error,
                    ..state
                },
                LoadState::Ready | LoadState::Error => state,
            },

            HomeIntent::MoveSelection(delta) => {
                let len = state.movies.as_ref().map_or(0, |movies| movies.len());
                if len == 0 {
                    return state;
                }
                HomeState {
                    selected: state.selected.saturating_add_signed(delta).min(len - 1),
                    ..state
                }
            }
        }
    }
}
