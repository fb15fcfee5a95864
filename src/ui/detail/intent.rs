use std::sync::Arc;

use super::state::MovieDetailView;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// A fetch was triggered for `id`.
    Fetch { id: i64 },
    /// The subscription for `generation` delivered a payload.
    Loaded {
        generation: u64,
        view: Arc<MovieDetailView>,
    },
    /// The subscription for `generation` failed or ended empty.
    Failed { generation: u64 },
}

impl Intent for DetailIntent {}
