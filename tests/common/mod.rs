//! Shared test utilities: a scripted repository and sample records.

#![allow(dead_code, unused_imports)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use moviedeck::data::{
    CastModel, Credits, FetchState, Genre, Movie, MovieDetailResponse, MovieRepository, Page,
    RepositoryError,
};
use moviedeck::stream::Observable;
use parking_lot::Mutex;
use tokio::sync::Notify;

/// How one `fetch_detail` call behaves.
pub enum DetailScript {
    /// Emit these states, then complete.
    Emit(Vec<FetchState<MovieDetailResponse>>),
    /// Fail the stream.
    Fail(RepositoryError),
    /// Never emit; `dropped` flips when the producer is torn down.
    Pending { dropped: Arc<AtomicBool> },
    /// Wait for `gate`, then emit a success.
    Gated {
        gate: Arc<Notify>,
        detail: MovieDetailResponse,
    },
}

/// How one `fetch_list` call behaves.
pub enum ListScript {
    Emit(Vec<Vec<Movie>>),
    Fail(RepositoryError),
}

/// Sets a flag when dropped.
struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

/// Repository that replays queued scripts, one per call. An exhausted queue
/// yields an empty stream.
#[derive(Default)]
pub struct ScriptedRepository {
    details: Mutex<VecDeque<DetailScript>>,
    lists: Mutex<VecDeque<ListScript>>,
    detail_requests: Mutex<Vec<i64>>,
    list_requests: Mutex<Vec<String>>,
}

impl ScriptedRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_detail(&self, script: DetailScript) {
        self.details.lock().push_back(script);
    }

    pub fn push_list(&self, script: ListScript) {
        self.lists.lock().push_back(script);
    }

    pub fn detail_requests(&self) -> Vec<i64> {
        self.detail_requests.lock().clone()
    }

    pub fn list_requests(&self) -> Vec<String> {
        self.list_requests.lock().clone()
    }
}

impl MovieRepository for ScriptedRepository {
    fn fetch_list(&self, category: &str) -> Observable<Vec<Movie>> {
        self.list_requests.lock().push(category.to_string());
        match self.lists.lock().pop_front() {
            Some(ListScript::Emit(lists)) => Observable::from_iter(lists),
            Some(ListScript::Fail(err)) => Observable::fail(err),
            None => Observable::empty(),
        }
    }

    fn fetch_detail(&self, id: i64) -> Observable<FetchState<MovieDetailResponse>> {
        self.detail_requests.lock().push(id);
        match self.details.lock().pop_front() {
            Some(DetailScript::Emit(states)) => Observable::from_iter(states),
            Some(DetailScript::Fail(err)) => Observable::fail(err),
            Some(DetailScript::Pending { dropped }) => Observable::create(move |emitter| async move {
                let _flag = DropFlag(dropped);
                let _emitter = emitter;
                std::future::pending::<()>().await;
            }),
            Some(DetailScript::Gated { gate, detail }) => {
                Observable::create(move |emitter| async move {
                    gate.notified().await;
                    emitter.emit(FetchState::Success(detail));
                })
            }
            None => Observable::empty(),
        }
    }
}

pub fn movie(id: i64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        original_title: None,
        overview: None,
        poster_path: None,
        backdrop_path: None,
        vote_average: 7.0,
        release_date: Some("1999-03-31".to_string()),
    }
}

pub fn cast(id: i64, name: &str) -> CastModel {
    CastModel {
        id,
        name: name.to_string(),
        original_name: name.to_string(),
        character: None,
        profile_path: None,
    }
}

/// Detail record with `cast_count` cast members and `recommendation_count`
/// recommendations.
pub fn detail(id: i64, title: &str, cast_count: i64, recommendation_count: i64) -> MovieDetailResponse {
    MovieDetailResponse {
        id,
        title: title.to_string(),
        original_title: Some(format!("{} (orig)", title)),
        overview: Some("A story about movies.".to_string()),
        genres: vec![Genre {
            id: 18,
            name: "Drama".to_string(),
        }],
        vote_average: 8.2,
        poster_path: Some("/poster.jpg".to_string()),
        backdrop_path: None,
        release_date: Some("1999-03-31".to_string()),
        runtime: Some(136),
        credits: Some(Credits {
            cast: (1..=cast_count)
                .map(|n| cast(n, &format!("Actor {}", n)))
                .collect(),
        }),
        recommendations: Some(Page {
            page: 1,
            results: (1..=recommendation_count)
                .map(|n| movie(1000 + n, &format!("Pick {}", n)))
                .collect(),
        }),
    }
}

/// Record with every optional field absent and no cast.
pub fn sparse_detail(id: i64) -> MovieDetailResponse {
    MovieDetailResponse {
        id,
        title: "Sample".to_string(),
        original_title: Some("Ejemplo".to_string()),
        overview: None,
        genres: Vec::new(),
        vote_average: 0.0,
        poster_path: None,
        backdrop_path: None,
        release_date: None,
        runtime: None,
        credits: Some(Credits { cast: Vec::new() }),
        recommendations: Some(Page {
            page: 1,
            results: vec![movie(7, "Other")],
        }),
    }
}

/// Await `future`, failing the test after two seconds.
pub async fn within<F: std::future::Future>(future: F) -> F::Output {
    tokio::time::timeout(Duration::from_secs(2), future)
        .await
        .expect("timed out")
}

/// Let spawned producers and subscribers run.
pub async fn let_tasks_run() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}
