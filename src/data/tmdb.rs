//! HTTP repository against the TMDB v3 API.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::config::RepositoryConfig;
use crate::data::models::{Movie, MovieDetailResponse, Page};
use crate::data::repository::{FetchState, MovieRepository};
use crate::data::RepositoryError;
use crate::stream::Observable;

#[derive(Clone)]
pub struct TmdbRepository {
    client: Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl TmdbRepository {
    pub fn new(config: &RepositoryConfig) -> Result<Self, RepositoryError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| RepositoryError::Config("TMDB api_key is not set".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .build()
            .map_err(|err| RepositoryError::Config(err.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            language: config.language.clone(),
        })
    }

    fn list_url(&self, category: &str) -> Result<Url, RepositoryError> {
        self.url(&format!("movie/{}", category), &[])
    }

    fn detail_url(&self, id: i64) -> Result<Url, RepositoryError> {
        self.url(
            &format!("movie/{}", id),
            &[("append_to_response", "credits,recommendations")],
        )
    }

    fn url(&self, path: &str, extra: &[(&str, &str)]) -> Result<Url, RepositoryError> {
        let raw = format!("{}/{}", self.base_url, path);
        let mut params = vec![
            ("api_key", self.api_key.as_str()),
            ("language", self.language.as_str()),
        ];
        params.extend_from_slice(extra);
        Url::parse_with_params(&raw, &params).map_err(|err| RepositoryError::Request {
            url: raw,
            message: err.to_string(),
        })
    }
}

/// URL with the query string stripped, so the api key never reaches logs.
fn redacted(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}

async fn get_json<T: DeserializeOwned>(client: &Client, url: Url) -> Result<T, RepositoryError> {
    let shown = redacted(&url);
    tracing::debug!(url = %shown, "GET");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|err| RepositoryError::Request {
            url: shown.clone(),
            message: err.without_url().to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(RepositoryError::Status {
            url: shown,
            status: status.as_u16(),
        });
    }

    response.json::<T>().await.map_err(|err| RepositoryError::Decode {
        url: shown,
        message: err.without_url().to_string(),
    })
}

impl MovieRepository for TmdbRepository {
    fn fetch_list(&self, category: &str) -> Observable<Vec<Movie>> {
        let url = match self.list_url(category) {
            Ok(url) => url,
            Err(err) => return Observable::fail(err),
        };
        let client = self.client.clone();
        Observable::create(move |emitter| async move {
            match get_json::<Page<Movie>>(&client, url).await {
                Ok(page) => {
                    emitter.emit(page.results);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Movie list request failed");
                    emitter.fail(err);
                }
            }
        })
    }

    fn fetch_detail(&self, id: i64) -> Observable<FetchState<MovieDetailResponse>> {
        let url = self.detail_url(id);
        let client = self.client.clone();
        Observable::create(move |emitter| async move {
            if !emitter.emit(FetchState::Loading) {
                return;
            }
            let result = match url {
                Ok(url) => get_json::<MovieDetailResponse>(&client, url).await,
                Err(err) => Err(err),
            };
            let state = match result {
                Ok(detail) => FetchState::Success(detail),
                Err(err) => {
                    tracing::warn!(movie_id = id, error = %err, "Movie detail request failed");
                    FetchState::Error(err)
                }
            };
            emitter.emit(state);
        })
    }
}
