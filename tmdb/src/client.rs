use reqwest::{header, Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::config::TmdbConfig;
use crate::error::TmdbError;
use crate::models::{ApiErrorBody, MovieSearchResponse};

const SEARCH_MOVIE_PATH: &str = "search/movie";

#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    config: TmdbConfig,
}

impl TmdbClient {
    pub fn new(config: TmdbConfig) -> crate::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, config))
    }

    /// Create a TmdbClient with an existing reqwest Client.
    pub fn with_client(client: Client, config: TmdbConfig) -> Self {
        Self { client, config }
    }

    fn url(&self, path: &str) -> crate::Result<Url> {
        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{}/{}", base, path))?)
    }

    /// Search movies by title. `page` defaults to 1.
    ///
    /// Issues exactly one request; failures are returned as-is without retrying.
    #[instrument(skip(self), fields(status))]
    pub async fn search_movies(
        &self,
        query: &str,
        page: Option<u32>,
    ) -> crate::Result<MovieSearchResponse> {
        if query.trim().is_empty() {
            return Err(TmdbError::EmptyQuery);
        }
        let page = page.unwrap_or(1).max(1).to_string();

        let mut params: Vec<(&str, &str)> = vec![("query", query), ("page", page.as_str())];
        if let Some(language) = self.config.language.as_deref() {
            params.push(("language", language));
        }
        params.push((
            "include_adult",
            if self.config.include_adult {
                "true"
            } else {
                "false"
            },
        ));

        let response = self
            .client
            .get(self.url(SEARCH_MOVIE_PATH)?)
            .query(&params)
            .header(header::AUTHORIZATION, self.config.token.as_header_value())
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        tracing::Span::current().record("status", response.status().as_u16());
        let envelope: MovieSearchResponse = self.handle_response(response).await?;
        debug!(
            results = envelope.results.len(),
            total_pages = envelope.total_pages,
            "search/movie resolved"
        );
        Ok(envelope)
    }

    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> crate::Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.status_message)
                .unwrap_or(body);
            warn!(status = status.as_u16(), "TMDB request failed");
            return Err(TmdbError::Api {
                status: status.as_u16(),
                message,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| TmdbError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}
