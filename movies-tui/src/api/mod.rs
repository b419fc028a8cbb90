use async_trait::async_trait;
use tmdb::{MovieSearchResponse, TmdbClient};

#[cfg(test)]
pub mod mock;

/// Anything that can answer a movie search for one `(query, page)` pair.
///
/// The runtime only talks to this trait so tests can swap in [`mock::MockSource`].
#[async_trait]
pub trait MovieSource: Send + Sync {
    async fn search(&self, query: &str, page: u32) -> tmdb::Result<MovieSearchResponse>;
}

#[async_trait]
impl MovieSource for TmdbClient {
    async fn search(&self, query: &str, page: u32) -> tmdb::Result<MovieSearchResponse> {
        self.search_movies(query, Some(page)).await
    }
}
