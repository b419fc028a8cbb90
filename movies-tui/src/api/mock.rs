//! In-memory movie source for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tmdb::{Movie, MovieSearchResponse, TmdbError};

use super::MovieSource;

#[derive(Debug, Clone)]
enum Reply {
    Results {
        movies: Vec<Movie>,
        total_pages: u32,
    },
    Fail {
        status: u16,
    },
}

/// Mock source answering from a fixed table of queries.
///
/// Unknown queries resolve to an empty page.
#[derive(Clone, Default)]
pub struct MockSource {
    replies: Arc<HashMap<String, Reply>>,
    call_count: Arc<AtomicUsize>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movies(mut self, query: &str, titles: &[&str], total_pages: u32) -> Self {
        let movies = titles
            .iter()
            .enumerate()
            .map(|(i, title)| movie(i as i64 + 1, title))
            .collect();
        Arc::make_mut(&mut self.replies).insert(
            query.to_string(),
            Reply::Results {
                movies,
                total_pages,
            },
        );
        self
    }

    pub fn failing(mut self, query: &str, status: u16) -> Self {
        Arc::make_mut(&mut self.replies).insert(query.to_string(), Reply::Fail { status });
        self
    }

    /// Number of times `search` was called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MovieSource for MockSource {
    async fn search(&self, query: &str, page: u32) -> tmdb::Result<MovieSearchResponse> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        match self.replies.get(query) {
            Some(Reply::Fail { status }) => Err(TmdbError::Api {
                status: *status,
                message: "mock failure".to_string(),
            }),
            Some(Reply::Results {
                movies,
                total_pages,
            }) => Ok(MovieSearchResponse {
                page,
                results: movies
                    .iter()
                    .map(|m| Movie {
                        title: format!("{} (p{})", m.title, page),
                        ..m.clone()
                    })
                    .collect(),
                total_pages: *total_pages,
                total_results: movies.len() as u64 * *total_pages as u64,
            }),
            None => Ok(MovieSearchResponse {
                page,
                results: vec![],
                total_pages: 0,
                total_results: 0,
            }),
        }
    }
}

pub fn movie(id: i64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        original_title: None,
        overview: Some(format!("Overview of {}", title)),
        poster_path: Some(format!("/poster-{}.jpg", id)),
        backdrop_path: None,
        release_date: Some("2005-06-10".to_string()),
        vote_average: 7.5,
        vote_count: 100,
    }
}

pub fn page_of(titles: &[&str], page: u32, total_pages: u32) -> MovieSearchResponse {
    MovieSearchResponse {
        page,
        results: titles
            .iter()
            .enumerate()
            .map(|(i, t)| movie(i as i64 + 1, t))
            .collect(),
        total_pages,
        total_results: titles.len() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn answers_configured_queries_and_counts_calls() {
        let source = MockSource::new()
            .with_movies("batman", &["Batman", "Batman Begins"], 2)
            .failing("broken", 500);

        let page = source.search("batman", 2).await.unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].title, "Batman (p2)");

        let err = source.search("broken", 1).await.unwrap_err();
        assert_eq!(err.status(), Some(500));

        assert!(source.search("nothing", 1).await.unwrap().is_empty());
        assert_eq!(source.call_count(), 3);
    }
}
