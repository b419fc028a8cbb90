//! Search view state and its reducer.
//!
//! `SearchState::reduce` is a pure transition: it never touches the network or
//! the clock. Side effects come back as [`Effect`]s for the runtime to carry out.

use tmdb::{Movie, MovieSearchResponse};

use crate::query::QueryKey;

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter your search query.";
pub const NO_RESULTS_MESSAGE: &str = "No movies found for your request.";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch movies.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// A transient message shown as a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    Submit(String),
    NextPage,
    PrevPage,
    FetchSucceeded {
        key: QueryKey,
        response: MovieSearchResponse,
    },
    /// The failure itself is kept by the query cache for that key.
    FetchFailed {
        key: QueryKey,
    },
    /// Select the movie at this grid index.
    Select(usize),
    CloseModal,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Fetch(QueryKey),
    Notify(Notification),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u64,
    pub status: SearchStatus,
    pub movies: Vec<Movie>,
    pub error: Option<String>,
    pub selected: Option<Movie>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            total_pages: 0,
            total_results: 0,
            status: SearchStatus::Idle,
            movies: Vec::new(),
            error: None,
            selected: None,
        }
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key of the request the view currently cares about.
    pub fn current_key(&self) -> Option<QueryKey> {
        if self.query.is_empty() {
            None
        } else {
            Some(QueryKey::new(self.query.clone(), self.page))
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }

    pub fn has_next_page(&self) -> bool {
        self.status == SearchStatus::Success && self.page < self.total_pages
    }

    pub fn has_prev_page(&self) -> bool {
        self.status == SearchStatus::Success && self.page > 1
    }

    pub fn reduce(&mut self, event: SearchEvent) -> Vec<Effect> {
        match event {
            SearchEvent::Submit(text) => self.submit(&text),
            SearchEvent::NextPage => {
                if self.has_next_page() {
                    self.go_to_page(self.page + 1)
                } else {
                    vec![]
                }
            }
            SearchEvent::PrevPage => {
                if self.has_prev_page() {
                    self.go_to_page(self.page - 1)
                } else {
                    vec![]
                }
            }
            SearchEvent::FetchSucceeded { key, response } => {
                if !self.is_awaiting(&key) {
                    return vec![];
                }
                self.movies = response.results;
                self.total_pages = response.total_pages;
                self.total_results = response.total_results;
                self.selected = None;
                self.status = SearchStatus::Success;
                if self.movies.is_empty() {
                    vec![Effect::Notify(Notification::info(NO_RESULTS_MESSAGE))]
                } else {
                    vec![]
                }
            }
            SearchEvent::FetchFailed { key } => {
                if !self.is_awaiting(&key) {
                    return vec![];
                }
                self.movies.clear();
                self.selected = None;
                self.error = Some(FETCH_FAILED_MESSAGE.to_string());
                self.status = SearchStatus::Error;
                vec![Effect::Notify(Notification::error(FETCH_FAILED_MESSAGE))]
            }
            SearchEvent::Select(index) => {
                if let Some(movie) = self.movies.get(index) {
                    self.selected = Some(movie.clone());
                }
                vec![]
            }
            SearchEvent::CloseModal => {
                self.selected = None;
                vec![]
            }
        }
    }

    fn submit(&mut self, text: &str) -> Vec<Effect> {
        let query = text.trim();
        if query.is_empty() {
            return vec![Effect::Notify(Notification::info(EMPTY_QUERY_MESSAGE))];
        }

        self.query = query.to_string();
        self.page = 1;
        self.total_pages = 0;
        self.total_results = 0;
        self.movies.clear();
        self.error = None;
        self.selected = None;
        self.status = SearchStatus::Loading;
        vec![Effect::Fetch(QueryKey::new(self.query.clone(), 1))]
    }

    /// Keeps the current list visible while the new page loads.
    fn go_to_page(&mut self, page: u32) -> Vec<Effect> {
        self.page = page;
        self.selected = None;
        self.status = SearchStatus::Loading;
        vec![Effect::Fetch(QueryKey::new(self.query.clone(), page))]
    }

    /// Completions for any other key are stale and must not touch the view.
    fn is_awaiting(&self, key: &QueryKey) -> bool {
        self.is_loading() && self.current_key().as_ref() == Some(key)
    }
}
