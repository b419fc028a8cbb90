use crate::api::MovieSource;
use crate::app::{App, SearchEvent};
use crate::config::TOKEN_ENV;
use crate::query::{Begin, QueryKey};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::action_queue::{Action, ActionTx};

pub(super) fn enqueue_fetches(keys: Vec<QueryKey>, action_tx: &ActionTx) {
    for key in keys {
        let _ = action_tx.send(Action::Fetch(key));
    }
}

pub(super) fn run_action(
    action: Action,
    app: &mut App,
    source: &Arc<dyn MovieSource>,
    action_tx: &ActionTx,
) {
    match action {
        Action::Fetch(key) => start_fetch(key, app, source, action_tx),
        Action::FetchCompleted { key, result } => {
            app.query.resolve(&key, &result, Instant::now());
            let event = match result {
                Ok(response) => {
                    info!(
                        query = %key.query,
                        page = key.page,
                        results = response.results.len(),
                        "search completed"
                    );
                    SearchEvent::FetchSucceeded { key, response }
                }
                Err(e) => {
                    warn!(query = %key.query, page = key.page, error = %e, "search failed");
                    if e.is_unauthorized() {
                        warn!("TMDB rejected the bearer token, check {}", TOKEN_ENV);
                    }
                    SearchEvent::FetchFailed { key }
                }
            };
            let fetches = app.dispatch(event);
            enqueue_fetches(fetches, action_tx);
        }
    }
}

fn start_fetch(key: QueryKey, app: &mut App, source: &Arc<dyn MovieSource>, action_tx: &ActionTx) {
    match app.query.begin(&key, Instant::now()) {
        Begin::Disabled => {}
        Begin::InFlight => {
            debug!(query = %key.query, page = key.page, "already in flight");
        }
        Begin::Hit(response) => {
            debug!(query = %key.query, page = key.page, "served from cache");
            let fetches = app.dispatch(SearchEvent::FetchSucceeded { key, response });
            enqueue_fetches(fetches, action_tx);
        }
        Begin::Miss => {
            let source = Arc::clone(source);
            let action_tx = action_tx.clone();
            tokio::spawn(async move {
                let result = source.search(&key.query, key.page).await;
                let _ = action_tx.send(Action::FetchCompleted { key, result });
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockSource;
    use crate::app::{SearchStatus, TextInput};
    use crate::config::MoviesConfig;

    use super::super::action_queue::{channel, ActionRx};

    struct Harness {
        app: App,
        source: MockSource,
        dyn_source: Arc<dyn MovieSource>,
        tx: ActionTx,
        rx: ActionRx,
    }

    impl Harness {
        fn new(source: MockSource) -> Self {
            let (tx, rx) = channel();
            Self {
                app: App::new(&MoviesConfig::default()),
                dyn_source: Arc::new(source.clone()),
                source,
                tx,
                rx,
            }
        }

        fn submit(&mut self, text: &str) {
            self.app.search_input = TextInput::from_str(text);
            let fetches = self.app.submit_search();
            enqueue_fetches(fetches, &self.tx);
        }

        /// Run queued actions until a fetch completion has been applied.
        async fn settle(&mut self) {
            while let Some(action) = self.rx.recv().await {
                let completed = matches!(action, Action::FetchCompleted { .. });
                run_action(action, &mut self.app, &self.dyn_source, &self.tx);
                if completed || !self.app.search.is_loading() {
                    break;
                }
            }
        }

        fn toast_messages(&self) -> Vec<String> {
            self.app
                .toasts
                .iter()
                .map(|t| t.notification.message.clone())
                .collect()
        }
    }

    fn source() -> MockSource {
        MockSource::new()
            .with_movies("batman", &["Batman", "Batman Begins"], 2)
            .failing("broken", 503)
    }

    #[tokio::test]
    async fn batman_fills_grid_without_toast() {
        let mut h = Harness::new(source());
        h.submit("batman");
        assert_eq!(h.app.search.status, SearchStatus::Loading);

        h.settle().await;
        assert_eq!(h.app.search.status, SearchStatus::Success);
        assert_eq!(h.app.search.movies.len(), 2);
        assert!(h.toast_messages().is_empty());
    }

    #[tokio::test]
    async fn unknown_title_shows_no_results_toast() {
        let mut h = Harness::new(source());
        h.submit("zzzxnotreal");
        h.settle().await;

        assert_eq!(h.app.search.status, SearchStatus::Success);
        assert!(h.app.search.movies.is_empty());
        assert_eq!(
            h.toast_messages(),
            vec!["No movies found for your request.".to_string()]
        );
    }

    #[tokio::test]
    async fn failed_fetch_shows_inline_error_and_toast() {
        let mut h = Harness::new(source());
        h.submit("broken");
        h.settle().await;

        assert_eq!(h.app.search.status, SearchStatus::Error);
        assert_eq!(
            h.app.search.error.as_deref(),
            Some("Failed to fetch movies.")
        );
        assert!(h.app.search.movies.is_empty());
        assert_eq!(h.toast_messages(), vec!["Failed to fetch movies.".to_string()]);
        assert!(h.app.snapshot().is_some_and(|s| s.error.is_some()));
    }

    #[tokio::test]
    async fn blank_submit_never_reaches_the_source() {
        let mut h = Harness::new(source());
        h.submit("   ");

        assert!(h.rx.try_recv().is_err());
        assert_eq!(h.app.search.status, SearchStatus::Idle);
        assert_eq!(h.source.call_count(), 0);
        assert_eq!(
            h.toast_messages(),
            vec!["Please enter your search query.".to_string()]
        );
    }

    #[tokio::test]
    async fn repeated_query_is_served_from_cache() {
        let mut h = Harness::new(source());
        h.submit("batman");
        h.settle().await;
        h.submit("batman");
        h.settle().await;

        assert_eq!(h.app.search.status, SearchStatus::Success);
        assert_eq!(h.app.search.movies.len(), 2);
        assert_eq!(h.source.call_count(), 1);
    }

    #[tokio::test]
    async fn next_page_loads_with_placeholder() {
        let mut h = Harness::new(source());
        h.submit("batman");
        h.settle().await;

        let fetches = h.app.dispatch(SearchEvent::NextPage);
        enqueue_fetches(fetches, &h.tx);
        let action = h.rx.recv().await.unwrap();
        run_action(action, &mut h.app, &h.dyn_source, &h.tx);

        let snapshot = h.app.snapshot().unwrap();
        assert!(snapshot.is_loading);
        assert!(snapshot.is_placeholder);
        assert_eq!(h.app.search.movies[0].title, "Batman (p1)");

        h.settle().await;
        assert_eq!(h.app.search.page, 2);
        assert_eq!(h.app.search.movies[0].title, "Batman (p2)");
    }

    #[tokio::test]
    async fn duplicate_fetch_for_same_key_is_dropped() {
        let mut h = Harness::new(source());
        h.submit("batman");
        let key = QueryKey::new("batman", 1);
        let _ = h.tx.send(Action::Fetch(key));

        h.settle().await;
        while let Ok(action) = h.rx.try_recv() {
            run_action(action, &mut h.app, &h.dyn_source, &h.tx);
        }
        assert_eq!(h.source.call_count(), 1);
    }
}
