use crate::config::MoviesConfig;
use crate::query::{MovieQuery, QuerySnapshot};
use std::time::{Duration, Instant};
use tracing::debug;

mod search;
mod state;
mod toasts;
pub use search::{Effect, NotificationKind, SearchEvent, SearchState, SearchStatus};
pub use state::{Focus, TextInput};
pub use toasts::ToastQueue;

use crate::query::QueryKey;

pub struct App {
    pub running: bool,

    // View controller state, only changed through `dispatch`
    pub search: SearchState,
    pub query: MovieQuery,

    // Search box
    pub search_input: TextInput,
    pub focus: Focus,

    // Grid navigation
    pub grid_index: usize,
    pub grid_columns: usize, // Last-rendered column count (updated by renderer each frame)

    pub toasts: ToastQueue,
    pub throbber_state: throbber_widgets_tui::ThrobberState,
}

impl App {
    pub fn new(cfg: &MoviesConfig) -> Self {
        Self {
            running: true,
            search: SearchState::new(),
            query: MovieQuery::new(Duration::from_secs(cfg.cache_ttl_secs)),
            search_input: TextInput::new(),
            focus: Focus::SearchBox,
            grid_index: 0,
            grid_columns: 1,
            toasts: ToastQueue::new(
                Duration::from_secs(cfg.toast_secs),
                Duration::from_secs(cfg.error_toast_secs),
            ),
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Run one event through the reducer. Notifications are shown right away;
    /// the returned keys still need fetching.
    pub fn dispatch(&mut self, event: SearchEvent) -> Vec<QueryKey> {
        let previous_len = self.search.movies.len();
        let effects = self.search.reduce(event);

        let mut fetches = Vec::new();
        let now = Instant::now();
        for effect in effects {
            match effect {
                Effect::Notify(notification) => {
                    debug!(message = %notification.message, "notify");
                    self.toasts.push(notification, now);
                }
                Effect::Fetch(key) => fetches.push(key),
            }
        }

        if self.search.movies.len() != previous_len || self.grid_index >= self.search.movies.len()
        {
            self.grid_index = 0;
        }
        if self.search.movies.is_empty() && self.focus == Focus::Grid {
            self.focus = Focus::SearchBox;
        }
        fetches
    }

    pub fn submit_search(&mut self) -> Vec<QueryKey> {
        let text = self.search_input.value.clone();
        let fetches = self.dispatch(SearchEvent::Submit(text));
        if !fetches.is_empty() {
            self.search_input = TextInput::from_str(&self.search.query);
        }
        fetches
    }

    pub fn open_focused_movie(&mut self) {
        self.dispatch(SearchEvent::Select(self.grid_index));
    }

    pub fn close_modal(&mut self) {
        self.dispatch(SearchEvent::CloseModal);
    }

    pub fn is_modal_open(&self) -> bool {
        self.search.selected.is_some()
    }

    /// Cache view of the current key, used for placeholder rendering.
    pub fn snapshot(&self) -> Option<QuerySnapshot<'_>> {
        self.search.current_key().map(|key| self.query.observe(&key))
    }

    pub fn focus_grid(&mut self) {
        if !self.search.movies.is_empty() {
            self.focus = Focus::Grid;
        }
    }

    pub fn focus_search(&mut self) {
        self.focus = Focus::SearchBox;
    }

    /// Move the grid cursor by whole cells. Vertical moves keep the column.
    pub fn move_grid(&mut self, dx: isize, dy: isize) {
        let len = self.search.movies.len();
        if len == 0 {
            return;
        }
        let columns = self.grid_columns.max(1) as isize;
        let target = self.grid_index as isize + dx + dy * columns;

        if dy < 0 && target < 0 {
            // Moving up from the first row hands focus back to the search box.
            self.focus = Focus::SearchBox;
            return;
        }
        self.grid_index = target.clamp(0, len as isize - 1) as usize;
    }

    /// True while the current key has a request in flight.
    pub fn is_fetching(&self) -> bool {
        self.snapshot().is_some_and(|s| s.is_loading)
    }

    pub fn tick(&mut self, now: Instant) {
        self.toasts.prune(now);
        if self.is_fetching() {
            self.throbber_state.calc_next();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::search::EMPTY_QUERY_MESSAGE;
    use super::*;
    use crate::api::mock::page_of;

    fn test_app() -> App {
        App::new(&MoviesConfig::default())
    }

    fn app_with_results(count: usize) -> App {
        let mut app = test_app();
        app.search_input = TextInput::from_str("batman");
        let keys = app.submit_search();
        let titles: Vec<String> = (0..count).map(|i| format!("Batman {i}")).collect();
        let titles: Vec<&str> = titles.iter().map(String::as_str).collect();
        app.dispatch(SearchEvent::FetchSucceeded {
            key: keys[0].clone(),
            response: page_of(&titles, 1, 1),
        });
        app
    }

    #[test]
    fn blank_submit_shows_validation_toast_only() {
        let mut app = test_app();
        app.search_input = TextInput::from_str("   ");

        assert!(app.submit_search().is_empty());
        let messages: Vec<_> = app
            .toasts
            .iter()
            .map(|t| t.notification.message.clone())
            .collect();
        assert_eq!(messages, vec![EMPTY_QUERY_MESSAGE.to_string()]);
        assert_eq!(app.search.status, SearchStatus::Idle);
        assert_eq!(app.search_input.value, "   ");
    }

    #[test]
    fn submit_normalizes_input() {
        let mut app = test_app();
        app.search_input = TextInput::from_str("  batman  ");

        let keys = app.submit_search();
        assert_eq!(keys, vec![QueryKey::new("batman", 1)]);
        assert_eq!(app.search_input.value, "batman");
    }

    #[test]
    fn grid_navigation_wraps_rows_and_clamps() {
        let mut app = app_with_results(7);
        app.grid_columns = 3;
        app.focus_grid();

        app.move_grid(0, 1);
        assert_eq!(app.grid_index, 3);
        app.move_grid(1, 0);
        assert_eq!(app.grid_index, 4);
        app.move_grid(0, 1);
        assert_eq!(app.grid_index, 6);
        app.move_grid(1, 0);
        assert_eq!(app.grid_index, 6);
    }

    #[test]
    fn moving_up_from_first_row_focuses_search() {
        let mut app = app_with_results(4);
        app.grid_columns = 2;
        app.focus_grid();
        app.move_grid(1, 0);

        app.move_grid(0, -1);
        assert_eq!(app.focus, Focus::SearchBox);
        assert_eq!(app.grid_index, 1);
    }

    #[test]
    fn open_and_close_focused_movie() {
        let mut app = app_with_results(3);
        app.grid_index = 2;
        app.open_focused_movie();
        assert_eq!(
            app.search.selected.as_ref().map(|m| m.title.as_str()),
            Some("Batman 2")
        );
        assert!(app.is_modal_open());

        app.close_modal();
        assert!(!app.is_modal_open());
    }

    #[test]
    fn grid_focus_requires_results() {
        let mut app = test_app();
        app.focus_grid();
        assert_eq!(app.focus, Focus::SearchBox);
    }

    #[test]
    fn snapshot_follows_current_key() {
        let mut app = test_app();
        assert!(app.snapshot().is_none());

        app.search_input = TextInput::from_str("batman");
        let keys = app.submit_search();
        app.query.begin(&keys[0], Instant::now());
        assert!(app.snapshot().is_some_and(|s| s.is_loading));
        assert!(app.is_fetching());
    }
}
