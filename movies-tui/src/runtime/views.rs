use crate::app::{App, Focus, SearchEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action_queue::ActionTx;
use super::actions::enqueue_fetches;

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.is_modal_open() {
        handle_modal_key(key, app);
        return;
    }

    match app.focus {
        Focus::SearchBox => handle_search_key(key, app, action_tx),
        Focus::Grid => handle_grid_key(key, app, action_tx),
    }
}

fn handle_modal_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.close_modal()
        }
        _ => {}
    }
}

fn handle_search_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input.clear();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input.insert(c);
        }
        KeyCode::Backspace => app.search_input.backspace(),
        KeyCode::Left => app.search_input.move_left(),
        KeyCode::Right => app.search_input.move_right(),
        KeyCode::Home => app.search_input.home(),
        KeyCode::End => app.search_input.end(),
        KeyCode::Enter => {
            let fetches = app.submit_search();
            enqueue_fetches(fetches, action_tx);
        }
        KeyCode::Tab | KeyCode::Down => app.focus_grid(),
        KeyCode::Esc => app.quit(),
        _ => {}
    }
}

fn handle_grid_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.move_grid(-1, 0),
        KeyCode::Right | KeyCode::Char('l') => app.move_grid(1, 0),
        KeyCode::Up | KeyCode::Char('k') => app.move_grid(0, -1),
        KeyCode::Down | KeyCode::Char('j') => app.move_grid(0, 1),
        KeyCode::Enter => app.open_focused_movie(),
        KeyCode::Char(']') => {
            let fetches = app.dispatch(SearchEvent::NextPage);
            enqueue_fetches(fetches, action_tx);
        }
        KeyCode::Char('[') => {
            let fetches = app.dispatch(SearchEvent::PrevPage);
            enqueue_fetches(fetches, action_tx);
        }
        KeyCode::Char('/') | KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc => app.focus_search(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}
