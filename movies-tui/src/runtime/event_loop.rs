use crate::api::MovieSource;
use crate::app::{App, TextInput};
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::action_queue::channel;
use super::actions::{enqueue_fetches, run_action};
use super::views::handle_view_key;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    source: Arc<dyn MovieSource>,
    initial_query: Option<String>,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();

    if let Some(query) = initial_query {
        app.search_input = TextInput::from_str(&query);
        let fetches = app.submit_search();
        enqueue_fetches(fetches, &action_tx);
    }

    loop {
        terminal.draw(|f| ui::render(f, app))?;
        app.tick(Instant::now());

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_view_key(key, app, &action_tx);
                }
            }
        }

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app, &source, &action_tx);
        }

        if !app.running {
            break;
        }

        // Let spawned fetches make progress between frames.
        tokio::task::yield_now().await;
    }

    Ok(())
}
