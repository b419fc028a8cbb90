mod api;
mod app;
mod cli;
mod config;
mod logging;
mod query;
mod runtime;
mod ui;

use anyhow::{Context, Result};
use api::MovieSource;
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::MoviesConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tmdb::TmdbClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Allow TMDB_TOKEN to come from a local .env
    dotenvy::dotenv().ok();

    match Cli::parse().into_command() {
        Commands::ConfigPath => print_config_path(),
        Commands::Run { query } => run(query).await,
    }
}

fn print_config_path() -> Result<()> {
    let path = MoviesConfig::config_path()?;
    if !path.exists() {
        MoviesConfig::default().save()?;
        println!("Created default config at {}", path.display());
    }
    println!("{}", path.display());
    Ok(())
}

async fn run(initial_query: Option<String>) -> Result<()> {
    let cfg = MoviesConfig::load()?;

    let log_dir = match &cfg.log_dir {
        Some(dir) => dir.clone(),
        None => MoviesConfig::default_log_dir()?,
    };
    let log_path = logging::init_logging(&log_dir)?;

    let token = cfg.resolve_token()?;
    let client = TmdbClient::new(cfg.tmdb_config(token)).context("Failed to build TMDB client")?;
    let source: Arc<dyn MovieSource> = Arc::new(client);
    tracing::info!(api_url = %cfg.api_url, "starting movies-tui");

    let mut app = App::new(&cfg);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, source, initial_query).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "movies-tui exited with an error");
        eprintln!("Error: {:?}", err);
        eprintln!("Logs: {}", log_path.display());
    }

    Ok(())
}
