use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "movies-tui")]
#[command(about = "Terminal UI for searching movies on TMDB")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the search UI (default)
    Run {
        /// Search for this title on startup
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Print config path and create default file if missing
    ConfigPath,
}

impl Cli {
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Run { query: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_runs_the_ui() {
        let cli = Cli::parse_from(["movies-tui"]);
        assert!(matches!(cli.into_command(), Commands::Run { query: None }));
    }

    #[test]
    fn run_accepts_an_initial_query() {
        let cli = Cli::parse_from(["movies-tui", "run", "--query", "batman"]);
        match cli.into_command() {
            Commands::Run { query } => assert_eq!(query.as_deref(), Some("batman")),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn config_path_subcommand_parses() {
        let cli = Cli::parse_from(["movies-tui", "config-path"]);
        assert!(matches!(cli.into_command(), Commands::ConfigPath));
    }
}
