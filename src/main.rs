use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::game::WinCheck;
use connect_four::logging;
use connect_four::ui::{headless, App};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Replay comma-separated columns without the TUI (e.g. 3,4,3,4)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    moves: Option<Vec<i64>>,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Only check lines through the last piece for a win
    #[arg(long)]
    anchored: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // The interactive UI only knows where to log once the config is loaded,
    // so config warnings go to stderr through a temporary subscriber.
    let headless = cli.moves.is_some();
    let loaded = if headless {
        logging::init_stderr()?;
        AppConfig::load_or_default(&cli.config)
    } else {
        logging::load_config_logging_to(&cli.config, logging::env_filter(), io::stderr)
    };
    let mut app_config =
        loaded.with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(width) = cli.width {
        app_config.game.width = width;
    }
    if let Some(height) = cli.height {
        app_config.game.height = height;
    }
    if cli.anchored {
        app_config.game.win_check = WinCheck::Anchored;
    }
    app_config.validate().context("invalid command-line overrides")?;

    if let Some(moves) = cli.moves {
        let mut stdout = io::stdout().lock();
        headless::run_moves(&app_config.game, &moves, &mut stdout)?;
        return Ok(());
    }

    if let Some(log_file) = &app_config.ui.log_file {
        logging::init_file(log_file)?;
    }
    run_tui(&app_config).context("terminal UI failed")
}

fn run_tui(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
