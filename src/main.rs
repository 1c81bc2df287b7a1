use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::LevelFilter;
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::AppConfig;
use connect_four::game::GameState;
use connect_four::logging::{self, LogTarget};
use connect_four::{headless, ui::App};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override board width (columns, 4 to 64)
    #[arg(long)]
    width: Option<usize>,

    /// Override board height (rows, 4 to 64)
    #[arg(long)]
    height: Option<usize>,

    /// Play these 0-based columns without the TUI and print outcome events
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    moves: Option<Vec<i64>>,

    /// Override log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<LevelFilter>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    config.validate().context("invalid board settings")?;

    let level = match cli.log_level {
        Some(level) => level,
        None => config.logging.level_filter()?,
    };
    let target = if cli.moves.is_some() {
        LogTarget::Console
    } else {
        LogTarget::Tui
    };
    logging::init(level, target).context("installing logger")?;

    match cli.moves {
        Some(moves) => {
            let state = GameState::new(config.board.width, config.board.height)?;
            let stdout = io::stdout();
            headless::run(state, &moves, &mut stdout.lock()).context("writing events")?;
            Ok(())
        }
        None => run_tui(&config).context("running terminal UI"),
    }
}

fn run_tui(config: &AppConfig) -> Result<()> {
    let mut app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Put the terminal back whether or not the app loop failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    Ok(res?)
}
