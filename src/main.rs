// calctty: terminal calculator with history and memory

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use calctty::calculator::Calculator;
use calctty::config::settings::{default_settings_path, Settings, ThemePreference};
use calctty::config::Config;
use calctty::history::HistoryLog;
use calctty::logging;
use calctty::ui::App;

#[derive(Debug, Parser)]
#[command(name = "calctty", version, about = "Terminal calculator with history and memory")]
struct Cli {
    /// Configuration file (default: <config dir>/calctty/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// History file, overriding the configured one
    #[arg(long)]
    history_file: Option<PathBuf>,

    /// Theme for this session, overriding the saved setting
    #[arg(long, value_enum)]
    theme: Option<ThemePreference>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Logging is optional; the calculator runs without it
    let _log_guard = match logging::init(&config.logging) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    };
    info!(max_digits = config.display.max_digits, "starting calctty");

    let history_file = cli.history_file.unwrap_or(config.history.file);
    let mut history = HistoryLog::with_max_size(config.history.max_size);
    if let Err(e) = history.load_from_file(&history_file) {
        warn!(error = %e, "starting with empty history");
    }

    let settings_path = default_settings_path();
    let mut settings = Settings::load(&settings_path);
    let preference = cli.theme.unwrap_or_else(|| settings.theme());

    let calculator = Calculator::with_history(history, config.display.max_digits);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(calculator, preference);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = app.calculator.history().save_to_file(&history_file) {
        warn!(error = %e, "history not saved");
        eprintln!("Warning: {}", e);
    }

    settings.set_theme(app.theme_preference);
    if let Err(e) = settings.save(&settings_path) {
        warn!(error = %e, "settings not saved");
    }

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    info!("exiting");
    Ok(())
}
