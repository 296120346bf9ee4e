mod api;
mod config;
mod error;
mod event;
mod ui;
mod wizard;

use std::io::stdout;
use std::panic;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use api::ApiClient;
use config::Config;
use error::{IswizError, Result};
use event::{Event, EventHandler};
use wizard::{WizardAction, WizardApp};

#[derive(Parser, Debug)]
#[command(name = "iswiz")]
#[command(author, version, about = "Create an Identity Server application from the terminal")]
struct Args {
    /// Path to config file (default: ~/.config/iswiz/config.toml)
    #[arg(long)]
    config: Option<String>,

    /// Run against a canned in-memory server instead of a real one
    #[arg(long)]
    demo: bool,

    /// Log file path (logging disabled if not specified)
    #[arg(long)]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging only if log file is specified
    if let Some(ref log_path) = args.log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .ok();

        if let Some(file) = file {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .with_ansi(false)
                .init();

            info!("Starting iswiz");
        }
    }

    let config = match args.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_default(),
    };

    let client = if args.demo {
        ApiClient::demo()
    } else {
        match ApiClient::new(&config) {
            Ok(client) => client,
            Err(e) => {
                error!("{}. Use --demo to try the wizard without a server.", e);
                return Err(e);
            }
        }
    };

    // Set up panic handler to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let mut terminal = setup_terminal()?;
    let mut app = WizardApp::new(Arc::new(client));

    let result = run(&mut terminal, &mut app).await;

    restore_terminal()?;

    // The terminal message lands on the plain screen after the TUI closes.
    if !app.final_output().is_empty() {
        println!("{}", app.final_output());
    }

    if let Err(ref e) = result {
        error!("Wizard error: {}", e);
    }

    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode().map_err(|e| IswizError::Terminal(e.to_string()))?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| IswizError::Terminal(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).map_err(|e| IswizError::Terminal(e.to_string()))?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().map_err(|e| IswizError::Terminal(e.to_string()))?;
    execute!(stdout(), LeaveAlternateScreen).map_err(|e| IswizError::Terminal(e.to_string()))?;
    Ok(())
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut WizardApp,
) -> Result<()> {
    let tick_rate = Duration::from_millis(120);
    let mut events = EventHandler::new(tick_rate);

    loop {
        terminal
            .draw(|frame| wizard::ui::draw(frame, app))
            .map_err(|e| IswizError::Terminal(e.to_string()))?;

        match events.next().await {
            Some(Event::Key(key)) => {
                if let Some(WizardAction::Quit) = app.handle_key(key) {
                    break;
                }
            }
            Some(Event::Resize(width, height)) => app.handle_resize(width, height),
            Some(Event::Tick) => app.tick(),
            None => break,
        }

        app.poll_submission();

        if app.should_exit {
            break;
        }
    }

    Ok(())
}
