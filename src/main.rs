use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use stopchat::app::App;
use stopchat::backend::BackendClient;
use stopchat::config::{self, ConfigResult};
use stopchat::logging;
use stopchat::session::SessionContext;

/// How long to wait for input before polling the workers again
const TICK: Duration = Duration::from_millis(100);

/// Chat with a public transport assistant and look up stop names
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Backend base URL (overrides `[server] base_url`)
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Config file to read instead of ~/.config/stopchat/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Append logs to this file (RUST_LOG sets the level)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logging::init_file_logger(path)?;
    }

    let ConfigResult {
        mut config,
        warning,
    } = match &cli.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };
    if let Some(url) = cli.url {
        config.server.base_url = url;
    }

    // Fail before touching the terminal if the URL is unusable
    let client = BackendClient::from_config(&config.server)?;
    log::info!("Using backend at {}", client.base_url());

    let mut app = App::new(&config, SessionContext::new());
    app.connect(client)?;
    if let Some(warning) = warning {
        log::warn!("{}", warning);
        app.set_status(warning);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let mut terminal = ratatui::init();
    let result = execute!(std::io::stdout(), EnableMouseCapture)
        .map_err(Into::into)
        .and_then(|_| run(&mut terminal, app));

    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(TICK)? {
            app.handle_event(event::read()?);
        }

        app.poll_workers(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
