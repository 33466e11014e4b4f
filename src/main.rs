use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs::OpenOptions,
    io,
    sync::Mutex,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

use shelftui::{
    api::BookClient,
    config::{get_config_path, Config},
    handlers,
    model::Model,
    services::{spawn_api_service, ApiRequest, ApiResponse},
    ui, utils,
};

/// Terminal client for a personal book-tracking server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp dir>/shelftui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (j/k, g/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Server base URL; overrides the config file and makes it optional
    #[arg(short, long)]
    url: Option<String>,
}

pub struct App {
    pub model: Model,

    api_tx: mpsc::UnboundedSender<ApiRequest>,
    api_rx: mpsc::UnboundedReceiver<ApiResponse>,
    base_url: String,
}

impl App {
    fn new(config: &Config) -> Result<Self> {
        let client = BookClient::from_config(config)?;
        let base_url = client.base_url().to_string();
        let (api_tx, api_rx) = spawn_api_service(client);

        Ok(Self {
            model: Model::new(config.vim_mode),
            api_tx,
            api_rx,
            base_url,
        })
    }

    /// Send requests returned by a handler to the background service
    fn dispatch(&self, requests: Vec<ApiRequest>) {
        for request in requests {
            tracing::debug!(?request, "dispatching");
            if self.api_tx.send(request).is_err() {
                tracing::warn!("API service is gone, request dropped");
            }
        }
    }
}

fn init_logging(debug: bool) -> Result<()> {
    let log_path = utils::get_debug_log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .init();

    Ok(())
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match (&args.url, &args.config) {
        (Some(url), None) => {
            // A config file is still honored when one sits at a default location
            match get_config_path(None) {
                Ok(path) => Config::load(&path)?,
                Err(_) => Config::with_base_url(url.clone()),
            }
        }
        _ => {
            let config_path = get_config_path(args.config.as_deref())?;
            tracing::debug!(path = %config_path.display(), "loading config");
            Config::load(&config_path)?
        }
    };

    // Override config with CLI flags
    if let Some(url) = &args.url {
        config.base_url = url.clone();
    }
    if args.vim {
        config.vim_mode = true;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    init_logging(args.debug)?;
    tracing::debug!("debug mode enabled");

    let config = load_config(&args)?;
    tracing::info!(base_url = %config.base_url, "starting");

    // Initialize app
    let mut app = App::new(&config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!("exiting with error: {:#}", err);
    }

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    // The session check decides between the login screen and the library
    app.dispatch(app.model.check_session());

    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, &app.model, &app.base_url);
        })?;

        app.model.ui.prune_flashes(Instant::now());

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            let follow_up = handlers::handle_api_response(&mut app.model, response);
            app.dispatch(follow_up);
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                let requests = handlers::handle_key(&mut app.model, key);
                app.dispatch(requests);
            }
        }
    }

    Ok(())
}
