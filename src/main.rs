mod config;
mod controller;
mod logging;
mod model;
mod view;

use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use config::{load_config, Settings, CONFIG_FILE};
use controller::AppController;
use model::{AppModel, JsonFileStore, KeyValueStore, MemoryStore, OmdbClient, YoutubeClient};
use view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== movie-rs starting ===");

    let settings = match load_config(Path::new(CONFIG_FILE)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            eprintln!("Configuration error: {}", e);
            return Err(e.into());
        }
    };

    let controller = build_controller(&settings)?;

    // Popular titles load in the background; the UI is usable meanwhile
    controller.load_popular().await;

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("movie-rs shutting down");
    Ok(())
}

fn build_controller(settings: &Settings) -> Result<AppController> {
    let catalog = Arc::new(OmdbClient::new(&settings.omdb)?);
    let trailers = Arc::new(YoutubeClient::new(&settings.youtube)?);

    let state_file = settings.storage.state_file();
    let storage: Arc<dyn KeyValueStore> = match JsonFileStore::open(&state_file) {
        Ok(store) => {
            tracing::debug!(path = %store.path().display(), "Persistent state opened");
            Arc::new(store)
        }
        Err(e) => {
            tracing::warn!(
                path = %state_file.display(),
                error = %e,
                "Could not open state file, preferences will not be saved"
            );
            Arc::new(MemoryStore::new())
        }
    };

    let model = AppModel::new(
        catalog.clone(),
        trailers,
        storage,
        settings.suggestions.debounce(),
        settings.suggestions.min_chars,
    );

    Ok(AppController::new(model, catalog, settings.popular_titles.clone()))
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: AppController,
) -> io::Result<()> {
    let model = controller.model.clone();

    loop {
        // Auto-clear old errors (after 5 seconds)
        model.auto_clear_old_errors().await;

        let state = model.snapshot().await;
        let should_quit = model.should_quit().await;

        terminal.draw(|f| {
            AppView::render(f, &state);
        })?;

        // Short poll keeps spinners and async results flowing into the UI
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Err(e) = controller.handle_key_event(key).await {
                    tracing::warn!(error = %e, "Key handling failed");
                }
            }
        }

        if should_quit {
            break;
        }
    }

    Ok(())
}
