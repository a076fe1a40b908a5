use anyhow::Result;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::time::Duration;

mod actions;
mod app;
mod commands;
mod dispatcher;
mod logger;
mod middleware;
mod reducer;
mod state;
mod theme;
mod views;

use actions::UiAction;
use app::App;
use middleware::{CommandPaletteMiddleware, KeyboardMiddleware};
use shopfront_config::AppConfig;
use shopfront_core::actions::{Action, BootstrapAction};
use shopfront_core::domain_models::SortOrder;
use shopfront_core::middleware::{BootstrapMiddleware, LoggingMiddleware};
use shopfront_core::seed::CatalogSeed;
use shopfront_core::{AppState, Store};

fn main() -> Result<()> {
    let log_file = logger::init()?;

    log::info!("Starting shopfront-lander (logging to {:?})", log_file);

    let config = AppConfig::load();

    let seed = match &config.catalog_file {
        Some(path) => CatalogSeed::File(path.clone()),
        None => CatalogSeed::BuiltIn,
    };
    let default_sort = config.default_sort.parse::<SortOrder>().unwrap_or_else(|_| {
        log::warn!(
            "Unknown default_sort {:?}, using {}",
            config.default_sort,
            SortOrder::default()
        );
        SortOrder::default()
    });

    // Initialize store with middleware
    let mut store = Store::new(AppState::default());

    // Add middleware in order (they execute in this order)
    store.add_middleware(LoggingMiddleware::new());
    store.add_middleware(BootstrapMiddleware::new(seed));

    store.dispatch(Action::Bootstrap(BootstrapAction::Start));

    let currency_symbol = config.currency_symbol.clone();
    let mut app = App::new(store, config, default_sort);
    app.add_middleware(KeyboardMiddleware::new());
    app.add_middleware(CommandPaletteMiddleware::new(currency_symbol));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main event loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Event loop failed: {:#}", err);
    }

    log::info!("Exiting shopfront-lander");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        // Render
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(&app.screen(), area, frame);
        })?;

        // Check if we should quit
        if !app.ui().running {
            log::debug!(
                "Quit with {} items in the cart",
                app.state().cart.item_count()
            );
            break;
        }

        // Handle events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    app.dispatch(UiAction::KeyPressed(key));
                }
            }
        }
    }

    Ok(())
}
