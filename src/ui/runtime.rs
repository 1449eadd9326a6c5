use crate::catalog::{fetch_remote, load_catalog, CatalogSource};
use crate::config::Config;
use crate::favorites::{FileStorage, PersistentFavorites};
use crate::ui::app::{App, CatalogStatus};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::finder::FinderState;
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::store::StateStore;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

/// Upper bound on how long the loop sleeps without a pending timer.
const TICK_RATE: Duration = Duration::from_millis(250);

pub fn run(config: &Config) -> io::Result<()> {
    let events = EventHandler::new();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let catalog = match config.catalog.to_source() {
        CatalogSource::Remote { url, timeout } => {
            let tx = events.sender();
            runtime.spawn(async move {
                let result = fetch_remote(&url, timeout).await;
                let _ = tx.send(AppEvent::CatalogLoaded(result));
            });
            CatalogStatus::Loading
        }
        source => match load_catalog(&source) {
            Ok(catalog) => CatalogStatus::Ready(catalog),
            Err(e) => {
                tracing::error!("Catalog unavailable: {}", e);
                CatalogStatus::Failed(e.to_string())
            }
        },
    };

    let storage = FileStorage::new(config.storage.resolved_path());
    tracing::info!(path = %storage.path().display(), "Using favorites storage");
    let store = StateStore::new(FinderState::default(), PersistentFavorites::new(storage));
    let mut app = App::new(store, catalog, &config.timing);

    let (mut terminal, guard) = setup_terminal()?;
    let size = terminal.size()?;
    app.on_resize(size.width, size.height);
    app.load(Instant::now());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let now = Instant::now();
        let timeout = app
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
            .map_or(TICK_RATE, |wait| wait.min(TICK_RATE));

        match events.next(timeout) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key, Instant::now()),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse, Instant::now()),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text, Instant::now()),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::CatalogLoaded(result)) => app.on_catalog_loaded(result, Instant::now()),
            Ok(AppEvent::InputClosed) => app.on_input_closed(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        app.on_tick(Instant::now());
    }

    drop(guard);
    runtime.shutdown_background();
    Ok(())
}
