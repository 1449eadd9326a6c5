use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

use crate::catalog::{Catalog, CatalogError};

/// How long the reader thread blocks on the terminal before checking
/// whether the UI side is still listening.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Paste(String),
    Resize(u16, u16),
    /// Result of the one-shot remote catalog fetch.
    CatalogLoaded(Result<Catalog, CatalogError>),
    /// Terminal input stopped: the reader thread exited or never started.
    InputClosed,
}

/// Forwards terminal input to the UI thread.
///
/// A reader thread turns crossterm events into [`AppEvent`]s; the UI loop
/// consumes them one at a time, so every dispatch runs on the UI thread.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        if let Err(e) = thread::Builder::new()
            .name("input-reader".to_string())
            .spawn(move || reader_loop(event_tx, read_terminal_event))
        {
            tracing::error!("Failed to spawn input reader: {}", e);
            let _ = tx.send(AppEvent::InputClosed);
        }

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// One terminal event, or `None` when nothing arrived within the poll interval.
fn read_terminal_event() -> io::Result<Option<Event>> {
    if event::poll(POLL_INTERVAL)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Forward events until the terminal fails or the UI side is gone. Always
/// ends with [`AppEvent::InputClosed`] so the UI loop can stop.
fn reader_loop<F>(event_tx: Sender<AppEvent>, mut read_event: F)
where
    F: FnMut() -> io::Result<Option<Event>>,
{
    loop {
        let app_event = match read_event() {
            Ok(None) => continue,
            Ok(Some(Event::Key(key))) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
            Ok(Some(Event::Mouse(mouse))) => AppEvent::Mouse(mouse),
            Ok(Some(Event::Paste(text))) => AppEvent::Paste(text),
            Ok(Some(Event::Resize(cols, rows))) => AppEvent::Resize(cols, rows),
            Ok(Some(_)) => continue,
            Err(e) => {
                tracing::error!("Terminal input failed: {}", e);
                break;
            }
        };

        if event_tx.send(app_event).is_err() {
            return;
        }
    }
    let _ = event_tx.send(AppEvent::InputClosed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_ends_with_input_closed() {
        let (tx, rx) = mpsc::channel();
        let mut calls = 0;
        reader_loop(tx, || {
            calls += 1;
            match calls {
                1 => Ok(None),
                2 => Ok(Some(Event::Resize(80, 24))),
                _ => Err(io::Error::other("terminal gone")),
            }
        });

        assert!(matches!(rx.recv().unwrap(), AppEvent::Resize(80, 24)));
        assert!(matches!(rx.recv().unwrap(), AppEvent::InputClosed));
        assert!(rx.recv().is_err());
    }
}
