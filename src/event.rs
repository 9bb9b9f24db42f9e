use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

/// Everything the UI loop reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    /// A notice's display time ran out; carries the notice generation.
    NoticeExpired(u64),
}

pub fn poll_event(timeout: Duration) -> color_eyre::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Reads the terminal on a blocking thread and forwards key presses and
/// resizes. Stops once the receiving side is dropped.
pub fn spawn_input_reader(tx: UnboundedSender<AppEvent>, tick: Duration) {
    thread::spawn(move || {
        while !tx.is_closed() {
            let forwarded = match poll_event(tick) {
                Ok(Some(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    tx.send(AppEvent::Key(key))
                }
                Ok(Some(Event::Resize(_, _))) => tx.send(AppEvent::Resize),
                Ok(_) => continue,
                Err(err) => {
                    warn!(error = %err, "terminal input failed");
                    break;
                }
            };
            if forwarded.is_err() {
                break;
            }
        }
        debug!("input reader stopped");
    });
}
