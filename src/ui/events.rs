use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crate::shutdown::ShutdownHandle;

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
}

/// Where the input thread reads terminal events from.
pub trait EventSource: Send + 'static {
    /// Wait up to `timeout` for an event to become readable.
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
}

/// The process terminal, via crossterm.
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    /// Spawn the input thread on the process terminal.
    pub fn new(poll_interval: Duration, shutdown: ShutdownHandle) -> io::Result<Self> {
        Self::with_source(CrosstermEvents, poll_interval, shutdown)
    }

    /// Spawn the input thread. It only forwards events; all state lives on the UI thread.
    ///
    /// `poll_interval` bounds each wait on the source, and so how long a raised
    /// shutdown flag can go unnoticed.
    pub fn with_source<S: EventSource>(
        source: S,
        poll_interval: Duration,
        shutdown: ShutdownHandle,
    ) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        thread::Builder::new()
            .name("input".to_string())
            .spawn(move || input_loop(source, tx, poll_interval, shutdown))?;
        Ok(Self { rx })
    }

    /// Block until the next event; `Err` once the input thread has stopped.
    pub fn next(&self) -> Result<AppEvent, mpsc::RecvError> {
        self.rx.recv()
    }
}

fn input_loop<S: EventSource>(
    mut source: S,
    tx: Sender<AppEvent>,
    poll_interval: Duration,
    shutdown: ShutdownHandle,
) {
    loop {
        if shutdown.is_shutting_down() {
            let _ = tx.send(AppEvent::Shutdown);
            break;
        }

        let forwarded = match source.poll(poll_interval) {
            Ok(true) => match source.read() {
                Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                Ok(Event::Mouse(mouse)) => Some(AppEvent::Mouse(mouse)),
                Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                Ok(_) => None,
                Err(err) => {
                    tracing::error!(error = %err, "terminal read failed");
                    break;
                }
            },
            Ok(false) => None,
            Err(err) => {
                tracing::error!(error = %err, "terminal poll failed");
                break;
            }
        };

        if let Some(event) = forwarded {
            if tx.send(event).is_err() {
                // UI thread is gone.
                break;
            }
        }
    }
}
