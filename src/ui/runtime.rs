use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;

/// Run the terminal host until the user quits or a signal arrives.
pub fn run(config: &Config) -> io::Result<()> {
    let shutdown = ShutdownHandle::new();
    if let Err(err) = shutdown.register_signals() {
        tracing::warn!(error = %err, "signal handlers not installed");
    }

    let (mut terminal, guard) = setup_terminal(config.ui.mouse)?;
    let mut app = App::new();
    app.create_view();
    let size = terminal.size()?;
    app.on_resize(size.width, size.height);

    let events = EventHandler::new(config.ui.poll_interval(), shutdown.clone())?;

    loop {
        if app.take_redraw() {
            terminal.draw(|frame| draw(frame, &app))?;
        }
        if app.should_quit() {
            break;
        }

        match events.next() {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Shutdown) => {
                tracing::info!("shutdown signal received");
                app.request_quit();
            }
            // Input thread stopped.
            Err(_) => break,
        }
    }

    shutdown.signal();
    app.destroy_view();
    drop(guard);
    Ok(())
}
