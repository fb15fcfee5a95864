use std::io;
use std::sync::Arc;
use std::time::Duration;

use crate::data::MovieRepository;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::theme::Theme;

pub struct RunOptions {
    pub repository: Arc<dyn MovieRepository>,
    pub theme: Theme,
    pub category: String,
    pub tick_rate: Duration,
    pub initial_movie: Option<i64>,
    pub shutdown: ShutdownHandle,
}

/// Drive the UI until the user quits or a shutdown signal arrives.
///
/// Must be called with a tokio runtime entered; subscriptions are spawned
/// onto it.
pub fn run(options: RunOptions) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = options.tick_rate;
    let events = EventHandler::new(tick_rate, options.shutdown.clone());
    let mut app = App::new(
        options.repository,
        options.theme,
        &options.category,
        events.sender(),
    );
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.start(options.initial_movie);

    loop {
        app.pump();
        terminal.draw(|frame| draw(frame, &app, &options.theme))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Back) => app.navigate_back(),
            Ok(AppEvent::Shutdown) => {
                tracing::info!("Shutdown requested, leaving UI loop");
                app.request_quit();
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    options.shutdown.signal();
    drop(guard);
    Ok(())
}
