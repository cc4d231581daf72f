use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::time::Duration;

use tokio::runtime::Runtime;

use crate::config::Config;
use crate::source::{HttpRecordSource, RecordSource};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: Config) -> anyhow::Result<()> {
    // Build fallible pieces before taking over the terminal so errors
    // print normally.
    let source = HttpRecordSource::new(&config.source)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = App::new(tick_rate);
    let events = EventHandler::new(tick_rate);

    tracing::info!(endpoint = %source.endpoint(), "Starting user directory");
    spawn_load(&runtime, &mut app, source, events.sender());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(app.tick_rate()) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::UsersLoaded(result)) => app.on_load_finished(result),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_background();
    Ok(())
}

/// Start a load cycle: flip the store into loading, then fetch on the
/// runtime and report the result back through the event channel.
fn spawn_load<S>(runtime: &Runtime, app: &mut App, source: S, tx: Sender<AppEvent>)
where
    S: RecordSource + 'static,
{
    app.on_load_started();
    runtime.spawn(async move {
        let result = source.fetch_records().await;
        if tx.send(AppEvent::UsersLoaded(result)).is_err() {
            tracing::debug!("UI loop exited before load completed");
        }
    });
}
