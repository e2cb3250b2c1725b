//! Main loop: terminal input, fetch updates and spinner ticks.

use crossterm::event::{Event, EventStream};
use datatable_lib::FetchHandle;
use futures::StreamExt;
use log::{debug, error, info, trace, warn};
use tokio::time::MissedTickBehavior;

use super::action::action_for_event;
use super::render::render;
use super::{App, Outcome};
use crate::error::AppError;
use crate::settings::SettingsProvider;
use crate::term::Terminal;

/// Run until the user quits or the input stream ends.
///
/// The fetch is cancelled when the loop exits early, since the handle is
/// owned by the caller and dropped with it.
pub async fn run(
    app: &mut App,
    fetch: &mut FetchHandle,
    terminal: &mut Terminal,
    settings: Option<&SettingsProvider>,
) -> Result<(), AppError> {
    let mut events = EventStream::new();

    let mut spinner_interval = tokio::time::interval(app.spinner().frame_duration());
    spinner_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut fetch_open = true;

    let (width, height) = terminal.size();
    info!("Event loop started ({}x{})", width, height);
    let mut hits = terminal.draw(|buf| render(app, buf))?;

    loop {
        if app.should_quit() {
            info!("Quit requested");
            break;
        }

        let loading = app.view().is_loading();

        tokio::select! {
            // Branch 1: terminal input
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Resize(w, h))) => {
                        debug!("Resize to {}x{}", w, h);
                    }
                    Some(Ok(event)) => {
                        trace!("Crossterm event: {:?}", event);
                        if let Some(action) = action_for_event(&event, &hits) {
                            if app.handle(action) == Outcome::ConfigChanged {
                                save_config(app, settings).await;
                            }
                        }
                    }
                    Some(Err(e)) => {
                        error!("Event stream error: {}", e);
                    }
                    None => {
                        info!("Event stream closed");
                        break;
                    }
                }
            }

            // Branch 2: fetch progress
            changed = fetch.changed(), if fetch_open => {
                match changed {
                    Ok(state) => {
                        debug!("Fetch state: loading={} records={}", state.loading, state.records.len());
                        app.apply_fetch(&state);
                    }
                    Err(_) => {
                        debug!("Fetch task finished");
                        fetch_open = false;
                    }
                }
            }

            // Branch 3: spinner animation, only while loading
            _ = spinner_interval.tick(), if loading => {
                app.tick_spinner();
            }
        }

        hits = terminal.draw(|buf| render(app, buf))?;
    }

    Ok(())
}

async fn save_config(app: &mut App, settings: Option<&SettingsProvider>) {
    let Some(settings) = settings else { return };
    if let Err(e) = settings.save_table_config(app.saved_config()).await {
        warn!("Failed to save preferences: {}", e);
        app.set_status(format!("Could not save preferences: {}", e));
    }
}
