use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;

use crate::app::{handle_input, App};
use crate::ui;

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Event poll timeout (ms); also the animation frame interval
    const EVENT_POLL_TIMEOUT: u64 = 50;

    while app.running {
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if !matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            continue;
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                handle_input(app, key.code).await;
            }
            Ok(Event::Resize(width, height)) => {
                tracing::debug!(width, height, "terminal resized");
                if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
                    tracing::warn!(error = %e, "redraw after resize failed");
                }
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "failed to read terminal event");
            }
        }
    }

    Ok(())
}
