use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_loading_input(app: &mut App, key: KeyCode) {
    if matches!(key, KeyCode::Char('q')) {
        app.running = false;
        return;
    }
    app.finish_loading();
}
