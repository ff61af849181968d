use crate::app::state::App;
use crossterm::event::KeyCode;

/// Returns `true` when the key was consumed by the help popup.
pub fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    if matches!(key, KeyCode::Char('?') | KeyCode::F(1)) {
        app.show_help = !app.show_help;
        return true;
    }

    if app.show_help {
        if matches!(key, KeyCode::Esc | KeyCode::Enter) {
            app.show_help = false;
        }
        return true;
    }

    false
}
