// UI module for skill-radar
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::state::AppScreen;
use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    match app.screen {
        AppScreen::Loading => screens::loading::render_loading(app, f),
        AppScreen::Skills => screens::skills::render_skills(app, f),
    }
}
