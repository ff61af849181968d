use crate::app::input::helpers::digit_index;
use crate::app::state::App;
use crossterm::event::KeyCode;
use skill_radar::SkillCategory;

pub async fn handle_skills_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => app.next_category(),
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => app.prev_category(),
        KeyCode::Down | KeyCode::Char('j') => app.next_card(),
        KeyCode::Up | KeyCode::Char('k') => app.prev_card(),
        KeyCode::Char('t') => app.toggle_theme().await,
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
        }
        KeyCode::Char(ch) => {
            if let Some(category) =
                digit_index(ch, SkillCategory::ALL.len()).and_then(SkillCategory::from_index)
            {
                app.select_category(category);
            }
        }
        _ => {}
    }
}
