use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

mod help;
mod loading;
mod skills;

pub async fn dispatch_input(app: &mut App, key: KeyCode) {
    match app.screen {
        AppScreen::Loading => loading::handle_loading_input(app, key),
        AppScreen::Skills => {
            if !help::handle_help_toggle(app, key) {
                skills::handle_skills_input(app, key).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skill_radar::settings::MemorySettingsStore;
    use skill_radar::{SkillCatalog, SkillCategory, Theme};

    fn skills_app() -> App {
        let mut app = App::new(
            SkillCatalog::builtin(),
            Box::new(MemorySettingsStore::new()),
            Theme::Dark,
            SkillCategory::Development,
        );
        app.finish_loading();
        app
    }

    #[tokio::test]
    async fn any_key_skips_loading() {
        let mut app = App::new(
            SkillCatalog::builtin(),
            Box::new(MemorySettingsStore::new()),
            Theme::Dark,
            SkillCategory::Development,
        );
        dispatch_input(&mut app, KeyCode::Char('x')).await;
        assert_eq!(app.screen, AppScreen::Skills);
        assert!(app.running);
    }

    #[tokio::test]
    async fn tab_keys_and_digits_switch_categories() {
        let mut app = skills_app();
        dispatch_input(&mut app, KeyCode::Right).await;
        assert_eq!(app.category, SkillCategory::Tools);
        dispatch_input(&mut app, KeyCode::Tab).await;
        assert_eq!(app.category, SkillCategory::Soft);
        dispatch_input(&mut app, KeyCode::BackTab).await;
        assert_eq!(app.category, SkillCategory::Tools);
        dispatch_input(&mut app, KeyCode::Char('1')).await;
        assert_eq!(app.category, SkillCategory::Development);
        dispatch_input(&mut app, KeyCode::Left).await;
        assert_eq!(app.category, SkillCategory::Soft);
    }

    #[tokio::test]
    async fn arrows_move_card_selection() {
        let mut app = skills_app();
        dispatch_input(&mut app, KeyCode::Down).await;
        dispatch_input(&mut app, KeyCode::Down).await;
        assert_eq!(app.selected_card, 2);
        dispatch_input(&mut app, KeyCode::Up).await;
        assert_eq!(app.selected_card, 1);
    }

    #[tokio::test]
    async fn help_popup_swallows_keys_until_closed() {
        let mut app = skills_app();
        dispatch_input(&mut app, KeyCode::Char('?')).await;
        assert!(app.show_help);

        dispatch_input(&mut app, KeyCode::Char('q')).await;
        assert!(app.running);
        assert!(app.show_help);

        dispatch_input(&mut app, KeyCode::Esc).await;
        assert!(!app.show_help);
        assert!(app.running);
    }

    #[tokio::test]
    async fn theme_key_toggles_and_quit_stops() {
        let mut app = skills_app();
        dispatch_input(&mut app, KeyCode::Char('t')).await;
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(app.status_message, "Theme: light");

        dispatch_input(&mut app, KeyCode::Char('q')).await;
        assert!(!app.running);
    }
}
