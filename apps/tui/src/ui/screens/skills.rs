use crate::app::App;
use crate::ui::widgets::cards::render_skill_cards;
use crate::ui::widgets::muted;
use crate::ui::widgets::popup::centered_rect;
use crate::ui::widgets::radar::{render_skill_radar, to_color};
use crate::ui::widgets::tabs::render_category_tabs;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use skill_radar::radar::RadarPalette;
use tachyonfx::EffectRenderer;

pub fn render_skills(app: &App, f: &mut Frame<'_>) {
    let palette = app.palette();
    f.render_widget(
        Block::default().style(
            Style::default()
                .fg(to_color(palette.foreground))
                .bg(to_color(palette.background)),
        ),
        f.area(),
    );

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Category tabs
            Constraint::Min(8),    // Cards and radar
            Constraint::Length(3), // Status
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_category_tabs(app, f, layout[0]);
    render_content_section(app, f, layout[1]);
    render_status_section(app, &palette, f, layout[2]);
    render_shortcuts(&palette, f, layout[3]);

    if app.show_help {
        let area = f.area();
        render_help_popup(&palette, f, area);
    }
}

fn render_content_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_skill_cards(app, f, columns[0]);
    render_skill_radar(app, f, columns[1]);

    if let Ok(mut effect) = app.category_fx.lock() {
        if let Some(effect) = effect.as_mut() {
            f.buffer_mut().render_effect(effect, area, app.last_tick);
        }
    }
}

fn render_status_section(app: &App, palette: &RadarPalette, f: &mut Frame<'_>, area: Rect) {
    let status = if app.status_message.is_empty() {
        format!("Theme: {}", app.theme.as_str())
    } else {
        app.status_message.clone()
    };
    let color = if status.starts_with("Error") {
        ratatui::style::Color::Red
    } else {
        to_color(palette.foreground)
    };

    let paragraph = Paragraph::new(status)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .title(" Status ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(muted(palette))),
        );
    f.render_widget(paragraph, area);
}

fn render_shortcuts(palette: &RadarPalette, f: &mut Frame<'_>, area: Rect) {
    let hint = Paragraph::new(
        "←/→ category  ↑/↓ skill  1-3 jump  t theme  ? help  q quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(muted(palette)));
    f.render_widget(hint, area);
}

fn render_help_popup(palette: &RadarPalette, f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    f.render_widget(Clear, popup_area);

    let help_block = Block::default()
        .title(" Help & Keyboard Shortcuts ")
        .title_style(
            Style::default()
                .fg(to_color(palette.primary))
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(to_color(palette.primary)))
        .style(Style::default().bg(to_color(palette.background)));

    let help_paragraph = Paragraph::new(Text::from(build_help_lines(palette)))
        .block(help_block)
        .wrap(Wrap { trim: true });
    f.render_widget(help_paragraph, popup_area);
}

fn build_help_lines(palette: &RadarPalette) -> Vec<TextLine<'static>> {
    let key_style = Style::default()
        .fg(to_color(palette.primary))
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(to_color(palette.foreground));

    [
        ("←/→, Tab", "Switch category"),
        ("1 2 3", "Jump to Development, Tools, Soft Skills"),
        ("↑/↓", "Move between skills"),
        ("t", "Toggle light/dark theme"),
        ("?", "Show or hide this help"),
        ("q, Esc", "Quit"),
    ]
    .into_iter()
    .map(|(key, action)| {
        TextLine::from(vec![
            Span::styled(format!("{key:<10}"), key_style),
            Span::styled(action, text_style),
        ])
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::ui;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use skill_radar::settings::MemorySettingsStore;
    use skill_radar::{SkillCatalog, SkillCategory, Theme};

    fn screen_text(app: &App) -> Result<String, Box<dyn std::error::Error>> {
        let mut terminal = Terminal::new(TestBackend::new(120, 40))?;
        terminal.draw(|f| ui::ui(app, f))?;

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        Ok(text)
    }

    fn app() -> App {
        App::new(
            SkillCatalog::builtin(),
            Box::new(MemorySettingsStore::new()),
            Theme::Dark,
            SkillCategory::Tools,
        )
    }

    #[test]
    fn loading_screen_shows_spinner_label() -> Result<(), Box<dyn std::error::Error>> {
        let text = screen_text(&app())?;
        assert!(text.contains("Loading..."));
        assert!(text.contains("Press any key to skip"));
        Ok(())
    }

    #[test]
    fn skills_screen_shows_tabs_cards_and_status() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app();
        app.finish_loading();
        let text = screen_text(&app)?;

        assert!(text.contains("Development"));
        assert!(text.contains("Soft Skills"));
        assert!(text.contains("Skills Radar"));
        assert!(text.contains("Docker"));
        assert!(text.contains("65%"));
        assert!(text.contains("Theme: dark"));
        Ok(())
    }

    #[test]
    fn help_popup_lists_shortcuts() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app();
        app.finish_loading();
        app.show_help = true;
        let text = screen_text(&app)?;

        assert!(text.contains("Help & Keyboard Shortcuts"));
        assert!(text.contains("Toggle light/dark theme"));
        Ok(())
    }
}
