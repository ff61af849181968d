use crate::app::App;
use crate::ui::widgets::muted;
use crate::ui::widgets::radar::to_color;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line as TextLine;
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Frame;
use skill_radar::SkillCategory;

pub fn render_category_tabs(app: &App, f: &mut Frame<'_>, area: Rect) {
    let palette = app.palette();
    let titles: Vec<TextLine<'_>> = SkillCategory::ALL
        .iter()
        .enumerate()
        .map(|(index, category)| TextLine::from(format!(" {} {} ", index + 1, category.label())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" My Skills ")
                .title_style(
                    Style::default()
                        .fg(to_color(palette.primary))
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(muted(&palette))),
        )
        .select(app.category.index())
        .style(Style::default().fg(muted(&palette)))
        .highlight_style(
            Style::default()
                .fg(to_color(palette.background))
                .bg(to_color(palette.primary))
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");

    f.render_widget(tabs, area);
}
