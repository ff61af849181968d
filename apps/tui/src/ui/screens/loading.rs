use crate::app::App;
use crate::ui::widgets::muted;
use crate::ui::widgets::popup::centered_rect;
use crate::ui::widgets::radar::to_color;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use throbber_widgets_tui::Throbber;

pub fn render_loading(app: &App, f: &mut Frame<'_>) {
    let palette = app.palette();
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(to_color(palette.background))),
        area,
    );

    let center = centered_rect(50, 30, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(center);

    f.render_widget(
        Paragraph::new("Skills Radar")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(to_color(palette.primary))
                    .add_modifier(Modifier::BOLD),
            ),
        rows[0],
    );

    let spinner_area = centered_rect(40, 100, rows[2]);
    let throbber = Throbber::default()
        .label("Loading...")
        .style(Style::default().fg(to_color(palette.foreground)))
        .throbber_style(Style::default().fg(to_color(palette.primary)));
    let mut throbber_state = app.throbber_state.clone();
    f.render_stateful_widget(throbber, spinner_area, &mut throbber_state);

    f.render_widget(
        Paragraph::new("Press any key to skip")
            .alignment(Alignment::Center)
            .style(Style::default().fg(muted(&palette))),
        rows[3],
    );
}
