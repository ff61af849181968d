use crate::app::App;
use crate::ui::widgets::muted;
use crate::ui::widgets::radar::to_color;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, LineGauge, Paragraph};
use ratatui::Frame;

const NAME_WIDTH: u16 = 24;

/// First visible row so that `selected_index` stays on screen.
pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index.saturating_sub(max_visible_rows) + 1;
    }

    0
}

/// One row per skill: glyph and name, then a proficiency gauge.
pub fn render_skill_cards(app: &App, f: &mut Frame<'_>, area: Rect) {
    let palette = app.palette();
    let block = Block::default()
        .title(format!(" {} ", app.category.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(muted(&palette)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let entries = app.entries();
    if entries.is_empty() {
        f.render_widget(
            Paragraph::new("No skills in this category")
                .style(Style::default().fg(muted(&palette))),
            inner,
        );
        return;
    }

    let visible = usize::from(inner.height);
    let offset = scroll_offset(entries.len(), visible, app.selected_card);

    for (row, (index, entry)) in entries
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .enumerate()
    {
        let Ok(row) = u16::try_from(row) else {
            break;
        };
        let row_area = Rect {
            x: inner.x,
            y: inner.y + row,
            width: inner.width,
            height: 1,
        };
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(NAME_WIDTH), Constraint::Min(8)])
            .split(row_area);

        let selected = index == app.selected_card;
        let name_style = if selected {
            Style::default()
                .fg(to_color(palette.primary))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(to_color(palette.foreground))
        };
        let marker = if selected { "▸ " } else { "  " };
        let name = TextLine::from(vec![
            Span::styled(marker, name_style),
            Span::raw(format!("{} ", entry.glyph())),
            Span::styled(entry.label().to_string(), name_style),
        ]);
        f.render_widget(Paragraph::new(name), columns[0]);

        let gauge = LineGauge::default()
            .ratio(f64::from(entry.score()) / 100.0)
            .label(format!("{:>3}%", entry.score()))
            .style(Style::default().fg(to_color(palette.foreground)))
            .filled_style(Style::default().fg(to_color(palette.primary)))
            .unfilled_style(Style::default().fg(muted(&palette)));
        f.render_widget(gauge, columns[1]);
    }
}
