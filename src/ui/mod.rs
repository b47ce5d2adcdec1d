pub mod feed;
pub mod keymap;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{AppState, Focus};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::default();
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title + balance
            Constraint::Length(3), // Amount
            Constraint::Length(3), // Category
            Constraint::Length(3), // Note
            Constraint::Length(3), // Buttons
            Constraint::Min(3),    // Feed
            Constraint::Length(1), // Hints
        ])
        .split(area);

    render_header(frame, layout[0], state, &theme);
    render_input(frame, layout[1], state, Focus::Amount, &theme);
    render_input(frame, layout[2], state, Focus::Category, &theme);
    render_input(frame, layout[3], state, Focus::Note, &theme);
    render_buttons(frame, layout[4], state, &theme);
    feed::render(frame, layout[5], state, &theme);
    render_hints(frame, layout[6], &theme);
}

fn render_header(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let lines = vec![
        Line::styled(
            "Personal Finance",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Line::raw(feed::balance_label(state.view.balance, &state.currency)),
    ];
    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_input(frame: &mut Frame<'_>, area: Rect, state: &AppState, field: Focus, theme: &Theme) {
    let focused = state.form.focus == field;
    let value = state.form.value(field).unwrap_or_default();

    let border = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.dim)
    };
    let content = if value.is_empty() {
        Line::styled(field.label(), Style::default().fg(theme.dim))
    } else {
        Line::styled(value, Style::default().fg(theme.text))
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(input, area);

    if focused {
        let typed = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
        let max_x = area.x + area.width.saturating_sub(2);
        let x = area.x.saturating_add(1).saturating_add(typed).min(max_x);
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn render_buttons(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let buttons = [
        (Focus::Income, "F2", theme.positive),
        (Focus::Expense, "F3", theme.negative),
        (Focus::Export, "F4", theme.accent),
    ];

    for ((button, shortcut, color), column) in buttons.into_iter().zip(columns.iter()) {
        let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
        if state.form.focus == button {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let label = Line::from(vec![
            Span::styled(button.label(), style),
            Span::styled(format!(" [{shortcut}]"), Style::default().fg(theme.dim)),
        ]);
        let widget = Paragraph::new(label).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        frame.render_widget(widget, *column);
    }
}

fn render_hints(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let hints = Paragraph::new(Line::styled(
        "Tab next  Enter select  F2 income  F3 expense  F4 export  ↑↓ scroll  Esc quit",
        Style::default().fg(theme.dim),
    ));
    frame.render_widget(hints, area);
}
