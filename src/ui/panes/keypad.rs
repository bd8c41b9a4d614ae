//! Keypad legend: each button with the key that presses it

use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

/// (button label, key)
const KEYPAD: [[(&str, &str); 4]; 7] = [
    [("MC", "L"), ("MR", "R"), ("M+", "m"), ("M-", "M")],
    [("MS", "S"), ("CE", "e"), ("C", "Esc"), ("⌫", "Bksp")],
    [("%", "%"), ("1/x", "i"), ("x²", "s"), ("√", "r")],
    [("7", "7"), ("8", "8"), ("9", "9"), ("÷", "/")],
    [("4", "4"), ("5", "5"), ("6", "6"), ("×", "*")],
    [("1", "1"), ("2", "2"), ("3", "3"), ("-", "-")],
    [("±", "n"), ("0", "0"), (".", "."), ("+ / =", "+ ↵")],
];

fn is_digit_label(label: &str) -> bool {
    label.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Render the keypad legend
pub fn render_keypad_pane(frame: &mut Frame, area: Rect, is_focused: bool, theme: &Theme) {
    let border_style = if is_focused {
        Style::default()
            .fg(theme.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border_normal)
    };

    let block = Block::default()
        .title(" Keypad ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let rows = KEYPAD.iter().map(|row| {
        let cells = row.iter().map(|(label, key)| {
            let label_style = if is_digit_label(label) {
                Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.primary)
            };
            Cell::from(Line::from(vec![
                Span::styled(format!("{:>5}", label), label_style),
                Span::styled(format!(" {}", key), Style::default().fg(theme.comment)),
            ]))
        });
        Row::new(cells)
    });

    let table = Table::new(rows, [Constraint::Ratio(1, 4); 4])
        .block(block)
        .style(Style::default().bg(theme.bg));
    frame.render_widget(table, area);
}
