//! History pane rendering

use super::visible_offset;
use crate::history::{split_entry, HistoryLog};
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Each entry takes two rows: expression, then result
const ROWS_PER_ENTRY: usize = 2;

/// Render the history pane, newest entry on top
pub fn render_history_pane(
    frame: &mut Frame,
    area: Rect,
    history: &HistoryLog,
    selected: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
    theme: &Theme,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(theme.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border_normal)
    };

    let block = Block::default()
        .title(format!(" History ({}/{}) ", history.count(), history.max_size()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if history.is_empty() {
        let paragraph = Paragraph::new("(no calculations yet)")
            .block(block)
            .style(Style::default().fg(theme.comment).bg(theme.bg));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_entries =
        (area.height.saturating_sub(2) as usize / ROWS_PER_ENTRY).max(1);
    *scroll_offset = visible_offset(history.count(), visible_entries, selected, *scroll_offset);

    let items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_entries)
        .map(|(index, entry)| {
            let (expression, result) = split_entry(entry);
            let row_style = if is_focused && index == selected {
                Style::default().bg(theme.highlight_bg)
            } else {
                Style::default()
            };
            ListItem::new(vec![
                Line::from(Span::styled(
                    expression.to_string(),
                    Style::default().fg(theme.comment),
                )),
                Line::from(Span::styled(
                    format!("= {}", result),
                    Style::default()
                        .fg(theme.number)
                        .add_modifier(Modifier::BOLD),
                )),
            ])
            .style(row_style)
        })
        .collect();

    let list = List::new(items)
        .block(block.padding(Padding::new(1, 0, 0, 0)))
        .style(Style::default().bg(theme.bg));
    frame.render_widget(list, area);
}
