//! Memory pane: accumulator and stored-value list

use super::visible_offset;
use crate::memory::{MemoryBank, CAPACITY};
use crate::number::format::format_number;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the memory pane
#[allow(clippy::too_many_arguments)]
pub fn render_memory_pane(
    frame: &mut Frame,
    area: Rect,
    memory: &MemoryBank,
    max_digits: usize,
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

    let accumulator = if memory.has_value() {
        format!(" M = {} ", format_number(memory.value(), max_digits))
    } else {
        " M empty ".to_string()
    };

    let block = Block::default()
        .title(format!(" Memory ({}/{}) ", memory.list_size(), CAPACITY))
        .title_bottom(Line::from(Span::styled(
            accumulator,
            Style::default().fg(theme.secondary),
        )))
        .borders(Borders::ALL)
        .border_style(border_style);

    if memory.is_list_empty() {
        let paragraph = Paragraph::new("(press S to store)")
            .block(block)
            .style(Style::default().fg(theme.comment).bg(theme.bg));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let values = memory.get_memory_list();
    *scroll_offset = visible_offset(values.len(), visible_height, selected, *scroll_offset);

    let items: Vec<ListItem> = values
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(index, value)| {
            let style = if is_focused && index == selected {
                Style::default()
                    .fg(theme.number)
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg)
            };
            ListItem::new(format!("{:>2}  {}", index + 1, format_number(*value, max_digits)))
                .style(style)
        })
        .collect();

    let list = List::new(items)
        .block(block.padding(Padding::new(1, 0, 0, 0)))
        .style(Style::default().bg(theme.bg));
    frame.render_widget(list, area);
}
