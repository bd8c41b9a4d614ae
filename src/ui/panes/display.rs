//! Display pane: pending expression above the current value

use crate::ui::effects::EffectKind;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

pub struct DisplayRenderData<'a> {
    pub value: &'a str,
    pub expression: &'a str,
    pub memory_has_value: bool,
    /// Active flash, if any
    pub flash: Option<EffectKind>,
    /// Horizontal shake offset in columns
    pub offset: i16,
}

/// Render the display pane
pub fn render_display_pane(frame: &mut Frame, area: Rect, data: &DisplayRenderData, theme: &Theme) {
    let border_color = match data.flash {
        Some(EffectKind::FlashSuccess) => theme.success,
        Some(EffectKind::FlashError) => theme.error,
        _ => theme.border_normal,
    };

    // Shake by moving one column of padding from one side to the other
    let (left, right) = match data.offset {
        o if o > 0 => (2, 0),
        o if o < 0 => (0, 2),
        _ => (1, 1),
    };

    let memory_marker = if data.memory_has_value {
        Span::styled(
            " M ",
            Style::default()
                .fg(theme.bg)
                .bg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("")
    };

    let block = Block::default()
        .title(Line::from(vec![Span::raw(" calctty "), memory_marker]))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .padding(Padding::new(left, right, 0, 0));

    let value = if data.value.is_empty() { "0" } else { data.value };
    let value_style = if data.flash == Some(EffectKind::FlashError) {
        Style::default().fg(theme.error)
    } else {
        Style::default().fg(theme.number)
    }
    .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(Span::styled(
            data.expression.to_string(),
            Style::default().fg(theme.comment),
        )),
        Line::from(Span::styled(value.to_string(), value_style)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Right)
        .style(Style::default().bg(theme.bg));
    frame.render_widget(paragraph, area);
}
