//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`display`]: pending expression and current value, with flash and shake
//! - [`keypad`]: button legend mapping calculator keys to keyboard keys
//! - [`history`]: newest-first calculation history
//! - [`memory`]: memory accumulator and stored-value list
//! - [`status`]: status bar with keybindings and theme indicator
//!
//! Each pane module exports one stateless `render_*` function that takes the
//! active [`Theme`](crate::ui::theme::Theme).

pub mod display;
pub mod history;
pub mod keypad;
pub mod memory;
pub mod status;

pub use display::{render_display_pane, DisplayRenderData};
pub use history::render_history_pane;
pub use keypad::render_keypad_pane;
pub use memory::render_memory_pane;
pub use status::{render_status_bar, StatusRenderData};

/// First visible row of a list so that `selected` stays in view.
///
/// Keeps the previous `offset` when the selection is already visible.
pub(crate) fn visible_offset(
    total: usize,
    visible: usize,
    selected: usize,
    offset: usize,
) -> usize {
    let visible = visible.max(1);
    if total <= visible {
        return 0;
    }

    let max_offset = total - visible;
    let selected = selected.min(total - 1);
    let offset = if selected < offset {
        selected
    } else if selected >= offset + visible {
        selected + 1 - visible
    } else {
        offset
    };
    offset.min(max_offset)
}

#[cfg(test)]
mod tests {
    use super::visible_offset;

    #[test]
    fn test_short_lists_never_scroll() {
        assert_eq!(visible_offset(3, 5, 2, 4), 0);
    }

    #[test]
    fn test_scrolls_to_keep_selection_visible() {
        assert_eq!(visible_offset(20, 5, 7, 0), 3);
        assert_eq!(visible_offset(20, 5, 1, 3), 1);
        assert_eq!(visible_offset(20, 5, 4, 2), 2);
        assert_eq!(visible_offset(20, 5, 19, 0), 15);
    }
}
