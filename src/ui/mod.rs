//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus
//! - **[`panes`]**: stateless render functions for each visible pane (display,
//!   keypad, history, memory, status bar)
//! - **[`effects`]**: time-based flash and shake effects on the display
//! - **[`theme`]**: light and dark palettes used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Calculator`] and call [`App::run`] to start the event loop.
//!
//! [`Calculator`]: crate::calculator::Calculator
//! [`App::run`]: app::App::run

pub mod app;
pub mod effects;
pub mod panes;
pub mod theme;

pub use app::App;
