//! # Introduction
//!
//! calctty is a keyboard-driven desktop calculator for the terminal. It keeps a
//! bounded calculation history, a memory accumulator with a list of stored
//! values, and renders everything through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Layers
//!
//! ```text
//! Keys → Calculator → CalcEngine / HistoryLog / MemoryBank → TUI
//! ```
//!
//! 1. [`number`]: display formatting, parsing and input-length validation.
//! 2. [`engine`]: the [`engine::CalcEngine`] state machine with binary and
//!    unary operations; failures are [`engine::CalcError`] values.
//! 3. [`history`]: newest-first [`history::HistoryLog`] with a size cap and
//!    plain-text persistence.
//! 4. [`memory`]: the [`memory::MemoryBank`] accumulator and ten-slot list.
//! 5. [`calculator`]: turns key presses into engine, history and memory calls
//!    and owns the display text.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! [`config`], [`logging`] and [`notify`] hold the configuration file, the log
//! file subscriber and the change-listener registry shared by history and
//! memory.
//!
//! ## Operations
//!
//! Binary: `+`, `-`, `×`, `÷`.
//! Unary: `%`, `±`, `x²`, `√`, `1/x`.
//! Memory: `M+`, `M-`, `MS`, `MR`, `MC`.

pub mod calculator;
pub mod config;
pub mod engine;
pub mod history;
pub mod logging;
pub mod memory;
pub mod notify;
pub mod number;
pub mod ui;
