//! Bounded calculation history
//!
//! [`HistoryLog`] keeps formatted expression strings newest first and never holds
//! more than its `max_size`; the oldest entries fall off the back. Entries are
//! opaque display text such as `"5 + 3 = 8"` or `"√(16) = 4"`.
//!
//! Persistence goes through a [`HistoryStore`]. Stores see entries oldest first,
//! so saving and loading again keeps the logical order.

pub mod store;

use std::collections::VecDeque;
use std::path::Path;

use tracing::{debug, warn};

use crate::notify::{ListenerId, Listeners};
use crate::number::format::format_number;
pub use store::{HistoryError, HistoryStore, TextFileStore};

/// Default number of entries kept
pub const DEFAULT_MAX_SIZE: usize = 20;

/// Separator between expression and result inside an entry
pub const RESULT_SEPARATOR: &str = " = ";

/// Emitted after every change to the log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEvent {
    Changed { len: usize },
}

/// Most-recent-first log of calculations
#[derive(Debug)]
pub struct HistoryLog {
    entries: VecDeque<String>,
    max_size: usize,
    listeners: Listeners<HistoryEvent>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_MAX_SIZE)
    }

    /// Create an empty log bounded at `max_size` (at least 1)
    pub fn with_max_size(max_size: usize) -> Self {
        HistoryLog {
            entries: VecDeque::new(),
            max_size: max_size.max(1),
            listeners: Listeners::new(),
        }
    }

    /// Register a change listener
    pub fn subscribe<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&HistoryEvent) + 'static,
    {
        self.listeners.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Add an entry at the front. Empty text is ignored.
    pub fn add_entry(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }

        debug!(entry = %text, "history entry added");
        self.entries.push_front(text);
        self.evict_overflow();
        self.notify();
    }

    /// Add `"<expression> = <result>"` with `result` shown to `max_digits`
    /// significant digits
    pub fn add_result(&mut self, expression: &str, result: f64, max_digits: usize) {
        let entry = format!(
            "{}{}{}",
            expression,
            RESULT_SEPARATOR,
            format_number(result, max_digits)
        );
        self.add_entry(entry);
    }

    /// Snapshot of every entry, newest first
    pub fn get_all(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Most recent entry
    pub fn get_last(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    /// Entry `index` positions back from the newest
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        debug!("history cleared");
        self.notify();
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Change the bound, dropping the oldest entries that no longer fit.
    ///
    /// A bound of zero is raised to one. Listeners hear about it only when
    /// entries were actually dropped.
    pub fn set_max_size(&mut self, max_size: usize) {
        self.max_size = max_size.max(1);
        if self.evict_overflow() > 0 {
            self.notify();
        }
    }

    /// Write all entries to `store`, oldest first
    pub fn save_to<S: HistoryStore + ?Sized>(&self, store: &S) -> Result<(), HistoryError> {
        let oldest_first: Vec<String> = self.entries.iter().rev().cloned().collect();
        store.save(&oldest_first)?;
        debug!(count = oldest_first.len(), "history saved");
        Ok(())
    }

    /// Replace the log with the contents of `store`.
    ///
    /// On failure the log is left as it was; listeners are notified either way.
    /// Returns the number of entries kept.
    pub fn load_from<S: HistoryStore + ?Sized>(
        &mut self,
        store: &S,
    ) -> Result<usize, HistoryError> {
        let oldest_first = match store.load() {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "history not loaded");
                self.notify();
                return Err(e);
            }
        };

        self.entries = oldest_first
            .into_iter()
            .rev()
            .filter(|entry| !entry.trim().is_empty())
            .collect();
        self.evict_overflow();
        debug!(count = self.entries.len(), "history loaded");
        self.notify();
        Ok(self.entries.len())
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), HistoryError> {
        let store = TextFileStore::new(path.as_ref());
        debug!(path = %store.path().display(), "saving history");
        self.save_to(&store)
    }

    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize, HistoryError> {
        let store = TextFileStore::new(path.as_ref());
        debug!(path = %store.path().display(), "loading history");
        self.load_from(&store)
    }

    /// Drop entries from the back until the bound holds. Returns how many went.
    fn evict_overflow(&mut self) -> usize {
        let overflow = self.entries.len().saturating_sub(self.max_size);
        self.entries.truncate(self.max_size);
        overflow
    }

    fn notify(&mut self) {
        let event = HistoryEvent::Changed {
            len: self.entries.len(),
        };
        self.listeners.emit(&event);
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Split an entry into its expression and result at the last `" = "`.
///
/// Entries without a separator are all expression.
pub fn split_entry(entry: &str) -> (&str, &str) {
    match entry.rfind(RESULT_SEPARATOR) {
        Some(pos) => (&entry[..pos], &entry[pos + RESULT_SEPARATOR.len()..]),
        None => (entry, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_add_entry_prepends() {
        let mut history = HistoryLog::new();
        history.add_entry("5 + 3 = 8");
        history.add_entry("10 - 2 = 8");
        assert_eq!(history.count(), 2);
        assert_eq!(history.get_last(), Some("10 - 2 = 8"));
        assert_eq!(history.get(1), Some("5 + 3 = 8"));
    }

    #[test]
    fn test_empty_entry_is_ignored() {
        let mut history = HistoryLog::new();
        let events = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&events);
        history.subscribe(move |_| *counter.borrow_mut() += 1);

        history.add_entry("");
        assert_eq!(history.count(), 0);
        assert_eq!(*events.borrow(), 0);
    }

    #[test]
    fn test_add_result_formats_value() {
        let mut history = HistoryLog::new();
        history.add_result("5 + 3", 8.0, 10);
        history.add_result("1 ÷ 3", 1.0 / 3.0, 10);
        assert_eq!(history.get(1), Some("5 + 3 = 8"));
        assert_eq!(history.get_last(), Some("1 ÷ 3 = 0.3333333333"));

        history.add_result("2 ÷ 3", 2.0 / 3.0, 4);
        assert_eq!(history.get_last(), Some("2 ÷ 3 = 0.6667"));
    }

    #[test]
    fn test_set_max_size_evicts_oldest() {
        let mut history = HistoryLog::new();
        for i in 0..5 {
            history.add_entry(format!("{} + 0 = {}", i, i));
        }
        history.set_max_size(2);
        assert_eq!(history.get_all(), vec!["4 + 0 = 4", "3 + 0 = 3"]);

        history.set_max_size(0);
        assert_eq!(history.max_size(), 1);
        assert_eq!(history.count(), 1);
    }

    #[test]
    fn test_clear_notifies() {
        let mut history = HistoryLog::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        history.subscribe(move |e| sink.borrow_mut().push(*e));

        history.add_entry("1 + 1 = 2");
        history.clear();
        assert_eq!(
            *events.borrow(),
            vec![
                HistoryEvent::Changed { len: 1 },
                HistoryEvent::Changed { len: 0 }
            ]
        );
    }

    #[test]
    fn test_split_entry() {
        assert_eq!(split_entry("5 + 3 = 8"), ("5 + 3", "8"));
        assert_eq!(split_entry("√(16) = 4"), ("√(16)", "4"));
        assert_eq!(split_entry("a = b = c"), ("a = b", "c"));
        assert_eq!(split_entry("no result"), ("no result", ""));
    }
}
