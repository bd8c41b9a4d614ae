//! Accumulator and stored-value list

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::notify::{ListenerId, Listeners};
use crate::number::is_fuzzy_zero;

/// Maximum number of values kept in the list
pub const CAPACITY: usize = 10;

/// Emitted after the accumulator or the list changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryEvent {
    ValueChanged { has_value: bool },
    ListChanged { len: usize },
}

/// M+/M-/MS/MR/MC register plus a newest-first list of stored values
#[derive(Debug, Default)]
pub struct MemoryBank {
    accumulator: f64,
    list: VecDeque<f64>,
    listeners: Listeners<MemoryEvent>,
}

impl MemoryBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a change listener
    pub fn subscribe<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&MemoryEvent) + 'static,
    {
        self.listeners.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// M+
    pub fn add(&mut self, value: f64) {
        self.accumulator += value;
        debug!(value, memory = self.accumulator, "M+");
        self.notify_value();
    }

    /// M-
    pub fn subtract(&mut self, value: f64) {
        self.accumulator -= value;
        debug!(value, memory = self.accumulator, "M-");
        self.notify_value();
    }

    /// MS: replace the accumulator
    pub fn store(&mut self, value: f64) {
        self.accumulator = value;
        debug!(value, "MS");
        self.notify_value();
    }

    /// MR
    pub fn recall(&self) -> f64 {
        debug!(memory = self.accumulator, "MR");
        self.accumulator
    }

    /// MC
    pub fn clear(&mut self) {
        self.accumulator = 0.0;
        debug!("MC");
        self.notify_value();
    }

    pub fn value(&self) -> f64 {
        self.accumulator
    }

    /// True unless the accumulator is (fuzzily) zero
    pub fn has_value(&self) -> bool {
        !is_fuzzy_zero(self.accumulator)
    }

    /// Push `value` onto the front of the list, dropping the oldest if full
    pub fn add_to_list(&mut self, value: f64) {
        if self.list.len() >= CAPACITY {
            self.list.pop_back();
            debug!("memory list full, oldest value dropped");
        }

        self.list.push_front(value);
        debug!(value, len = self.list.len(), "value added to memory list");
        self.notify_list();
    }

    /// Snapshot of the list, newest first
    pub fn get_memory_list(&self) -> Vec<f64> {
        self.list.iter().copied().collect()
    }

    pub fn list_value(&self, index: usize) -> Option<f64> {
        self.list.get(index).copied()
    }

    /// Load list entry `index` into the accumulator. Out-of-range is a no-op.
    pub fn recall_from_list(&mut self, index: usize) {
        match self.list.get(index) {
            Some(&value) => {
                self.accumulator = value;
                debug!(index, value, "memory list value recalled");
                self.notify_value();
            }
            None => warn!(index, len = self.list.len(), "memory list index out of range"),
        }
    }

    /// Remove list entry `index`. Out-of-range is a no-op.
    pub fn remove_from_list(&mut self, index: usize) {
        match self.list.remove(index) {
            Some(removed) => {
                debug!(index, value = removed, "memory list value removed");
                self.notify_list();
            }
            None => warn!(index, len = self.list.len(), "memory list index out of range"),
        }
    }

    pub fn clear_list(&mut self) {
        self.list.clear();
        debug!("memory list cleared");
        self.notify_list();
    }

    pub fn list_size(&self) -> usize {
        self.list.len()
    }

    pub fn is_list_empty(&self) -> bool {
        self.list.is_empty()
    }

    fn notify_value(&mut self) {
        let event = MemoryEvent::ValueChanged {
            has_value: self.has_value(),
        };
        self.listeners.emit(&event);
    }

    fn notify_list(&mut self) {
        let event = MemoryEvent::ListChanged {
            len: self.list.len(),
        };
        self.listeners.emit(&event);
    }
}
