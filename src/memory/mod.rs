//! Calculator memory registers
//!
//! [`MemoryBank`] combines two things a physical calculator keeps apart:
//! - a single accumulator driven by M+, M-, MS, MR and MC
//! - a list of up to [`CAPACITY`](bank::CAPACITY) explicitly stored values,
//!   newest first, which can be recalled into the accumulator or removed
//!
//! # Notifications
//!
//! Accumulator changes emit [`MemoryEvent::ValueChanged`] with the new
//! `has_value`; list changes emit [`MemoryEvent::ListChanged`] with the new
//! length. Reads (`recall`, `get_memory_list`) never notify.

pub mod bank;

pub use bank::{MemoryBank, MemoryEvent, CAPACITY};
