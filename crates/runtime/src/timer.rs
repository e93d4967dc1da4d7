//! Schedule cancellable effects at a deadline.
//!
//! [`Timers`] never spawns anything. The host asks for the
//! [`next_deadline`](Timers::next_deadline), waits however its event loop
//! waits, and then drains every due effect with
//! [`pop_due`](Timers::pop_due).
use crate::core::time::Instant;

use slotmap::{SlotMap, new_key_type};

use std::fmt;

new_key_type! {
    /// A cancellable handle to a scheduled timer.
    pub struct Handle;
}

struct Entry<T> {
    deadline: Instant,
    sequence: u64,
    payload: T,
}

/// A queue of pending timers carrying a payload of type `T`.
pub struct Timers<T> {
    entries: SlotMap<Handle, Entry<T>>,
    sequence: u64,
}

impl<T> Timers<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
            sequence: 0,
        }
    }

    /// Schedules `payload` to become due at `deadline`.
    ///
    /// Timers sharing a deadline become due in the order they were scheduled.
    pub fn schedule(&mut self, deadline: Instant, payload: T) -> Handle {
        self.sequence += 1;

        self.entries.insert(Entry {
            deadline,
            sequence: self.sequence,
            payload,
        })
    }

    /// Cancels a pending timer.
    ///
    /// Returns false if the timer already fired or was cancelled.
    pub fn cancel(&mut self, handle: Handle) -> bool {
        self.entries.remove(handle).is_some()
    }

    /// Cancels every pending timer, returning how many were pending.
    pub fn cancel_all(&mut self) -> usize {
        let pending = self.entries.len();
        self.entries.clear();
        pending
    }

    /// Returns true if the timer is still pending.
    pub fn is_pending(&self, handle: Handle) -> bool {
        self.entries.contains_key(handle)
    }

    /// Returns the number of pending timers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no timer is pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the earliest deadline among the pending timers.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.values().map(|entry| entry.deadline).min()
    }

    /// Removes and returns the payload of the earliest timer due at `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<T> {
        let handle = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.deadline <= now)
            .min_by_key(|(_, entry)| (entry.deadline, entry.sequence))
            .map(|(handle, _)| handle)?;

        self.entries.remove(handle).map(|entry| entry.payload)
    }
}

impl<T> Default for Timers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Timers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timers")
            .field("pending", &self.entries.len())
            .field("next_deadline", &self.next_deadline())
            .finish()
    }
}
