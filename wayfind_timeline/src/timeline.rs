// Copyright 2026 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The virtual-clock delay queue.

use alloc::vec::Vec;

use crate::delay::Delay;

#[derive(Clone, Debug)]
struct Entry<T> {
    due: u64,
    seq: u64,
    item: T,
}

/// A deterministic delay queue over a virtual clock.
///
/// Items are scheduled relative to the current virtual time and become ready
/// once [`Timeline::advance`] has moved the clock past their deadline.
/// Equal deadlines are released in scheduling order (stable FIFO).
///
/// The queue never fires on its own: the owner drains ready items with
/// [`Timeline::pop_ready`]. Tests advance the clock directly; production
/// drivers feed elapsed wall time from a real timer, using
/// [`Timeline::next_due`] to pick the wakeup.
///
/// Storage is a flat vector with linear scans; queues here hold a handful of
/// pending transitions, not thousands.
pub struct Timeline<T> {
    now: u64,
    seq: u64,
    entries: Vec<Entry<T>>,
}

impl<T> core::fmt::Debug for Timeline<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Timeline")
            .field("now_ms", &self.now)
            .field("pending", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Timeline<T> {
    /// Create an empty timeline at virtual time zero.
    pub fn new() -> Self {
        Self {
            now: 0,
            seq: 0,
            entries: Vec::new(),
        }
    }

    /// Number of pending items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Schedule `item` to become ready `after` the current virtual time.
    pub fn schedule(&mut self, after: Delay, item: T) {
        let due = self.now.saturating_add(after.as_millis());
        let seq = self.seq;
        self.seq += 1;
        self.entries.push(Entry { due, seq, item });
    }

    /// Move the virtual clock forward.
    pub fn advance(&mut self, by: Delay) {
        self.now = self.now.saturating_add(by.as_millis());
    }

    /// Delay from now until the earliest pending deadline.
    ///
    /// Returns [`Delay::ZERO`] when an item is already ready, `None` when the
    /// queue is empty.
    pub fn next_due(&self) -> Option<Delay> {
        self.entries
            .iter()
            .map(|e| e.due)
            .min()
            .map(|due| Delay::from_millis(due.saturating_sub(self.now)))
    }

    /// Take the earliest item whose deadline has passed.
    ///
    /// Equal deadlines release in scheduling order.
    pub fn pop_ready(&mut self) -> Option<T> {
        let mut best: Option<(usize, u64, u64)> = None;
        for (i, e) in self.entries.iter().enumerate() {
            if e.due > self.now {
                continue;
            }
            match best {
                None => best = Some((i, e.due, e.seq)),
                Some((_, due, seq)) => {
                    if (e.due, e.seq) < (due, seq) {
                        best = Some((i, e.due, e.seq));
                    }
                }
            }
        }
        best.map(|(i, _, _)| self.entries.swap_remove(i).item)
    }
}
