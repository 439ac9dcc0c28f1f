// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fingertip Timing: a host-agnostic deadline queue.
//!
//! Gesture recognizers need a handful of one-shot timers (a long-press delay,
//! a double-tap window, a settle animation). This crate does not own a clock
//! or spawn anything. Instead, callers pass explicit millisecond timestamps:
//!
//! - [`TimerQueue::schedule`] arms a timer for a key at an absolute deadline.
//!   Scheduling a key that is already armed replaces the old deadline.
//! - [`TimerQueue::next_deadline`] tells the host when it should wake up next.
//! - [`TimerQueue::pop_due`] drains expired timers in deadline order.
//!
//! Because time only advances when the host says so, tests can drive timers
//! deterministically without sleeping.
//!
//! ```rust
//! use fingertip_timing::TimerQueue;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Timer { LongPress, TapWindow }
//!
//! let mut timers = TimerQueue::new();
//! timers.schedule(Timer::TapWindow, 300);
//! timers.schedule(Timer::LongPress, 500);
//! assert_eq!(timers.next_deadline(), Some(300));
//!
//! assert_eq!(timers.pop_due(299), None);
//! assert_eq!(timers.pop_due(600), Some((Timer::TapWindow, 300)));
//! assert_eq!(timers.pop_due(600), Some((Timer::LongPress, 500)));
//! assert!(timers.is_empty());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use smallvec::SmallVec;

#[derive(Clone, Debug)]
struct Entry<K> {
    key: K,
    deadline: u64,
    seq: u64,
}

/// A small queue of one-shot timers keyed by `K`.
///
/// At most one timer exists per key. Entries are kept sorted by deadline,
/// with ties broken by scheduling order.
#[derive(Clone, Debug)]
pub struct TimerQueue<K> {
    entries: SmallVec<[Entry<K>; 4]>,
    next_seq: u64,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self {
            entries: SmallVec::new(),
            next_seq: 0,
        }
    }
}

impl<K: PartialEq> TimerQueue<K> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms `key` to fire at `deadline` (milliseconds), replacing any timer
    /// already armed for the same key.
    pub fn schedule(&mut self, key: K, deadline: u64) {
        self.cancel(&key);
        let seq = self.next_seq;
        self.next_seq += 1;
        let at = self
            .entries
            .iter()
            .position(|e| (e.deadline, e.seq) > (deadline, seq))
            .unwrap_or(self.entries.len());
        self.entries.insert(at, Entry { key, deadline, seq });
    }

    /// Disarms the timer for `key`. Returns `true` if one was armed.
    pub fn cancel(&mut self, key: &K) -> bool {
        match self.entries.iter().position(|e| e.key == *key) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }

    /// Disarms every timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns `true` if a timer is armed for `key`.
    #[must_use]
    pub fn is_scheduled(&self, key: &K) -> bool {
        self.entries.iter().any(|e| e.key == *key)
    }

    /// Deadline of the timer armed for `key`, if any.
    #[must_use]
    pub fn deadline_of(&self, key: &K) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.key == *key)
            .map(|e| e.deadline)
    }

    /// The earliest armed deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.first().map(|e| e.deadline)
    }

    /// Removes and returns the earliest timer whose deadline is `<= now`.
    pub fn pop_due(&mut self, now: u64) -> Option<(K, u64)> {
        if self.entries.first()?.deadline > now {
            return None;
        }
        let entry = self.entries.remove(0);
        Some((entry.key, entry.deadline))
    }

    /// Number of armed timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no timer is armed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
