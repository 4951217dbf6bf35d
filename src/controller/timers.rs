//! Cancellable scheduled actions
//!
//! Each pending action sits under a `TimerKey`. Scheduling under a key that
//! is already pending replaces the old entry, so a key never has more than one
//! live timer. Each entry carries a generation number that orders entries
//! sharing a deadline.

use std::time::Instant;
use tracing::debug;

/// Slot a timer occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKey {
    /// The one dismiss slot shared by every heart
    GlobalDismiss,
    /// Dismiss slot of one heart
    Dismiss(usize),
    /// Delayed tooltip hide of one heart
    TooltipHide(usize),
}

/// What to do when a timer fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Revert heart `index` to empty, if current state still calls for it
    Dismiss {
        /// Heart index captured at scheduling time
        index: usize,
    },
    /// Hide the tooltip of heart `index`, if it is still the active one
    HideTooltip {
        /// Heart index captured at scheduling time
        index: usize,
    },
}

#[derive(Debug, Clone)]
struct Entry {
    key: TimerKey,
    deadline: Instant,
    generation: u64,
    action: TimerAction,
}

/// Pending timers of one controller
#[derive(Debug, Default)]
pub struct TimerTable {
    entries: Vec<Entry>,
    next_generation: u64,
}

impl TimerTable {
    /// Schedule `action` at `deadline` under `key`, replacing anything pending there
    pub fn schedule(&mut self, key: TimerKey, deadline: Instant, action: TimerAction) {
        self.cancel(key);
        let generation = self.next_generation;
        self.next_generation += 1;
        self.entries.push(Entry {
            key,
            deadline,
            generation,
            action,
        });
        debug!("Scheduled {:?} under {:?} (generation {})", action, key, generation);
    }

    /// Cancel whatever is pending under `key`; returns whether anything was
    pub fn cancel(&mut self, key: TimerKey) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.key != key);
        let cancelled = self.entries.len() != before;
        if cancelled {
            debug!("Cancelled timer {:?}", key);
        }
        cancelled
    }

    /// Cancel every pending timer; returns how many there were
    pub fn cancel_all(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.deadline).min()
    }

    /// Remove and return every action due at `now`, earliest first
    pub fn take_due(&mut self, now: Instant) -> Vec<TimerAction> {
        let mut due: Vec<Entry> = Vec::new();
        self.entries.retain(|entry| {
            if entry.deadline <= now {
                due.push(entry.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|entry| (entry.deadline, entry.generation));
        due.into_iter().map(|entry| entry.action).collect()
    }

    /// Number of pending timers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is pending
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
