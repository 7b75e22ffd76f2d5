//! Event ring buffer for callback → pump hand-off.
//!
//! Records are written by the widget callbacks (or any other producer) and
//! read by the event pump. The ring is a fixed-size lock-free queue, so a
//! producer on another thread never blocks and never races the pump.
//!
//! A full ring does not fail silently: every push reports what happened, and
//! the ring keeps a running overflow count.

use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_queue::ArrayQueue;

// =============================================================================
// Types
// =============================================================================

/// Default number of slots per ring.
pub const DEFAULT_QUEUE_LEN: usize = 50;

/// What a full ring does with a new record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Evict the oldest unread record to make room.
    #[default]
    DropOldest,
    /// Keep what is queued and hand the new record back.
    RejectNewest,
}

/// Result of a push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome<T> {
    /// Stored without loss.
    Queued,
    /// Stored; the returned record was evicted to make room.
    DisplacedOldest(T),
    /// Not stored; the ring was full.
    Rejected(T),
}

impl<T> PushOutcome<T> {
    /// True if the pushed record is now in the ring.
    pub fn is_queued(&self) -> bool {
        !matches!(self, PushOutcome::Rejected(_))
    }

    /// True if a record was lost, either the new one or an old one.
    pub fn is_overflow(&self) -> bool {
        !matches!(self, PushOutcome::Queued)
    }
}

/// Point-in-time counters for one ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RingStats {
    pub capacity: usize,
    pub pending: usize,
    pub overflows: u64,
}

// =============================================================================
// Ring Buffer
// =============================================================================

/// Bounded FIFO of event records.
pub struct EventRing<T> {
    name: &'static str,
    slots: ArrayQueue<T>,
    policy: OverflowPolicy,
    overflows: AtomicU64,
}

impl<T> EventRing<T> {
    /// Create a ring. `capacity` must be non-zero; [`super::BridgeConfig`]
    /// checks that before any ring is built.
    pub fn new(name: &'static str, capacity: usize, policy: OverflowPolicy) -> Self {
        debug_assert!(capacity > 0, "ring capacity must be non-zero");
        Self {
            name,
            slots: ArrayQueue::new(capacity),
            policy,
            overflows: AtomicU64::new(0),
        }
    }

    /// Write a record to the ring.
    pub fn push(&self, record: T) -> PushOutcome<T> {
        let outcome = match self.policy {
            OverflowPolicy::DropOldest => match self.slots.force_push(record) {
                None => PushOutcome::Queued,
                Some(evicted) => PushOutcome::DisplacedOldest(evicted),
            },
            OverflowPolicy::RejectNewest => match self.slots.push(record) {
                Ok(()) => PushOutcome::Queued,
                Err(record) => PushOutcome::Rejected(record),
            },
        };

        if outcome.is_overflow() {
            let previous = self.overflows.fetch_add(1, Ordering::Relaxed);
            if previous == 0 {
                log::warn!(
                    "[canvas-events] {} queue full ({} slots), {:?}",
                    self.name,
                    self.slots.capacity(),
                    self.policy
                );
            } else {
                log::debug!("[canvas-events] {} queue overflow #{}", self.name, previous + 1);
            }
        }

        outcome
    }

    /// Read the next record from the ring.
    pub fn pop(&self) -> Option<T> {
        self.slots.pop()
    }

    /// Number of pending records.
    pub fn pending_count(&self) -> usize {
        self.slots.len()
    }

    /// Check if there are pending records.
    pub fn has_pending(&self) -> bool {
        !self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Records lost to a full ring since creation.
    pub fn overflow_count(&self) -> u64 {
        self.overflows.load(Ordering::Relaxed)
    }

    pub fn stats(&self) -> RingStats {
        RingStats {
            capacity: self.capacity(),
            pending: self.pending_count(),
            overflows: self.overflow_count(),
        }
    }

    /// Pop until empty.
    pub fn drain(&self) -> impl Iterator<Item = T> + '_ {
        std::iter::from_fn(move || self.pop())
    }
}

impl<T> std::fmt::Debug for EventRing<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRing")
            .field("name", &self.name)
            .field("policy", &self.policy)
            .field("stats", &self.stats())
            .finish()
    }
}
