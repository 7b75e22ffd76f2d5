//! Producer end of the bridge.

use std::sync::Arc;

use super::ring::PushOutcome;
use super::{EventQueues, QueueStats};
use crate::native::{KbdEvent, PosEvent};

/// Write handle for the widget callbacks.
///
/// Pushing copies the record into the matching ring and returns at once.
/// Handles are cheap to clone and may be moved to other threads.
#[derive(Debug, Clone)]
pub struct EventProducer {
    queues: Arc<EventQueues>,
}

impl EventProducer {
    pub(crate) fn new(queues: Arc<EventQueues>) -> Self {
        Self { queues }
    }

    /// Queue a keyboard record.
    pub fn push_keyboard(&self, event: KbdEvent) -> PushOutcome<KbdEvent> {
        self.queues.keyboard.push(event)
    }

    /// Queue a pointer record.
    pub fn push_position(&self, event: PosEvent) -> PushOutcome<PosEvent> {
        self.queues.pointer.push(event)
    }

    pub fn queue_stats(&self) -> QueueStats {
        self.queues.stats()
    }
}
