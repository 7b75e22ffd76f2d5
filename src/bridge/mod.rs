//! The event bridge: rings, producer handle, keymap and pump.
//!
//! # Architecture
//!
//! ```text
//! canvas callback ─┐                       ┌─ keyboard ring ─┐
//!                  ├─ EventProducer ──push─┤                 ├─ EventPump ─▶ EventSink
//! terminal reader ─┘                       └─ pointer ring  ─┘      │
//!                                                                Keymap
//! ```
//!
//! [`channel`] builds one bridge and returns its two ends. The producer may
//! live on any thread; the pump stays with the host main loop.

mod keymap;
mod producer;
mod pump;
mod ring;

use std::sync::Arc;

pub use keymap::Keymap;
pub use producer::EventProducer;
pub use pump::{EventPump, PointerPosition, PumpReport, PumpTotals};
pub use ring::{DEFAULT_QUEUE_LEN, EventRing, OverflowPolicy, PushOutcome, RingStats};

use crate::error::BridgeError;
use crate::native::{KbdEvent, PosEvent};

// =============================================================================
// CONFIG
// =============================================================================

/// Bridge settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Slots per ring.
    pub queue_len: usize,
    /// What a full ring does.
    pub overflow: OverflowPolicy,
    /// Copy produced characters into `Keysym::unicode`.
    pub translate_unicode: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            queue_len: DEFAULT_QUEUE_LEN,
            overflow: OverflowPolicy::DropOldest,
            translate_unicode: false,
        }
    }
}

impl BridgeConfig {
    pub fn validate(&self) -> Result<(), BridgeError> {
        if self.queue_len == 0 {
            return Err(BridgeError::ZeroCapacity);
        }
        Ok(())
    }
}

// =============================================================================
// SHARED QUEUES
// =============================================================================

/// The two rings shared between producer and pump.
#[derive(Debug)]
pub(crate) struct EventQueues {
    pub(crate) keyboard: EventRing<KbdEvent>,
    pub(crate) pointer: EventRing<PosEvent>,
}

impl EventQueues {
    fn new(config: &BridgeConfig) -> Self {
        Self {
            keyboard: EventRing::new("keyboard", config.queue_len, config.overflow),
            pointer: EventRing::new("pointer", config.queue_len, config.overflow),
        }
    }

    pub(crate) fn stats(&self) -> QueueStats {
        QueueStats {
            keyboard: self.keyboard.stats(),
            pointer: self.pointer.stats(),
        }
    }
}

/// Counters for both rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueueStats {
    pub keyboard: RingStats,
    pub pointer: RingStats,
}

impl QueueStats {
    /// Records lost across both rings.
    pub fn total_overflows(&self) -> u64 {
        self.keyboard.overflows + self.pointer.overflows
    }
}

/// Create a bridge.
///
/// The keymap starts empty; call [`EventPump::init_keymap`] before the first
/// pump.
pub fn channel(config: BridgeConfig) -> Result<(EventProducer, EventPump), BridgeError> {
    config.validate()?;

    let queues = Arc::new(EventQueues::new(&config));
    log::debug!(
        "[canvas-events] bridge created: {} slots per ring, {:?}",
        config.queue_len,
        config.overflow
    );

    Ok((
        EventProducer::new(Arc::clone(&queues)),
        EventPump::new(queues, config.translate_unicode),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BridgeConfig::default();
        assert_eq!(config.queue_len, 50);
        assert_eq!(config.overflow, OverflowPolicy::DropOldest);
        assert!(!config.translate_unicode);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = BridgeConfig { queue_len: 0, ..BridgeConfig::default() };
        assert_eq!(config.validate(), Err(BridgeError::ZeroCapacity));
        assert!(matches!(channel(config), Err(BridgeError::ZeroCapacity)));
    }

    #[test]
    fn test_channel_rings_are_independent() {
        let (producer, pump) = channel(BridgeConfig { queue_len: 2, ..BridgeConfig::default() })
            .expect("valid config");
        producer.push_position(PosEvent::press(1));
        producer.push_position(PosEvent::press(2));
        producer.push_position(PosEvent::press(3));

        let stats = pump.queue_stats();
        assert_eq!(stats.keyboard.pending, 0);
        assert_eq!(stats.keyboard.overflows, 0);
        assert_eq!(stats.pointer.pending, 2);
        assert_eq!(stats.pointer.overflows, 1);
        assert_eq!(stats.total_overflows(), 1);
    }
}
