//! Event pump - drains both rings into the host.
//!
//! Called from the host main loop. One call:
//! 1. pops the pending keyboard records, translates and dispatches them
//! 2. pops the pending pointer records, dropping moves to the current position
//! 3. reports how many dispatches the host accepted
//!
//! Keyboard records always go out before pointer records. Order within each
//! class is preserved.

use std::sync::Arc;

use super::keymap::Keymap;
use super::{EventQueues, QueueStats};
use crate::host::{ButtonState, EventSink};
use crate::native::{KbdEvent, KbdEventKind, PosEvent, PosEventKind};

/// Last absolute pointer position seen by the pump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// Outcome of a single [`EventPump::pump`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PumpReport {
    /// Dispatches the host accepted.
    pub posted: u32,
    /// Dispatches the host refused.
    pub rejected: u32,
    /// Moves dropped because the position did not change.
    pub suppressed_moves: u32,
    /// Records of a kind the pump does not handle.
    pub ignored: u32,
}

impl PumpReport {
    /// Records taken off the rings.
    pub fn drained(&self) -> u32 {
        self.posted + self.rejected + self.suppressed_moves + self.ignored
    }
}

/// Running totals across all pump calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PumpTotals {
    pub pumps: u64,
    pub posted: u64,
    pub rejected: u64,
    pub suppressed_moves: u64,
    pub ignored: u64,
    /// Keys translated while the keymap was still empty.
    pub uninitialized_translations: u64,
}

impl PumpTotals {
    fn add(&mut self, report: &PumpReport) {
        self.pumps += 1;
        self.posted += u64::from(report.posted);
        self.rejected += u64::from(report.rejected);
        self.suppressed_moves += u64::from(report.suppressed_moves);
        self.ignored += u64::from(report.ignored);
    }
}

/// Consumer end of the bridge.
#[derive(Debug)]
pub struct EventPump {
    queues: Arc<EventQueues>,
    keymap: Keymap,
    translate_unicode: bool,
    last_position: PointerPosition,
    totals: PumpTotals,
    warned_uninitialized: bool,
}

impl EventPump {
    pub(crate) fn new(queues: Arc<EventQueues>, translate_unicode: bool) -> Self {
        Self {
            queues,
            keymap: Keymap::new(),
            translate_unicode,
            last_position: PointerPosition::default(),
            totals: PumpTotals::default(),
            warned_uninitialized: false,
        }
    }

    /// Load the keycode table. Idempotent.
    pub fn init_keymap(&mut self) {
        if !self.keymap.is_initialized() {
            self.keymap.init();
            log::debug!("[canvas-events] keymap loaded ({} keys)", self.keymap.mapped_count());
        }
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn set_unicode_translation(&mut self, enabled: bool) {
        self.translate_unicode = enabled;
    }

    pub fn unicode_translation(&self) -> bool {
        self.translate_unicode
    }

    pub fn last_position(&self) -> PointerPosition {
        self.last_position
    }

    pub fn totals(&self) -> PumpTotals {
        self.totals
    }

    pub fn queue_stats(&self) -> QueueStats {
        self.queues.stats()
    }

    /// Drain both rings into `sink`.
    ///
    /// Each ring is drained up to the records pending when its drain starts,
    /// so one call handles at most `capacity` records per ring. Records
    /// pushed meanwhile wait for the next pump.
    pub fn pump<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> PumpReport {
        let mut report = PumpReport::default();

        for _ in 0..self.queues.keyboard.pending_count() {
            let Some(event) = self.queues.keyboard.pop() else { break };
            self.dispatch_key(sink, &event, &mut report);
        }

        for _ in 0..self.queues.pointer.pending_count() {
            let Some(event) = self.queues.pointer.pop() else { break };
            self.dispatch_pointer(sink, &event, &mut report);
        }

        self.totals.add(&report);
        if report.drained() > 0 {
            log::trace!("[canvas-events] pump: {:?}", report);
        }
        report
    }

    fn dispatch_key<S: EventSink + ?Sized>(
        &mut self,
        sink: &mut S,
        event: &KbdEvent,
        report: &mut PumpReport,
    ) {
        let state = match event.kind {
            KbdEventKind::Press => ButtonState::Pressed,
            KbdEventKind::Release => ButtonState::Released,
            KbdEventKind::Other(kind) => {
                log::debug!("[canvas-events] ignoring keyboard event kind {}", kind);
                report.ignored += 1;
                return;
            }
        };

        if !self.keymap.is_initialized() {
            self.totals.uninitialized_translations += 1;
            if !self.warned_uninitialized {
                self.warned_uninitialized = true;
                log::warn!("[canvas-events] keymap not initialized, keys translate as unknown");
            }
        }

        let keysym = self.keymap.translate(event, self.translate_unicode);
        tally(report, sink.key(state, &keysym));
    }

    fn dispatch_pointer<S: EventSink + ?Sized>(
        &mut self,
        sink: &mut S,
        event: &PosEvent,
        report: &mut PumpReport,
    ) {
        match event.kind {
            PosEventKind::Press => {
                tally(report, sink.mouse_button(ButtonState::Pressed, event.btn_num as u8));
            }
            PosEventKind::Release => {
                tally(report, sink.mouse_button(ButtonState::Released, event.btn_num as u8));
            }
            PosEventKind::Update => {
                let position = PointerPosition { x: event.hpos, y: event.vpos };
                if position == self.last_position {
                    report.suppressed_moves += 1;
                    return;
                }
                self.last_position = position;
                tally(report, sink.mouse_motion(position.x, position.y));
            }
            PosEventKind::Other(kind) => {
                log::debug!("[canvas-events] ignoring position event kind {}", kind);
                report.ignored += 1;
            }
        }
    }
}

#[inline]
fn tally(report: &mut PumpReport, accepted: bool) {
    if accepted {
        report.posted += 1;
    } else {
        report.rejected += 1;
    }
}
