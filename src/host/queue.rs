//! Dispatch targets on the host side.
//!
//! The pump talks to the host through [`EventSink`]: one call per normalized
//! event, each reporting whether the host accepted it. [`HostEventQueue`] is a
//! bounded in-process sink the host main loop can poll.

use std::collections::VecDeque;

use super::keysym::Keysym;

/// Default host queue length (the host library's `MAXEVENTS`).
pub const DEFAULT_HOST_QUEUE_LEN: usize = 128;

/// Key or button direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

impl ButtonState {
    /// `SDL_PRESSED` / `SDL_RELEASED`.
    pub fn raw(self) -> u8 {
        match self {
            ButtonState::Pressed => 1,
            ButtonState::Released => 0,
        }
    }
}

/// A normalized event as posted to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Key { state: ButtonState, keysym: Keysym },
    MouseButton { state: ButtonState, button: u8 },
    MouseMotion { x: i32, y: i32 },
}

/// Receiver of normalized events. Each method returns `true` when the host
/// accepted (posted) the event.
pub trait EventSink {
    /// Key state changed.
    fn key(&mut self, state: ButtonState, keysym: &Keysym) -> bool;

    /// Pointer button state changed.
    fn mouse_button(&mut self, state: ButtonState, button: u8) -> bool;

    /// Pointer moved to an absolute position.
    fn mouse_motion(&mut self, x: i32, y: i32) -> bool;
}

/// Bounded FIFO of host events. Refuses events once full.
#[derive(Debug)]
pub struct HostEventQueue {
    events: VecDeque<HostEvent>,
    capacity: usize,
}

impl HostEventQueue {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HOST_QUEUE_LEN)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Post an event. Returns false if the queue is full.
    pub fn post(&mut self, event: HostEvent) -> bool {
        if self.events.len() >= self.capacity {
            return false;
        }
        self.events.push_back(event);
        true
    }

    /// Take the oldest event.
    pub fn poll(&mut self) -> Option<HostEvent> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Take all queued events, oldest first.
    pub fn drain(&mut self) -> Vec<HostEvent> {
        self.events.drain(..).collect()
    }
}

impl Default for HostEventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for HostEventQueue {
    fn key(&mut self, state: ButtonState, keysym: &Keysym) -> bool {
        self.post(HostEvent::Key { state, keysym: *keysym })
    }

    fn mouse_button(&mut self, state: ButtonState, button: u8) -> bool {
        self.post(HostEvent::MouseButton { state, button })
    }

    fn mouse_motion(&mut self, x: i32, y: i32) -> bool {
        self.post(HostEvent::MouseMotion { x, y })
    }
}
