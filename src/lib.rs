//! # helenos-canvas-events
//!
//! Input event bridge for a canvas-backed video driver.
//!
//! The canvas widget reports keyboard and pointer input through callbacks
//! that may fire on any thread. The host library consumes input only from
//! its main loop. This crate sits between the two: callbacks copy records
//! into bounded rings, and the pump later drains them, translates native
//! keycodes to host keys and posts host events.
//!
//! ## Architecture
//!
//! ```text
//! widget callback ─▶ EventProducer ─▶ [keyboard ring] [pointer ring] ─▶ EventPump ─▶ EventSink
//! ```
//!
//! ## Modules
//!
//! - [`native`] - Native keycodes and event records
//! - [`host`] - Host keys, keysyms, modifiers and event sink
//! - [`bridge`] - Rings, producer, keymap and pump
//! - [`ffi`] - C ABI for the video backend
//! - [`terminal`] - crossterm input source for off-target runs
//! - [`error`] - Bridge errors and their status codes

pub mod bridge;
pub mod error;
pub mod ffi;
pub mod host;
pub mod native;
pub mod terminal;

pub use bridge::{
    BridgeConfig, EventProducer, EventPump, Keymap, OverflowPolicy, PointerPosition, PumpReport,
    PumpTotals, PushOutcome, QueueStats, channel,
};

pub use error::BridgeError;

pub use host::{ButtonState, EventSink, HostEvent, HostEventQueue, Key, Keysym, Modifiers};

pub use native::{KbdEvent, KbdEventKind, Keycode, PosEvent, PosEventKind};
