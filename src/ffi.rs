//! C ABI for the video backend.
//!
//! The canvas widget signals input through two callbacks, and the host
//! library drives the pump from its main loop through plain functions. Both
//! sides expect free functions, so this module keeps exactly one bridge per
//! process.
//!
//! ```text
//! canvas_events_init(50, 0)          // VideoInit
//! canvas_events_init_keymap()        // InitOSKeymap
//! sig_connect(.., canvas_push_keyboard_event)
//! sig_connect(.., canvas_push_position_event)
//! canvas_events_pump(&callbacks)     // PumpEvents, every frame
//! ```

use std::sync::{Mutex, MutexGuard, OnceLock};

use libc::{c_int, c_void};

use crate::bridge::{self, BridgeConfig, EventProducer, EventPump};
use crate::error::BridgeError;
use crate::host::{ButtonState, EventSink, Keysym};
use crate::native::{KbdEvent, PosEvent, RawKbdEvent, RawPosEvent};

// =============================================================================
// HOST CALLBACKS
// =============================================================================

/// Keysym layout handed to the host keyboard callback.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawKeysym {
    pub scancode: u8,
    pub sym: u32,
    pub modifiers: u32,
    pub unicode: u16,
}

impl From<&Keysym> for RawKeysym {
    fn from(keysym: &Keysym) -> Self {
        let scancode = u8::try_from(keysym.scancode).unwrap_or_else(|_| {
            log::debug!("[canvas-events] scancode {} saturated to {}", keysym.scancode, u8::MAX);
            u8::MAX
        });
        Self {
            scancode,
            sym: keysym.sym.raw(),
            modifiers: u32::from(keysym.modifiers.bits()),
            unicode: keysym.unicode,
        }
    }
}

pub type KeyboardFn = unsafe extern "C" fn(state: u8, keysym: *const RawKeysym) -> c_int;
pub type MouseButtonFn = unsafe extern "C" fn(state: u8, button: u8, x: i16, y: i16) -> c_int;
pub type MouseMotionFn =
    unsafe extern "C" fn(buttonstate: u8, relative: c_int, x: i16, y: i16) -> c_int;

/// Host dispatch entry points. A missing entry refuses every event.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct HostCallbacks {
    pub keyboard: Option<KeyboardFn>,
    pub mouse_button: Option<MouseButtonFn>,
    pub mouse_motion: Option<MouseMotionFn>,
}

struct CallbackSink<'a> {
    host: &'a HostCallbacks,
}

impl EventSink for CallbackSink<'_> {
    fn key(&mut self, state: ButtonState, keysym: &Keysym) -> bool {
        let Some(f) = self.host.keyboard else { return false };
        let raw = RawKeysym::from(keysym);
        unsafe { f(state.raw(), &raw) != 0 }
    }

    fn mouse_button(&mut self, state: ButtonState, button: u8) -> bool {
        let Some(f) = self.host.mouse_button else { return false };
        // (0, 0) means "at the current pointer position".
        unsafe { f(state.raw(), button, 0, 0) != 0 }
    }

    fn mouse_motion(&mut self, x: i32, y: i32) -> bool {
        let Some(f) = self.host.mouse_motion else { return false };
        // Absolute move, no buttons reported.
        unsafe { f(0, 0, coordinate(x), coordinate(y)) != 0 }
    }
}

/// Narrow a pointer coordinate to the host's 16 bits, saturating.
fn coordinate(value: i32) -> i16 {
    let narrowed = value.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16;
    if i32::from(narrowed) != value {
        log::debug!("[canvas-events] coordinate {} saturated to {}", value, narrowed);
    }
    narrowed
}

// =============================================================================
// GLOBAL STATE
// =============================================================================

struct Bridge {
    producer: EventProducer,
    pump: Mutex<EventPump>,
}

impl Bridge {
    fn pump(&self) -> MutexGuard<'_, EventPump> {
        self.pump.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// The process-wide bridge, created by `canvas_events_init`.
static BRIDGE: OnceLock<Bridge> = OnceLock::new();

fn bridge() -> Result<&'static Bridge, BridgeError> {
    BRIDGE.get().ok_or(BridgeError::NotInitialized)
}

fn init(config: BridgeConfig) -> Result<(), BridgeError> {
    if BRIDGE.get().is_some() {
        return Err(BridgeError::AlreadyInitialized);
    }
    let (producer, pump) = bridge::channel(config)?;
    BRIDGE
        .set(Bridge { producer, pump: Mutex::new(pump) })
        .map_err(|_| BridgeError::AlreadyInitialized)
}

// =============================================================================
// FFI EXPORTS
// =============================================================================

/// Create the bridge.
///
/// Returns 0 on success, 1 if already initialized, 2 if `queue_len` is 0.
#[unsafe(no_mangle)]
pub extern "C" fn canvas_events_init(queue_len: u32, translate_unicode: u32) -> u32 {
    let config = BridgeConfig {
        queue_len: queue_len as usize,
        translate_unicode: translate_unicode != 0,
        ..BridgeConfig::default()
    };
    match init(config) {
        Ok(()) => {
            log::info!("[canvas-events] initialized with {} slots per ring", queue_len);
            0
        }
        Err(e) => {
            log::warn!("[canvas-events] init failed: {}", e);
            e.code()
        }
    }
}

/// Load the keycode table. Returns 0, or 3 if the bridge does not exist.
#[unsafe(no_mangle)]
pub extern "C" fn canvas_events_init_keymap() -> u32 {
    match bridge() {
        Ok(b) => {
            b.pump().init_keymap();
            0
        }
        Err(e) => e.code(),
    }
}

/// Keyboard callback for the canvas widget.
///
/// # Safety
///
/// `data` must be null or point to a valid `RawKbdEvent` for the duration of
/// the call. The pointer is not retained.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn canvas_push_keyboard_event(_widget: *mut c_void, data: *mut c_void) {
    let Some(raw) = (unsafe { (data as *const RawKbdEvent).as_ref() }) else {
        log::debug!("[canvas-events] null keyboard event dropped");
        return;
    };
    match bridge() {
        Ok(b) => {
            b.producer.push_keyboard(KbdEvent::from(raw));
        }
        Err(_) => log::debug!("[canvas-events] keyboard event before init dropped"),
    }
}

/// Position callback for the canvas widget.
///
/// # Safety
///
/// `data` must be null or point to a valid `RawPosEvent` for the duration of
/// the call. The pointer is not retained.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn canvas_push_position_event(_widget: *mut c_void, data: *mut c_void) {
    let Some(raw) = (unsafe { (data as *const RawPosEvent).as_ref() }) else {
        log::debug!("[canvas-events] null position event dropped");
        return;
    };
    match bridge() {
        Ok(b) => {
            b.producer.push_position(PosEvent::from(raw));
        }
        Err(_) => log::debug!("[canvas-events] position event before init dropped"),
    }
}

/// Drain pending input into the host. Returns the number of posted events.
///
/// # Safety
///
/// `host` must be null or point to a valid `HostCallbacks` whose function
/// pointers are safe to call from this thread.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn canvas_events_pump(host: *const HostCallbacks) -> u32 {
    let Some(host) = (unsafe { host.as_ref() }) else {
        return 0;
    };
    let Ok(b) = bridge() else {
        return 0;
    };
    let mut sink = CallbackSink { host };
    b.pump().pump(&mut sink).posted
}

/// Turn character reporting in keysyms on (non-zero) or off.
#[unsafe(no_mangle)]
pub extern "C" fn canvas_events_set_unicode(enabled: u32) {
    if let Ok(b) = bridge() {
        b.pump().set_unicode_translation(enabled != 0);
    }
}

/// Records lost to full rings so far, keyboard and pointer combined.
#[unsafe(no_mangle)]
pub extern "C" fn canvas_events_overflow_count() -> u64 {
    bridge().map_or(0, |b| b.producer.queue_stats().total_overflows())
}
