//! Native input event records.
//!
//! The canvas widget signals keyboard and position events with a pointer to a
//! C record. The `Raw*` types describe that layout; `KbdEvent` and `PosEvent`
//! are the owned copies that travel through the rings.

use super::keycode::Keycode;

// =============================================================================
// C LAYOUT
// =============================================================================

/// `KEY_PRESS` in `kbd_event_type_t`.
pub const KEY_PRESS: u32 = 0;
/// `KEY_RELEASE` in `kbd_event_type_t`.
pub const KEY_RELEASE: u32 = 1;

/// `POS_UPDATE` in `pos_event_type_t`.
pub const POS_UPDATE: u32 = 0;
/// `POS_PRESS` in `pos_event_type_t`.
pub const POS_PRESS: u32 = 1;
/// `POS_RELEASE` in `pos_event_type_t`.
pub const POS_RELEASE: u32 = 2;

/// Keyboard event payload as passed to the keyboard callback (`kbd_event_t`).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawKbdEvent {
    /// `link_t` list handle (prev, next). Never followed.
    pub link: [usize; 2],
    pub kind: u32,
    pub key: u32,
    /// Modifier mask. Carried by the widget but not translated.
    pub mods: u32,
    pub c: u32,
}

/// Position event payload as passed to the position callback.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawPosEvent {
    pub pos_id: usize,
    pub kind: u32,
    pub btn_num: usize,
    pub hpos: usize,
    pub vpos: usize,
}

impl RawKbdEvent {
    pub fn new(kind: u32, key: u32, mods: u32, c: u32) -> Self {
        Self { link: [0; 2], kind, key, mods, c }
    }
}

// =============================================================================
// KEYBOARD
// =============================================================================

/// Keyboard event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KbdEventKind {
    Press,
    Release,
    /// A kind this bridge does not know. Kept so the pump can skip it.
    Other(u32),
}

impl From<u32> for KbdEventKind {
    fn from(raw: u32) -> Self {
        match raw {
            KEY_PRESS => Self::Press,
            KEY_RELEASE => Self::Release,
            other => Self::Other(other),
        }
    }
}

/// Keyboard event record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KbdEvent {
    pub kind: KbdEventKind,
    /// Raw native keycode, see [`Keycode`].
    pub key: u32,
    /// Character produced by the key, as a codepoint (0 if none).
    pub c: u32,
}

impl KbdEvent {
    /// Key press for a known keycode.
    pub fn press(key: Keycode, c: char) -> Self {
        Self {
            kind: KbdEventKind::Press,
            key: key.raw(),
            c: c as u32,
        }
    }

    /// Key release for a known keycode.
    pub fn release(key: Keycode, c: char) -> Self {
        Self {
            kind: KbdEventKind::Release,
            key: key.raw(),
            c: c as u32,
        }
    }

    /// The keycode, if the raw value is a known one.
    pub fn keycode(&self) -> Option<Keycode> {
        Keycode::from_raw(self.key)
    }
}

impl From<&RawKbdEvent> for KbdEvent {
    fn from(raw: &RawKbdEvent) -> Self {
        Self {
            kind: raw.kind.into(),
            key: raw.key,
            c: raw.c,
        }
    }
}

// =============================================================================
// POINTER
// =============================================================================

/// Position event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosEventKind {
    Update,
    Press,
    Release,
    Other(u32),
}

impl From<u32> for PosEventKind {
    fn from(raw: u32) -> Self {
        match raw {
            POS_UPDATE => Self::Update,
            POS_PRESS => Self::Press,
            POS_RELEASE => Self::Release,
            other => Self::Other(other),
        }
    }
}

/// Pointer event record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosEvent {
    pub kind: PosEventKind,
    /// Button number: 1 primary, 2 secondary, 3 middle.
    pub btn_num: u32,
    pub hpos: i32,
    pub vpos: i32,
}

impl PosEvent {
    pub fn press(btn_num: u32) -> Self {
        Self { kind: PosEventKind::Press, btn_num, hpos: 0, vpos: 0 }
    }

    pub fn release(btn_num: u32) -> Self {
        Self { kind: PosEventKind::Release, btn_num, hpos: 0, vpos: 0 }
    }

    /// Absolute pointer move.
    pub fn moved(hpos: i32, vpos: i32) -> Self {
        Self { kind: PosEventKind::Update, btn_num: 0, hpos, vpos }
    }
}

impl From<&RawPosEvent> for PosEvent {
    fn from(raw: &RawPosEvent) -> Self {
        // sysarg_t coordinates; the widget reports them relative to the
        // canvas, so they fit in 32 bits.
        Self {
            kind: raw.kind.into(),
            btn_num: raw.btn_num as u32,
            hpos: raw.hpos as i32,
            vpos: raw.vpos as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kbd_kind_from_raw() {
        assert_eq!(KbdEventKind::from(KEY_PRESS), KbdEventKind::Press);
        assert_eq!(KbdEventKind::from(KEY_RELEASE), KbdEventKind::Release);
        assert_eq!(KbdEventKind::from(7), KbdEventKind::Other(7));
    }

    #[test]
    fn test_pos_kind_from_raw() {
        assert_eq!(PosEventKind::from(POS_UPDATE), PosEventKind::Update);
        assert_eq!(PosEventKind::from(POS_PRESS), PosEventKind::Press);
        assert_eq!(PosEventKind::from(POS_RELEASE), PosEventKind::Release);
        assert_eq!(PosEventKind::from(9), PosEventKind::Other(9));
    }

    #[test]
    fn test_kbd_event_from_raw_keeps_unknown_keycode() {
        let raw = RawKbdEvent::new(KEY_PRESS, 200, 0x3, 'x' as u32);
        let ev = KbdEvent::from(&raw);
        assert_eq!(ev.kind, KbdEventKind::Press);
        assert_eq!(ev.key, 200);
        assert_eq!(ev.c, 'x' as u32);
        assert_eq!(ev.keycode(), None);
    }

    #[test]
    fn test_pos_event_from_raw() {
        let raw = RawPosEvent { pos_id: 4, kind: POS_UPDATE, btn_num: 0, hpos: 120, vpos: 45 };
        assert_eq!(PosEvent::from(&raw), PosEvent::moved(120, 45));

        let raw = RawPosEvent { pos_id: 4, kind: POS_PRESS, btn_num: 2, hpos: 0, vpos: 0 };
        let ev = PosEvent::from(&raw);
        assert_eq!(ev.kind, PosEventKind::Press);
        assert_eq!(ev.btn_num, 2);
    }

    #[test]
    fn test_constructors() {
        let ev = KbdEvent::press(Keycode::Q, 'q');
        assert_eq!(ev.keycode(), Some(Keycode::Q));
        assert_eq!(ev.c, 'q' as u32);
        assert_eq!(KbdEvent::release(Keycode::Q, 'q').kind, KbdEventKind::Release);
    }

    #[test]
    fn test_kbd_layout_matches_kbd_event_t() {
        use std::mem::{offset_of, size_of};

        let word = size_of::<usize>();
        assert_eq!(offset_of!(RawKbdEvent, link), 0);
        assert_eq!(offset_of!(RawKbdEvent, kind), 2 * word);
        assert_eq!(offset_of!(RawKbdEvent, key), 2 * word + 4);
        assert_eq!(offset_of!(RawKbdEvent, mods), 2 * word + 8);
        assert_eq!(offset_of!(RawKbdEvent, c), 2 * word + 12);
        assert_eq!(size_of::<RawKbdEvent>(), 2 * word + 16);
    }

    #[test]
    fn test_list_handle_is_not_read_as_kind() {
        let mut raw = RawKbdEvent::new(KEY_RELEASE, Keycode::A.raw(), 0, 'a' as u32);
        raw.link = [0xdead_b000, 0xbeef_f000];
        let ev = KbdEvent::from(&raw);
        assert_eq!(ev.kind, KbdEventKind::Release);
        assert_eq!(ev.keycode(), Some(Keycode::A));
    }

    #[test]
    fn test_pos_layout_matches_pos_event_t() {
        use std::mem::{offset_of, size_of};

        let word = size_of::<usize>();
        assert_eq!(offset_of!(RawPosEvent, pos_id), 0);
        assert_eq!(offset_of!(RawPosEvent, kind), word);
        assert_eq!(offset_of!(RawPosEvent, btn_num), 2 * word);
        assert_eq!(offset_of!(RawPosEvent, hpos), 3 * word);
        assert_eq!(offset_of!(RawPosEvent, vpos), 4 * word);
    }
}
