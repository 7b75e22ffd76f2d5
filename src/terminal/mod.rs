//! Terminal input source.
//!
//! Bridges crossterm's event system to native canvas records, so a terminal
//! can stand in for the canvas widget when running off-target. Converted
//! records go through the same [`EventProducer`] as the widget callbacks.
//!
//! # API
//!
//! - `convert_key_event` - crossterm KeyEvent → native keyboard record
//! - `convert_mouse_event` - crossterm MouseEvent → native position record
//! - `forward_event` - convert and push in one step
//! - `TerminalReader` - background thread doing the above
//! - `enable_mouse` / `disable_mouse` - control mouse capture
//!
//! # Example
//!
//! ```ignore
//! use helenos_canvas_events::{bridge, terminal, HostEventQueue};
//!
//! let (producer, mut pump) = bridge::channel(Default::default())?;
//! pump.init_keymap();
//! let _reader = terminal::TerminalReader::spawn(producer)?;
//!
//! let mut host = HostEventQueue::new();
//! loop {
//!     pump.pump(&mut host);
//!     while let Some(event) = host.poll() { /* ... */ }
//! }
//! ```

mod reader;

pub use reader::TerminalReader;

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyCode, KeyEvent,
    KeyEventKind, KeyEventState, ModifierKeyCode, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use std::io::stdout;

use crate::bridge::EventProducer;
use crate::native::{KbdEvent, KbdEventKind, Keycode, PosEvent, PosEventKind};

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert a crossterm key event to a native keyboard record.
///
/// Returns `None` for keys the native keyboard does not have.
pub fn convert_key_event(event: KeyEvent) -> Option<KbdEvent> {
    let keypad = event.state.contains(KeyEventState::KEYPAD);
    let (key, c) = match event.code {
        KeyCode::Char(ch) if keypad => (keypad_keycode(ch)?, ch),
        KeyCode::Char(ch) => (char_keycode(ch)?, ch),
        KeyCode::Enter if keypad => (Keycode::NEnter, '\n'),
        KeyCode::Enter => (Keycode::Enter, '\n'),
        KeyCode::Tab | KeyCode::BackTab => (Keycode::Tab, '\t'),
        KeyCode::Backspace => (Keycode::Backspace, '\x08'),
        KeyCode::Esc => (Keycode::Escape, '\0'),
        KeyCode::Up => (Keycode::Up, '\0'),
        KeyCode::Down => (Keycode::Down, '\0'),
        KeyCode::Left => (Keycode::Left, '\0'),
        KeyCode::Right => (Keycode::Right, '\0'),
        KeyCode::Home => (Keycode::Home, '\0'),
        KeyCode::End => (Keycode::End, '\0'),
        KeyCode::PageUp => (Keycode::PageUp, '\0'),
        KeyCode::PageDown => (Keycode::PageDown, '\0'),
        KeyCode::Insert => (Keycode::Insert, '\0'),
        KeyCode::Delete => (Keycode::Delete, '\0'),
        KeyCode::F(n) => (function_keycode(n)?, '\0'),
        KeyCode::CapsLock => (Keycode::CapsLock, '\0'),
        KeyCode::ScrollLock => (Keycode::ScrollLock, '\0'),
        KeyCode::NumLock => (Keycode::NumLock, '\0'),
        KeyCode::PrintScreen => (Keycode::PrtScr, '\0'),
        KeyCode::Pause => (Keycode::Pause, '\0'),
        KeyCode::Modifier(m) => (modifier_keycode(m)?, '\0'),
        _ => return None,
    };

    let kind = match event.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => KbdEventKind::Press,
        KeyEventKind::Release => KbdEventKind::Release,
    };

    Some(KbdEvent { kind, key: key.raw(), c: c as u32 })
}

/// Keycode for a printable character on a US layout. Shifted symbols map to
/// the key that produces them.
fn char_keycode(ch: char) -> Option<Keycode> {
    let code = match ch.to_ascii_lowercase() {
        'a' => Keycode::A,
        'b' => Keycode::B,
        'c' => Keycode::C,
        'd' => Keycode::D,
        'e' => Keycode::E,
        'f' => Keycode::F,
        'g' => Keycode::G,
        'h' => Keycode::H,
        'i' => Keycode::I,
        'j' => Keycode::J,
        'k' => Keycode::K,
        'l' => Keycode::L,
        'm' => Keycode::M,
        'n' => Keycode::N,
        'o' => Keycode::O,
        'p' => Keycode::P,
        'q' => Keycode::Q,
        'r' => Keycode::R,
        's' => Keycode::S,
        't' => Keycode::T,
        'u' => Keycode::U,
        'v' => Keycode::V,
        'w' => Keycode::W,
        'x' => Keycode::X,
        'y' => Keycode::Y,
        'z' => Keycode::Z,
        '1' | '!' => Keycode::Num1,
        '2' | '@' => Keycode::Num2,
        '3' | '#' => Keycode::Num3,
        '4' | '$' => Keycode::Num4,
        '5' | '%' => Keycode::Num5,
        '6' | '^' => Keycode::Num6,
        '7' | '&' => Keycode::Num7,
        '8' | '*' => Keycode::Num8,
        '9' | '(' => Keycode::Num9,
        '0' | ')' => Keycode::Num0,
        '-' | '_' => Keycode::Minus,
        '=' | '+' => Keycode::Equals,
        '[' | '{' => Keycode::LBracket,
        ']' | '}' => Keycode::RBracket,
        ';' | ':' => Keycode::Semicolon,
        '\'' | '"' => Keycode::Quote,
        '\\' | '|' => Keycode::Backslash,
        '`' | '~' => Keycode::Backtick,
        ',' | '<' => Keycode::Comma,
        '.' | '>' => Keycode::Period,
        '/' | '?' => Keycode::Slash,
        ' ' => Keycode::Space,
        _ => return None,
    };
    Some(code)
}

fn keypad_keycode(ch: char) -> Option<Keycode> {
    let code = match ch {
        '0' => Keycode::N0,
        '1' => Keycode::N1,
        '2' => Keycode::N2,
        '3' => Keycode::N3,
        '4' => Keycode::N4,
        '5' => Keycode::N5,
        '6' => Keycode::N6,
        '7' => Keycode::N7,
        '8' => Keycode::N8,
        '9' => Keycode::N9,
        '.' => Keycode::NPeriod,
        '/' => Keycode::NSlash,
        '*' => Keycode::NTimes,
        '-' => Keycode::NMinus,
        '+' => Keycode::NPlus,
        _ => return None,
    };
    Some(code)
}

fn function_keycode(n: u8) -> Option<Keycode> {
    let code = match n {
        1 => Keycode::F1,
        2 => Keycode::F2,
        3 => Keycode::F3,
        4 => Keycode::F4,
        5 => Keycode::F5,
        6 => Keycode::F6,
        7 => Keycode::F7,
        8 => Keycode::F8,
        9 => Keycode::F9,
        10 => Keycode::F10,
        11 => Keycode::F11,
        12 => Keycode::F12,
        _ => return None,
    };
    Some(code)
}

fn modifier_keycode(m: ModifierKeyCode) -> Option<Keycode> {
    let code = match m {
        ModifierKeyCode::LeftShift => Keycode::LShift,
        ModifierKeyCode::RightShift => Keycode::RShift,
        ModifierKeyCode::LeftControl => Keycode::LCtrl,
        ModifierKeyCode::RightControl => Keycode::RCtrl,
        ModifierKeyCode::LeftAlt => Keycode::LAlt,
        ModifierKeyCode::RightAlt => Keycode::RAlt,
        _ => return None,
    };
    Some(code)
}

// =============================================================================
// MOUSE EVENT CONVERSION
// =============================================================================

/// Convert a crossterm mouse event to a native position record.
///
/// Buttons are numbered 1 (left), 2 (right), 3 (middle). Drags become plain
/// moves; scrolling has no native counterpart.
pub fn convert_mouse_event(event: MouseEvent) -> Option<PosEvent> {
    let (kind, btn_num) = match event.kind {
        MouseEventKind::Down(btn) => (PosEventKind::Press, button_number(btn)),
        MouseEventKind::Up(btn) => (PosEventKind::Release, button_number(btn)),
        MouseEventKind::Drag(_) | MouseEventKind::Moved => (PosEventKind::Update, 0),
        MouseEventKind::ScrollUp
        | MouseEventKind::ScrollDown
        | MouseEventKind::ScrollLeft
        | MouseEventKind::ScrollRight => return None,
    };

    Some(PosEvent {
        kind,
        btn_num,
        hpos: i32::from(event.column),
        vpos: i32::from(event.row),
    })
}

fn button_number(btn: MouseButton) -> u32 {
    match btn {
        MouseButton::Left => 1,
        MouseButton::Right => 2,
        MouseButton::Middle => 3,
    }
}

// =============================================================================
// FORWARDING
// =============================================================================

/// Convert a terminal event and queue it. Returns true if a record was
/// queued.
pub fn forward_event(producer: &EventProducer, event: CrosstermEvent) -> bool {
    match event {
        CrosstermEvent::Key(key) => match convert_key_event(key) {
            Some(record) => producer.push_keyboard(record).is_queued(),
            None => false,
        },
        CrosstermEvent::Mouse(mouse) => match convert_mouse_event(mouse) {
            Some(record) => producer.push_position(record).is_queued(),
            None => false,
        },
        _ => false,
    }
}

// =============================================================================
// MOUSE CAPTURE
// =============================================================================

/// Enable mouse capture.
pub fn enable_mouse() -> std::io::Result<()> {
    execute!(stdout(), EnableMouseCapture)
}

/// Disable mouse capture.
pub fn disable_mouse() -> std::io::Result<()> {
    execute!(stdout(), DisableMouseCapture)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{BridgeConfig, channel};
    use crate::host::{HostEvent, HostEventQueue, Key};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent { kind, column, row, modifiers: KeyModifiers::empty() }
    }

    #[test]
    fn test_convert_key_char() {
        let ev = convert_key_event(key(KeyCode::Char('a'))).unwrap();
        assert_eq!(ev.kind, KbdEventKind::Press);
        assert_eq!(ev.keycode(), Some(Keycode::A));
        assert_eq!(ev.c, 'a' as u32);
    }

    #[test]
    fn test_convert_shifted_char_keeps_base_key() {
        let ev = convert_key_event(KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT)).unwrap();
        assert_eq!(ev.keycode(), Some(Keycode::Q));
        assert_eq!(ev.c, 'Q' as u32);

        let ev = convert_key_event(key(KeyCode::Char('?'))).unwrap();
        assert_eq!(ev.keycode(), Some(Keycode::Slash));

        let ev = convert_key_event(key(KeyCode::Char('#'))).unwrap();
        assert_eq!(ev.keycode(), Some(Keycode::Num3));
        assert_eq!(ev.c, '#' as u32);
    }

    #[test]
    fn test_convert_key_states() {
        let states = [
            (KeyEventKind::Press, KbdEventKind::Press),
            (KeyEventKind::Repeat, KbdEventKind::Press),
            (KeyEventKind::Release, KbdEventKind::Release),
        ];

        for (kind, expected) in states {
            let event = KeyEvent::new_with_kind(KeyCode::Char('z'), KeyModifiers::empty(), kind);
            assert_eq!(convert_key_event(event).unwrap().kind, expected);
        }
    }

    #[test]
    fn test_convert_key_navigation() {
        let nav_keys = [
            (KeyCode::Home, Keycode::Home),
            (KeyCode::End, Keycode::End),
            (KeyCode::PageUp, Keycode::PageUp),
            (KeyCode::PageDown, Keycode::PageDown),
            (KeyCode::Insert, Keycode::Insert),
            (KeyCode::Delete, Keycode::Delete),
            (KeyCode::Backspace, Keycode::Backspace),
            (KeyCode::Tab, Keycode::Tab),
            (KeyCode::Esc, Keycode::Escape),
            (KeyCode::Up, Keycode::Up),
            (KeyCode::Left, Keycode::Left),
        ];

        for (code, expected) in nav_keys {
            let ev = convert_key_event(key(code)).unwrap();
            assert_eq!(ev.keycode(), Some(expected));
        }
    }

    #[test]
    fn test_convert_key_function_keys() {
        for n in 1..=12u8 {
            let ev = convert_key_event(key(KeyCode::F(n))).unwrap();
            assert_eq!(ev.key, Keycode::F1.raw() + u32::from(n) - 1);
        }
        assert!(convert_key_event(key(KeyCode::F(13))).is_none());
    }

    #[test]
    fn test_convert_keypad() {
        let mut event = key(KeyCode::Char('7'));
        event.state = KeyEventState::KEYPAD;
        assert_eq!(convert_key_event(event).unwrap().keycode(), Some(Keycode::N7));

        let mut event = key(KeyCode::Enter);
        event.state = KeyEventState::KEYPAD;
        assert_eq!(convert_key_event(event).unwrap().keycode(), Some(Keycode::NEnter));
    }

    #[test]
    fn test_convert_modifier_keys() {
        let ev = convert_key_event(key(KeyCode::Modifier(ModifierKeyCode::LeftShift))).unwrap();
        assert_eq!(ev.keycode(), Some(Keycode::LShift));
        assert!(convert_key_event(key(KeyCode::Modifier(ModifierKeyCode::LeftSuper))).is_none());
    }

    #[test]
    fn test_unsupported_keys() {
        assert!(convert_key_event(key(KeyCode::Char('é'))).is_none());
        assert!(convert_key_event(key(KeyCode::Null)).is_none());
        assert!(convert_key_event(key(KeyCode::Menu)).is_none());
    }

    #[test]
    fn test_convert_mouse_down_up() {
        let ev = convert_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5)).unwrap();
        assert_eq!(ev.kind, PosEventKind::Press);
        assert_eq!(ev.btn_num, 1);

        let ev = convert_mouse_event(mouse(MouseEventKind::Up(MouseButton::Right), 10, 5)).unwrap();
        assert_eq!(ev.kind, PosEventKind::Release);
        assert_eq!(ev.btn_num, 2);

        let ev = convert_mouse_event(mouse(MouseEventKind::Down(MouseButton::Middle), 0, 0)).unwrap();
        assert_eq!(ev.btn_num, 3);
    }

    #[test]
    fn test_convert_mouse_move_and_drag() {
        let ev = convert_mouse_event(mouse(MouseEventKind::Moved, 30, 20)).unwrap();
        assert_eq!(ev, PosEvent::moved(30, 20));

        let ev = convert_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 6)).unwrap();
        assert_eq!(ev, PosEvent::moved(5, 6));
    }

    #[test]
    fn test_convert_mouse_scroll_dropped() {
        for kind in [
            MouseEventKind::ScrollUp,
            MouseEventKind::ScrollDown,
            MouseEventKind::ScrollLeft,
            MouseEventKind::ScrollRight,
        ] {
            assert!(convert_mouse_event(mouse(kind, 0, 0)).is_none());
        }
    }

    #[test]
    fn test_forward_event_reaches_pump() {
        let (producer, mut pump) = channel(BridgeConfig::default()).unwrap();
        pump.init_keymap();

        assert!(forward_event(&producer, CrosstermEvent::Key(key(KeyCode::Char('q')))));
        assert!(forward_event(
            &producer,
            CrosstermEvent::Mouse(mouse(MouseEventKind::Moved, 4, 2))
        ));
        assert!(!forward_event(&producer, CrosstermEvent::Resize(80, 24)));
        assert!(!forward_event(&producer, CrosstermEvent::FocusGained));

        let mut host = HostEventQueue::new();
        assert_eq!(pump.pump(&mut host).posted, 2);
        match host.poll() {
            Some(HostEvent::Key { keysym, .. }) => assert_eq!(keysym.sym, Key::Q),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(host.poll(), Some(HostEvent::MouseMotion { x: 4, y: 2 }));
    }
}
