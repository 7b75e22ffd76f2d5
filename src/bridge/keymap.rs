//! Native keycode → host key symbol translation.
//!
//! The table is indexed by [`Keycode`], so every lookup is in range by
//! construction. Raw values outside the enumeration never reach the table
//! and come back as [`Key::Unknown`].
//!
//! A fresh `Keymap` is empty. Call [`Keymap::init`] once before translating;
//! until then every key translates to `Key::Unknown`.

use crate::host::{Key, Keysym, Modifiers};
use crate::native::{KbdEvent, Keycode};

const TABLE_LEN: usize = Keycode::LAST as usize + 1;

/// Keycode translation table.
#[derive(Clone)]
pub struct Keymap {
    table: [Key; TABLE_LEN],
    initialized: bool,
}

impl Keymap {
    /// An empty map. Everything translates to `Key::Unknown`.
    pub fn new() -> Self {
        Self {
            table: [Key::Unknown; TABLE_LEN],
            initialized: false,
        }
    }

    /// A map with the standard table already loaded.
    pub fn populated() -> Self {
        let mut map = Self::new();
        map.init();
        map
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Symbol assigned to a keycode.
    #[inline]
    pub fn get(&self, code: Keycode) -> Key {
        self.table[code as usize]
    }

    /// Symbol for a raw native keycode.
    pub fn lookup(&self, raw: u32) -> Key {
        Keycode::from_raw(raw).map_or(Key::Unknown, |code| self.get(code))
    }

    fn set(&mut self, code: Keycode, key: Key) {
        self.table[code as usize] = key;
    }

    /// Number of keycodes with an assigned symbol.
    pub fn mapped_count(&self) -> usize {
        self.table.iter().filter(|k| !k.is_unknown()).count()
    }

    /// Translate a keyboard record.
    ///
    /// The scancode is the raw native keycode. Modifiers are always empty.
    /// The character is copied (truncated to 16 bits) only when `unicode`
    /// is set.
    pub fn translate(&self, event: &KbdEvent, unicode: bool) -> Keysym {
        Keysym {
            scancode: event.key,
            sym: self.lookup(event.key),
            modifiers: Modifiers::NONE,
            unicode: if unicode { event.c as u16 } else { 0 },
        }
    }

    /// Load the standard table.
    pub fn init(&mut self) {
        use Keycode as Kc;

        self.set(Kc::Num1, Key::Num1);
        self.set(Kc::Num2, Key::Num2);
        self.set(Kc::Num3, Key::Num3);
        self.set(Kc::Num4, Key::Num4);
        self.set(Kc::Num5, Key::Num5);
        self.set(Kc::Num6, Key::Num6);
        self.set(Kc::Num7, Key::Num7);
        self.set(Kc::Num8, Key::Num8);
        self.set(Kc::Num9, Key::Num9);
        self.set(Kc::Num0, Key::Num0);

        self.set(Kc::Minus, Key::Minus);
        self.set(Kc::Equals, Key::Equals);
        self.set(Kc::Backspace, Key::Backspace);
        self.set(Kc::Tab, Key::Tab);
        self.set(Kc::Q, Key::Q);
        self.set(Kc::W, Key::W);
        self.set(Kc::E, Key::E);
        self.set(Kc::R, Key::R);
        self.set(Kc::T, Key::T);
        self.set(Kc::Y, Key::Y);
        self.set(Kc::U, Key::U);
        self.set(Kc::I, Key::I);
        self.set(Kc::O, Key::O);
        self.set(Kc::P, Key::P);
        self.set(Kc::LBracket, Key::LeftBracket);
        self.set(Kc::RBracket, Key::RightBracket);
        self.set(Kc::Enter, Key::Return);
        self.set(Kc::LCtrl, Key::LCtrl);
        self.set(Kc::A, Key::A);
        self.set(Kc::S, Key::S);
        self.set(Kc::D, Key::D);
        self.set(Kc::F, Key::F);
        self.set(Kc::G, Key::G);
        self.set(Kc::H, Key::H);
        self.set(Kc::J, Key::J);
        self.set(Kc::K, Key::K);
        self.set(Kc::L, Key::L);
        self.set(Kc::Semicolon, Key::Semicolon);
        self.set(Kc::Quote, Key::Quote);
        self.set(Kc::Hash, Key::Backquote);
        self.set(Kc::LShift, Key::LShift);
        self.set(Kc::Backslash, Key::Backslash);
        self.set(Kc::Z, Key::Z);
        self.set(Kc::X, Key::X);
        self.set(Kc::C, Key::C);
        self.set(Kc::V, Key::V);
        self.set(Kc::B, Key::B);
        self.set(Kc::N, Key::N);
        self.set(Kc::M, Key::M);
        self.set(Kc::Comma, Key::Comma);
        self.set(Kc::Period, Key::Period);
        self.set(Kc::Slash, Key::Slash);
        self.set(Kc::RShift, Key::RShift);
        self.set(Kc::NTimes, Key::KpMultiply);
        self.set(Kc::LAlt, Key::LAlt);
        self.set(Kc::Space, Key::Space);
        self.set(Kc::CapsLock, Key::CapsLock);
        self.set(Kc::F1, Key::F1);
        self.set(Kc::F2, Key::F2);
        self.set(Kc::F3, Key::F3);
        self.set(Kc::F4, Key::F4);
        self.set(Kc::F5, Key::F5);
        self.set(Kc::F6, Key::F6);
        self.set(Kc::F7, Key::F7);
        self.set(Kc::F8, Key::F8);
        self.set(Kc::F9, Key::F9);
        self.set(Kc::F10, Key::F10);
        self.set(Kc::NumLock, Key::NumLock);
        self.set(Kc::ScrollLock, Key::ScrollLock);
        self.set(Kc::NMinus, Key::KpMinus);
        self.set(Kc::NPlus, Key::KpPlus);
        self.set(Kc::N1, Key::Kp1);
        self.set(Kc::N2, Key::Kp2);
        self.set(Kc::N3, Key::Kp3);
        self.set(Kc::N4, Key::Kp4);
        self.set(Kc::N5, Key::Kp5);
        self.set(Kc::N6, Key::Kp6);
        self.set(Kc::N7, Key::Kp7);
        self.set(Kc::N8, Key::Kp8);
        self.set(Kc::N9, Key::Kp9);
        self.set(Kc::N0, Key::Kp0);
        self.set(Kc::NPeriod, Key::KpPeriod);
        self.set(Kc::F11, Key::F11);
        self.set(Kc::F12, Key::F12);
        self.set(Kc::NEnter, Key::KpEnter);
        self.set(Kc::RCtrl, Key::RCtrl);
        self.set(Kc::NSlash, Key::KpDivide);
        self.set(Kc::PrtScr, Key::Print);
        self.set(Kc::RAlt, Key::RAlt);
        self.set(Kc::Break, Key::Break);
        self.set(Kc::Home, Key::Home);
        self.set(Kc::Up, Key::Up);
        self.set(Kc::PageUp, Key::PageUp);
        self.set(Kc::Left, Key::Left);
        self.set(Kc::Right, Key::Right);
        self.set(Kc::End, Key::End);
        self.set(Kc::Down, Key::Down);
        self.set(Kc::PageDown, Key::PageDown);
        self.set(Kc::Insert, Key::Insert);
        self.set(Kc::Delete, Key::Delete);

        self.initialized = true;
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Keymap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keymap")
            .field("initialized", &self.initialized)
            .field("mapped", &self.mapped_count())
            .finish()
    }
}
