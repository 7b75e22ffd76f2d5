//! Native keycodes as reported by the canvas widget.
//!
//! Discriminants follow the `keycode_t` enumeration of the HelenOS C library,
//! which starts at `KC_BACKTICK = 1` and walks the keyboard row by row.

/// Native keycode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Keycode {
    Backtick = 1,

    Num1 = 2,
    Num2 = 3,
    Num3 = 4,
    Num4 = 5,
    Num5 = 6,
    Num6 = 7,
    Num7 = 8,
    Num8 = 9,
    Num9 = 10,
    Num0 = 11,

    Minus = 12,
    Equals = 13,
    Backspace = 14,

    Tab = 15,

    Q = 16,
    W = 17,
    E = 18,
    R = 19,
    T = 20,
    Y = 21,
    U = 22,
    I = 23,
    O = 24,
    P = 25,

    LBracket = 26,
    RBracket = 27,

    CapsLock = 28,

    A = 29,
    S = 30,
    D = 31,
    F = 32,
    G = 33,
    H = 34,
    J = 35,
    K = 36,
    L = 37,

    Semicolon = 38,
    Quote = 39,
    Backslash = 40,
    Hash = 41,

    Enter = 42,

    LShift = 43,

    Z = 44,
    X = 45,
    C = 46,
    V = 47,
    B = 48,
    N = 49,
    M = 50,

    Comma = 51,
    Period = 52,
    Slash = 53,

    RShift = 54,

    LCtrl = 55,
    LAlt = 56,
    Space = 57,

    RAlt = 58,
    RCtrl = 59,

    Escape = 60,

    F1 = 61,
    F2 = 62,
    F3 = 63,
    F4 = 64,
    F5 = 65,
    F6 = 66,
    F7 = 67,
    F8 = 68,
    F9 = 69,
    F10 = 70,
    F11 = 71,
    F12 = 72,

    PrtScr = 73,
    ScrollLock = 74,
    Pause = 75,
    Break = 76,

    Insert = 77,
    Home = 78,
    PageUp = 79,

    Delete = 80,
    End = 81,
    PageDown = 82,

    Up = 83,
    Left = 84,
    Down = 85,
    Right = 86,

    NumLock = 87,
    NSlash = 88,
    NTimes = 89,
    NMinus = 90,

    NPlus = 91,
    NEnter = 92,

    N7 = 93,
    N8 = 94,
    N9 = 95,

    N4 = 96,
    N5 = 97,
    N6 = 98,

    N1 = 99,
    N2 = 100,
    N3 = 101,

    N0 = 102,
    NPeriod = 103,
}

impl Keycode {
    /// Smallest assigned raw value.
    pub const FIRST: u32 = Keycode::Backtick as u32;
    /// Largest assigned raw value.
    pub const LAST: u32 = Keycode::NPeriod as u32;

    /// Every keycode, in discriminant order.
    pub const ALL: [Keycode; 103] = [
        Keycode::Backtick,
        Keycode::Num1, Keycode::Num2, Keycode::Num3, Keycode::Num4, Keycode::Num5,
        Keycode::Num6, Keycode::Num7, Keycode::Num8, Keycode::Num9, Keycode::Num0,
        Keycode::Minus, Keycode::Equals, Keycode::Backspace,
        Keycode::Tab,
        Keycode::Q, Keycode::W, Keycode::E, Keycode::R, Keycode::T,
        Keycode::Y, Keycode::U, Keycode::I, Keycode::O, Keycode::P,
        Keycode::LBracket, Keycode::RBracket,
        Keycode::CapsLock,
        Keycode::A, Keycode::S, Keycode::D, Keycode::F, Keycode::G,
        Keycode::H, Keycode::J, Keycode::K, Keycode::L,
        Keycode::Semicolon, Keycode::Quote, Keycode::Backslash, Keycode::Hash,
        Keycode::Enter,
        Keycode::LShift,
        Keycode::Z, Keycode::X, Keycode::C, Keycode::V, Keycode::B, Keycode::N, Keycode::M,
        Keycode::Comma, Keycode::Period, Keycode::Slash,
        Keycode::RShift,
        Keycode::LCtrl, Keycode::LAlt, Keycode::Space,
        Keycode::RAlt, Keycode::RCtrl,
        Keycode::Escape,
        Keycode::F1, Keycode::F2, Keycode::F3, Keycode::F4, Keycode::F5, Keycode::F6,
        Keycode::F7, Keycode::F8, Keycode::F9, Keycode::F10, Keycode::F11, Keycode::F12,
        Keycode::PrtScr, Keycode::ScrollLock, Keycode::Pause, Keycode::Break,
        Keycode::Insert, Keycode::Home, Keycode::PageUp,
        Keycode::Delete, Keycode::End, Keycode::PageDown,
        Keycode::Up, Keycode::Left, Keycode::Down, Keycode::Right,
        Keycode::NumLock, Keycode::NSlash, Keycode::NTimes, Keycode::NMinus,
        Keycode::NPlus, Keycode::NEnter,
        Keycode::N7, Keycode::N8, Keycode::N9,
        Keycode::N4, Keycode::N5, Keycode::N6,
        Keycode::N1, Keycode::N2, Keycode::N3,
        Keycode::N0, Keycode::NPeriod,
    ];

    /// Look up a raw keycode. Values outside the enumeration yield `None`.
    pub fn from_raw(raw: u32) -> Option<Self> {
        if (Self::FIRST..=Self::LAST).contains(&raw) {
            Some(Self::ALL[(raw - Self::FIRST) as usize])
        } else {
            None
        }
    }

    /// Raw value as delivered in `kbd_event_t::key`.
    #[inline]
    pub fn raw(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for Keycode {
    type Error = u32;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::from_raw(raw).ok_or(raw)
    }
}
