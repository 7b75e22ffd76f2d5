//! Normalized key symbols, as the host event system understands them.
//!
//! Values match the host library's `SDLKey` and `SDLMod` enumerations so a
//! `Keysym` can be handed across the C boundary without remapping.

use bitflags::bitflags;

/// Normalized key symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Key {
    /// No symbol assigned.
    #[default]
    Unknown = 0,

    Backspace = 8,
    Tab = 9,
    Return = 13,
    Pause = 19,
    Escape = 27,
    Space = 32,
    Quote = 39,
    Comma = 44,
    Minus = 45,
    Period = 46,
    Slash = 47,

    Num0 = 48,
    Num1 = 49,
    Num2 = 50,
    Num3 = 51,
    Num4 = 52,
    Num5 = 53,
    Num6 = 54,
    Num7 = 55,
    Num8 = 56,
    Num9 = 57,

    Semicolon = 59,
    Equals = 61,
    LeftBracket = 91,
    Backslash = 92,
    RightBracket = 93,
    Backquote = 96,

    A = 97,
    B = 98,
    C = 99,
    D = 100,
    E = 101,
    F = 102,
    G = 103,
    H = 104,
    I = 105,
    J = 106,
    K = 107,
    L = 108,
    M = 109,
    N = 110,
    O = 111,
    P = 112,
    Q = 113,
    R = 114,
    S = 115,
    T = 116,
    U = 117,
    V = 118,
    W = 119,
    X = 120,
    Y = 121,
    Z = 122,

    Delete = 127,

    Kp0 = 256,
    Kp1 = 257,
    Kp2 = 258,
    Kp3 = 259,
    Kp4 = 260,
    Kp5 = 261,
    Kp6 = 262,
    Kp7 = 263,
    Kp8 = 264,
    Kp9 = 265,
    KpPeriod = 266,
    KpDivide = 267,
    KpMultiply = 268,
    KpMinus = 269,
    KpPlus = 270,
    KpEnter = 271,

    Up = 273,
    Down = 274,
    Right = 275,
    Left = 276,
    Insert = 277,
    Home = 278,
    End = 279,
    PageUp = 280,
    PageDown = 281,

    F1 = 282,
    F2 = 283,
    F3 = 284,
    F4 = 285,
    F5 = 286,
    F6 = 287,
    F7 = 288,
    F8 = 289,
    F9 = 290,
    F10 = 291,
    F11 = 292,
    F12 = 293,

    NumLock = 300,
    CapsLock = 301,
    ScrollLock = 302,
    RShift = 303,
    LShift = 304,
    RCtrl = 305,
    LCtrl = 306,
    RAlt = 307,
    LAlt = 308,

    Print = 316,
    Break = 318,
}

impl Key {
    /// Raw `SDLKey` value.
    #[inline]
    pub fn raw(self) -> u32 {
        self as u32
    }

    pub fn is_unknown(self) -> bool {
        self == Key::Unknown
    }
}

bitflags! {
    /// Modifier state (`SDLMod`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u16 {
        const NONE   = 0x0000;
        const LSHIFT = 0x0001;
        const RSHIFT = 0x0002;
        const LCTRL  = 0x0040;
        const RCTRL  = 0x0080;
        const LALT   = 0x0100;
        const RALT   = 0x0200;
        const LMETA  = 0x0400;
        const RMETA  = 0x0800;
        const NUM    = 0x1000;
        const CAPS   = 0x2000;
        const MODE   = 0x4000;
    }
}

/// A translated key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Keysym {
    /// Native keycode, passed through untouched.
    pub scancode: u32,
    pub sym: Key,
    pub modifiers: Modifiers,
    /// Character produced by the key when unicode translation is on, else 0.
    pub unicode: u16,
}
