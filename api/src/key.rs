//! Keyboard types for the host's buffered-key callback.

use std::os::raw::c_char;

/// Length of the host's immediate key-state buffer.
pub const KEY_STATE_LEN: usize = 256;

/// A key on the keyboard, named after the host's DirectInput-style scan
/// codes. Codes without a name are preserved verbatim in [Key::Unknown] so
/// the `u8` round-trip is lossless.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub enum Key {
    Escape,
    Main1,
    Main2,
    Main3,
    Main4,
    Main5,
    Main6,
    Main7,
    Main8,
    Main9,
    Main0,
    Minus,
    Equals,
    Backspace,
    Tab,
    Q,
    W,
    E,
    R,
    T,
    Y,
    U,
    I,
    O,
    P,
    LeftBracket,
    RightBracket,
    Enter,
    LeftControl,
    A,
    S,
    D,
    F,
    G,
    H,
    J,
    K,
    L,
    Semicolon,
    Apostrophe,
    Grave,
    LeftShift,
    Backslash,
    Z,
    X,
    C,
    V,
    B,
    N,
    M,
    Comma,
    Period,
    Slash,
    RightShift,
    NumPadMultiply,
    LeftAlt,
    Space,
    CapsLock,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    NumLock,
    ScrollLock,
    NumPad7,
    NumPad8,
    NumPad9,
    NumPadSubtract,
    NumPad4,
    NumPad5,
    NumPad6,
    NumPadAdd,
    NumPad1,
    NumPad2,
    NumPad3,
    NumPad0,
    NumPadDecimal,
    Oem102,
    F11,
    F12,
    NumPadEnter,
    RightControl,
    NumPadDivide,
    PrintScreen,
    RightAlt,
    Pause,
    Home,
    Up,
    PageUp,
    Left,
    Right,
    End,
    Down,
    PageDown,
    Insert,
    Delete,
    /// A scan code with no name in this enum.
    Unknown(u8),
}

impl From<Key> for u8 {
    fn from(key: Key) -> u8 {
        match key {
            Key::Escape => 0x01,
            Key::Main1 => 0x02,
            Key::Main2 => 0x03,
            Key::Main3 => 0x04,
            Key::Main4 => 0x05,
            Key::Main5 => 0x06,
            Key::Main6 => 0x07,
            Key::Main7 => 0x08,
            Key::Main8 => 0x09,
            Key::Main9 => 0x0A,
            Key::Main0 => 0x0B,
            Key::Minus => 0x0C,
            Key::Equals => 0x0D,
            Key::Backspace => 0x0E,
            Key::Tab => 0x0F,
            Key::Q => 0x10,
            Key::W => 0x11,
            Key::E => 0x12,
            Key::R => 0x13,
            Key::T => 0x14,
            Key::Y => 0x15,
            Key::U => 0x16,
            Key::I => 0x17,
            Key::O => 0x18,
            Key::P => 0x19,
            Key::LeftBracket => 0x1A,
            Key::RightBracket => 0x1B,
            Key::Enter => 0x1C,
            Key::LeftControl => 0x1D,
            Key::A => 0x1E,
            Key::S => 0x1F,
            Key::D => 0x20,
            Key::F => 0x21,
            Key::G => 0x22,
            Key::H => 0x23,
            Key::J => 0x24,
            Key::K => 0x25,
            Key::L => 0x26,
            Key::Semicolon => 0x27,
            Key::Apostrophe => 0x28,
            Key::Grave => 0x29,
            Key::LeftShift => 0x2A,
            Key::Backslash => 0x2B,
            Key::Z => 0x2C,
            Key::X => 0x2D,
            Key::C => 0x2E,
            Key::V => 0x2F,
            Key::B => 0x30,
            Key::N => 0x31,
            Key::M => 0x32,
            Key::Comma => 0x33,
            Key::Period => 0x34,
            Key::Slash => 0x35,
            Key::RightShift => 0x36,
            Key::NumPadMultiply => 0x37,
            Key::LeftAlt => 0x38,
            Key::Space => 0x39,
            Key::CapsLock => 0x3A,
            Key::F1 => 0x3B,
            Key::F2 => 0x3C,
            Key::F3 => 0x3D,
            Key::F4 => 0x3E,
            Key::F5 => 0x3F,
            Key::F6 => 0x40,
            Key::F7 => 0x41,
            Key::F8 => 0x42,
            Key::F9 => 0x43,
            Key::F10 => 0x44,
            Key::NumLock => 0x45,
            Key::ScrollLock => 0x46,
            Key::NumPad7 => 0x47,
            Key::NumPad8 => 0x48,
            Key::NumPad9 => 0x49,
            Key::NumPadSubtract => 0x4A,
            Key::NumPad4 => 0x4B,
            Key::NumPad5 => 0x4C,
            Key::NumPad6 => 0x4D,
            Key::NumPadAdd => 0x4E,
            Key::NumPad1 => 0x4F,
            Key::NumPad2 => 0x50,
            Key::NumPad3 => 0x51,
            Key::NumPad0 => 0x52,
            Key::NumPadDecimal => 0x53,
            Key::Oem102 => 0x56,
            Key::F11 => 0x57,
            Key::F12 => 0x58,
            Key::NumPadEnter => 0x9C,
            Key::RightControl => 0x9D,
            Key::NumPadDivide => 0xB5,
            Key::PrintScreen => 0xB7,
            Key::RightAlt => 0xB8,
            Key::Pause => 0xC5,
            Key::Home => 0xC7,
            Key::Up => 0xC8,
            Key::PageUp => 0xC9,
            Key::Left => 0xCB,
            Key::Right => 0xCD,
            Key::End => 0xCF,
            Key::Down => 0xD0,
            Key::PageDown => 0xD1,
            Key::Insert => 0xD2,
            Key::Delete => 0xD3,
            Key::Unknown(code) => code,
        }
    }
}

impl From<u8> for Key {
    fn from(code: u8) -> Key {
        match code {
            0x01 => Key::Escape,
            0x02 => Key::Main1,
            0x03 => Key::Main2,
            0x04 => Key::Main3,
            0x05 => Key::Main4,
            0x06 => Key::Main5,
            0x07 => Key::Main6,
            0x08 => Key::Main7,
            0x09 => Key::Main8,
            0x0A => Key::Main9,
            0x0B => Key::Main0,
            0x0C => Key::Minus,
            0x0D => Key::Equals,
            0x0E => Key::Backspace,
            0x0F => Key::Tab,
            0x10 => Key::Q,
            0x11 => Key::W,
            0x12 => Key::E,
            0x13 => Key::R,
            0x14 => Key::T,
            0x15 => Key::Y,
            0x16 => Key::U,
            0x17 => Key::I,
            0x18 => Key::O,
            0x19 => Key::P,
            0x1A => Key::LeftBracket,
            0x1B => Key::RightBracket,
            0x1C => Key::Enter,
            0x1D => Key::LeftControl,
            0x1E => Key::A,
            0x1F => Key::S,
            0x20 => Key::D,
            0x21 => Key::F,
            0x22 => Key::G,
            0x23 => Key::H,
            0x24 => Key::J,
            0x25 => Key::K,
            0x26 => Key::L,
            0x27 => Key::Semicolon,
            0x28 => Key::Apostrophe,
            0x29 => Key::Grave,
            0x2A => Key::LeftShift,
            0x2B => Key::Backslash,
            0x2C => Key::Z,
            0x2D => Key::X,
            0x2E => Key::C,
            0x2F => Key::V,
            0x30 => Key::B,
            0x31 => Key::N,
            0x32 => Key::M,
            0x33 => Key::Comma,
            0x34 => Key::Period,
            0x35 => Key::Slash,
            0x36 => Key::RightShift,
            0x37 => Key::NumPadMultiply,
            0x38 => Key::LeftAlt,
            0x39 => Key::Space,
            0x3A => Key::CapsLock,
            0x3B => Key::F1,
            0x3C => Key::F2,
            0x3D => Key::F3,
            0x3E => Key::F4,
            0x3F => Key::F5,
            0x40 => Key::F6,
            0x41 => Key::F7,
            0x42 => Key::F8,
            0x43 => Key::F9,
            0x44 => Key::F10,
            0x45 => Key::NumLock,
            0x46 => Key::ScrollLock,
            0x47 => Key::NumPad7,
            0x48 => Key::NumPad8,
            0x49 => Key::NumPad9,
            0x4A => Key::NumPadSubtract,
            0x4B => Key::NumPad4,
            0x4C => Key::NumPad5,
            0x4D => Key::NumPad6,
            0x4E => Key::NumPadAdd,
            0x4F => Key::NumPad1,
            0x50 => Key::NumPad2,
            0x51 => Key::NumPad3,
            0x52 => Key::NumPad0,
            0x53 => Key::NumPadDecimal,
            0x56 => Key::Oem102,
            0x57 => Key::F11,
            0x58 => Key::F12,
            0x9C => Key::NumPadEnter,
            0x9D => Key::RightControl,
            0xB5 => Key::NumPadDivide,
            0xB7 => Key::PrintScreen,
            0xB8 => Key::RightAlt,
            0xC5 => Key::Pause,
            0xC7 => Key::Home,
            0xC8 => Key::Up,
            0xC9 => Key::PageUp,
            0xCB => Key::Left,
            0xCD => Key::Right,
            0xCF => Key::End,
            0xD0 => Key::Down,
            0xD1 => Key::PageDown,
            0xD2 => Key::Insert,
            0xD3 => Key::Delete,
            _ => Key::Unknown(code),
        }
    }
}

/// Borrowed view of the host's immediate key-state buffer, handed to
/// [crate::Vessel::consume_buffered_key] alongside the buffered key.
///
/// High bit set means the key is currently held down. Clearing an entry
/// ([KeyStates::reset_key]) suppresses the host's default processing of it.
pub struct KeyStates<'a> {
    kstate: &'a mut [c_char],
}

impl<'a> From<&'a mut [c_char; KEY_STATE_LEN]> for KeyStates<'a> {
    fn from(kstate: &'a mut [c_char; KEY_STATE_LEN]) -> Self {
        Self { kstate }
    }
}

impl<'a> KeyStates<'a> {
    /// Wraps the raw buffer pointer received from the host.
    ///
    /// # Safety
    /// `kstate` must point to a live buffer of [KEY_STATE_LEN] bytes that
    /// outlives the returned view and is not aliased while it exists.
    #[doc(hidden)]
    pub unsafe fn from_raw(kstate: *mut c_char) -> Self {
        Self {
            kstate: std::slice::from_raw_parts_mut(kstate, KEY_STATE_LEN),
        }
    }

    /// Check if a key is currently held down.
    pub fn is_down(&self, key: Key) -> bool {
        (self.kstate[usize::from(u8::from(key))] as u8) & 0x80 != 0
    }

    /// Clear a key's state, preventing the host's default processing of it.
    pub fn reset_key(&mut self, key: Key) {
        self.kstate[usize::from(u8::from(key))] = 0;
    }

    /// Check if either shift key is held down.
    pub fn shift(&self) -> bool {
        self.is_down(Key::LeftShift) || self.is_down(Key::RightShift)
    }

    /// Check if either control key is held down.
    pub fn control(&self) -> bool {
        self.is_down(Key::LeftControl) || self.is_down(Key::RightControl)
    }

    /// Check if either alt key is held down.
    pub fn alt(&self) -> bool {
        self.is_down(Key::LeftAlt) || self.is_down(Key::RightAlt)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        // Every scan code survives the u8 round-trip unchanged, named or not.
        for code in 0u8..=255 {
            assert_eq!(u8::from(Key::from(code)), code);
        }
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(Key::from(0x54), Key::Unknown(0x54));
        assert_eq!(Key::from(0xFF), Key::Unknown(0xFF));
        assert_eq!(Key::from(0x10), Key::Q);
    }

    #[test]
    fn test_is_down() {
        let mut raw = [0 as c_char; KEY_STATE_LEN];
        raw[usize::from(u8::from(Key::L))] = 0x80u8 as c_char;
        let states = KeyStates::from(&mut raw);
        assert!(states.is_down(Key::L));
        assert!(!states.is_down(Key::K));
        assert!(!states.shift());
    }

    #[test]
    fn test_modifiers() {
        let mut raw = [0 as c_char; KEY_STATE_LEN];
        raw[usize::from(u8::from(Key::RightShift))] = 0x80u8 as c_char;
        raw[usize::from(u8::from(Key::LeftControl))] = 0x80u8 as c_char;
        let states = KeyStates::from(&mut raw);
        assert!(states.shift());
        assert!(states.control());
        assert!(!states.alt());
    }

    #[test]
    fn test_reset_key() {
        let mut raw = [0 as c_char; KEY_STATE_LEN];
        raw[usize::from(u8::from(Key::Space))] = 0x80u8 as c_char;
        let mut states = KeyStates::from(&mut raw);
        assert!(states.is_down(Key::Space));
        states.reset_key(Key::Space);
        assert!(!states.is_down(Key::Space));
        assert_eq!(raw[usize::from(u8::from(Key::Space))], 0);
    }
}
