/// PS4 debug keyboard keymap.
///
/// The debug keyboard reports USB HID usage ids (page 0x07) as scancodes.
use input_core::keymap::{KeyMapEntry, Keymap};
use input_core::retro_key as rk;
use lazy_static::lazy_static;

const fn e(scancode: u8, key: rk::RetroKey) -> KeyMapEntry {
    KeyMapEntry::new(scancode, key)
}

pub const PS4_KEY_MAP: &[KeyMapEntry] = &[
    e(0x04, rk::A),
    e(0x05, rk::B),
    e(0x06, rk::C),
    e(0x07, rk::D),
    e(0x08, rk::E),
    e(0x09, rk::F),
    e(0x0A, rk::G),
    e(0x0B, rk::H),
    e(0x0C, rk::I),
    e(0x0D, rk::J),
    e(0x0E, rk::K),
    e(0x0F, rk::L),
    e(0x10, rk::M),
    e(0x11, rk::N),
    e(0x12, rk::O),
    e(0x13, rk::P),
    e(0x14, rk::Q),
    e(0x15, rk::R),
    e(0x16, rk::S),
    e(0x17, rk::T),
    e(0x18, rk::U),
    e(0x19, rk::V),
    e(0x1A, rk::W),
    e(0x1B, rk::X),
    e(0x1C, rk::Y),
    e(0x1D, rk::Z),
    e(0x1E, rk::NUM_1),
    e(0x1F, rk::NUM_2),
    e(0x20, rk::NUM_3),
    e(0x21, rk::NUM_4),
    e(0x22, rk::NUM_5),
    e(0x23, rk::NUM_6),
    e(0x24, rk::NUM_7),
    e(0x25, rk::NUM_8),
    e(0x26, rk::NUM_9),
    e(0x27, rk::NUM_0),
    e(0x28, rk::RETURN),
    e(0x29, rk::ESCAPE),
    e(0x2A, rk::BACKSPACE),
    e(0x2B, rk::TAB),
    e(0x2C, rk::SPACE),
    e(0x2D, rk::MINUS),
    e(0x2E, rk::EQUALS),
    e(0x2F, rk::LEFTBRACKET),
    e(0x30, rk::RIGHTBRACKET),
    e(0x31, rk::BACKSLASH),
    e(0x32, rk::HASH),
    e(0x33, rk::SEMICOLON),
    e(0x34, rk::QUOTE),
    e(0x35, rk::BACKQUOTE),
    e(0x36, rk::COMMA),
    e(0x37, rk::PERIOD),
    e(0x38, rk::SLASH),
    e(0x39, rk::CAPSLOCK),
    e(0x3A, rk::F1),
    e(0x3B, rk::F2),
    e(0x3C, rk::F3),
    e(0x3D, rk::F4),
    e(0x3E, rk::F5),
    e(0x3F, rk::F6),
    e(0x40, rk::F7),
    e(0x41, rk::F8),
    e(0x42, rk::F9),
    e(0x43, rk::F10),
    e(0x44, rk::F11),
    e(0x45, rk::F12),
    e(0x46, rk::PRINT),
    e(0x47, rk::SCROLLOCK),
    e(0x48, rk::PAUSE),
    e(0x49, rk::INSERT),
    e(0x4A, rk::HOME),
    e(0x4B, rk::PAGEUP),
    e(0x4C, rk::DELETE),
    e(0x4D, rk::END),
    e(0x4E, rk::PAGEDOWN),
    e(0x4F, rk::RIGHT),
    e(0x50, rk::LEFT),
    e(0x51, rk::DOWN),
    e(0x52, rk::UP),
    e(0x53, rk::NUMLOCK),
    e(0x54, rk::KP_DIVIDE),
    e(0x55, rk::KP_MULTIPLY),
    e(0x56, rk::KP_MINUS),
    e(0x57, rk::KP_PLUS),
    e(0x58, rk::KP_ENTER),
    e(0x59, rk::KP1),
    e(0x5A, rk::KP2),
    e(0x5B, rk::KP3),
    e(0x5C, rk::KP4),
    e(0x5D, rk::KP5),
    e(0x5E, rk::KP6),
    e(0x5F, rk::KP7),
    e(0x60, rk::KP8),
    e(0x61, rk::KP9),
    e(0x62, rk::KP0),
    e(0x63, rk::KP_PERIOD),
    e(0x64, rk::OEM_102),
    e(0x65, rk::COMPOSE),
    e(0x66, rk::POWER),
    e(0x67, rk::KP_EQUALS),
    e(0x68, rk::F13),
    e(0x69, rk::F14),
    e(0x6A, rk::F15),
    e(0x75, rk::HELP),
    e(0x76, rk::MENU),
    e(0x7A, rk::UNDO),
    e(0x9A, rk::SYSREQ),
    e(0xE0, rk::LCTRL),
    e(0xE1, rk::LSHIFT),
    e(0xE2, rk::LALT),
    e(0xE3, rk::LSUPER),
    e(0xE4, rk::RCTRL),
    e(0xE5, rk::RSHIFT),
    e(0xE6, rk::RALT),
    e(0xE7, rk::RSUPER),
];

lazy_static! {
    /// Lookup tables built from `PS4_KEY_MAP`, shared by every driver instance.
    pub static ref PS4_KEYMAP: Keymap = Keymap::from_table(PS4_KEY_MAP);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_modifiers() {
        assert_eq!(PS4_KEYMAP.translate(0x04), rk::A);
        assert_eq!(PS4_KEYMAP.translate(0x1D), rk::Z);
        assert_eq!(PS4_KEYMAP.translate(0xE0), rk::LCTRL);
        assert_eq!(PS4_KEYMAP.translate(0xE7), rk::RSUPER);
    }

    #[test]
    fn reverse_lookup() {
        assert_eq!(PS4_KEYMAP.lookup(rk::A), 0x04);
        assert_eq!(PS4_KEYMAP.lookup(rk::NUMLOCK), 0x53);
        assert_eq!(PS4_KEYMAP.lookup(rk::EURO), 0);
    }

    #[test]
    fn scancodes_are_unique() {
        let mut seen = [false; 256];
        for entry in PS4_KEY_MAP {
            assert!(!seen[entry.scancode as usize], "{:#04x}", entry.scancode);
            seen[entry.scancode as usize] = true;
        }
    }

    #[test]
    fn gaps_are_unknown() {
        assert_eq!(PS4_KEYMAP.translate(0x00), rk::UNKNOWN);
        assert_eq!(PS4_KEYMAP.translate(0x6B), rk::UNKNOWN);
        assert_eq!(PS4_KEYMAP.translate(0xE8), rk::UNKNOWN);
    }
}
