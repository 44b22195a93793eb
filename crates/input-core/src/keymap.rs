/// Scancode <-> key id translation.
///
/// A platform ships a static table of `(scancode, key)` pairs. `Keymap` turns
/// it into two dense lookup tables once, so both directions are a single index
/// afterwards.
use crate::retro_key::{self, RetroKey};

/// Number of distinct 8-bit scancodes.
pub const SCANCODE_COUNT: usize = 256;

/// One row of a platform keymap table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMapEntry {
    pub scancode: u8,
    pub key: RetroKey,
}

impl KeyMapEntry {
    pub const fn new(scancode: u8, key: RetroKey) -> Self {
        Self { scancode, key }
    }
}

/// Dense bidirectional keymap.
pub struct Keymap {
    to_key: [RetroKey; SCANCODE_COUNT],
    to_scancode: [u8; retro_key::LAST as usize],
}

impl Keymap {
    /// Build both lookup tables from a platform table.
    ///
    /// When a key id appears more than once, the first scancode wins for the
    /// reverse lookup. Entries whose key is `UNKNOWN` or out of range are
    /// ignored.
    pub fn from_table(table: &[KeyMapEntry]) -> Self {
        let mut to_key = [retro_key::UNKNOWN; SCANCODE_COUNT];
        let mut to_scancode = [0u8; retro_key::LAST as usize];

        for entry in table {
            if entry.key == retro_key::UNKNOWN || entry.key >= retro_key::LAST {
                continue;
            }
            let slot = &mut to_key[entry.scancode as usize];
            if *slot == retro_key::UNKNOWN {
                *slot = entry.key;
            }
            let reverse = &mut to_scancode[entry.key as usize];
            if *reverse == 0 {
                *reverse = entry.scancode;
            }
        }

        Self {
            to_key,
            to_scancode,
        }
    }

    /// Platform scancode to frontend key id. Unmapped or out-of-range
    /// scancodes give `UNKNOWN`.
    pub fn translate(&self, scancode: u32) -> RetroKey {
        self.to_key
            .get(scancode as usize)
            .copied()
            .unwrap_or(retro_key::UNKNOWN)
    }

    /// Frontend key id to platform scancode. Unmapped keys give 0.
    pub fn lookup(&self, key: RetroKey) -> u8 {
        self.to_scancode.get(key as usize).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TABLE: &[KeyMapEntry] = &[
        KeyMapEntry::new(0x04, retro_key::A),
        KeyMapEntry::new(0x05, retro_key::B),
        KeyMapEntry::new(0xE0, retro_key::LCTRL),
        KeyMapEntry::new(0x65, retro_key::MENU),
        KeyMapEntry::new(0x76, retro_key::MENU),
    ];

    #[test]
    fn translate_mapped() {
        let map = Keymap::from_table(TABLE);
        assert_eq!(map.translate(0x04), retro_key::A);
        assert_eq!(map.translate(0xE0), retro_key::LCTRL);
    }

    #[test]
    fn translate_unmapped_is_unknown() {
        let map = Keymap::from_table(TABLE);
        assert_eq!(map.translate(0x06), retro_key::UNKNOWN);
        assert_eq!(map.translate(0x1000), retro_key::UNKNOWN);
    }

    #[test]
    fn lookup_mapped_and_unmapped() {
        let map = Keymap::from_table(TABLE);
        assert_eq!(map.lookup(retro_key::B), 0x05);
        assert_eq!(map.lookup(retro_key::Z), 0);
        assert_eq!(map.lookup(retro_key::LAST + 10), 0);
    }

    #[test]
    fn duplicate_key_keeps_first_scancode() {
        let map = Keymap::from_table(TABLE);
        assert_eq!(map.lookup(retro_key::MENU), 0x65);
        assert_eq!(map.translate(0x76), retro_key::MENU);
    }

    proptest! {
        #[test]
        fn translate_is_total(scancode in any::<u32>()) {
            let map = Keymap::from_table(TABLE);
            let key = map.translate(scancode);
            prop_assert!(key < retro_key::LAST);
        }
    }
}
