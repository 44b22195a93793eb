/// Debug keyboard edge detection.
///
/// The debug keyboard has no event queue. Each read returns a modifier mask
/// and a fixed array of held-key slots. `KeyboardLatch` compares every read
/// against the previous one and turns the differences into key-down / key-up
/// events, one per transition.
use input_core::event::KeyboardEventSink;
use input_core::keymap::Keymap;
use input_core::retro_key;
use input_core::Device;
use log::{debug, trace};

use crate::sdk::{Handle, KEY_CODE_SLOTS, KeyboardData, OrbisSdk};

/// Width of the held-key slot array.
pub const SLOT_CAPACITY: usize = KEY_CODE_SLOTS;
/// Highest scancode the keyboard reports.
pub const MAX_SCANCODE: u8 = 0xE7;
const SCANCODE_RANGE: usize = MAX_SCANCODE as usize + 1;

/// Which snapshot word reports a modifier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskWord {
    /// The modifier mask (CTRL, SHIFT, ALT, GUI).
    Modifiers,
    /// The LED state (NUM, CAPS and SCROLL lock).
    Leds,
}

/// A modifier scancode and the bit that reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifierKey {
    pub scancode: u8,
    pub bit: u32,
    pub word: MaskWord,
}

const fn modifier(scancode: u8, bit: u32) -> ModifierKey {
    ModifierKey {
        scancode,
        bit,
        word: MaskWord::Modifiers,
    }
}

const fn lock(scancode: u8, bit: u32) -> ModifierKey {
    ModifierKey {
        scancode,
        bit,
        word: MaskWord::Leds,
    }
}

/// Modifier keys in the order they are checked each poll.
///
/// The lock keys reuse the low CTRL/SHIFT/ALT bit values but live in the LED
/// word, so they never toggle together with a CTRL-class key.
pub const MOD_TABLE: [ModifierKey; 11] = [
    modifier(0xE0, 0x01), // LCTRL
    modifier(0xE4, 0x10), // RCTRL
    modifier(0xE1, 0x02), // LSHIFT
    modifier(0xE5, 0x20), // RSHIFT
    modifier(0xE2, 0x04), // LALT
    modifier(0xE6, 0x40), // RALT
    modifier(0xE3, 0x08), // LGUI
    modifier(0xE7, 0x80), // RGUI
    lock(0x53, 0x01),     // NUMLOCK
    lock(0x39, 0x02),     // CAPSLOCK
    lock(0x47, 0x04),     // SCROLLOCK
];

impl ModifierKey {
    fn is_down(&self, snapshot: &KeyboardData) -> bool {
        let word = match self.word {
            MaskWord::Modifiers => snapshot.modifier_key,
            MaskWord::Leds => snapshot.led_state,
        };
        word & self.bit != 0
    }
}

/// Keyboard state carried between polls.
pub struct KeyboardLatch {
    connected: bool,
    /// Number of outstanding downs per scancode. A key is pressed while its
    /// count is non-zero.
    held: [u8; SCANCODE_RANGE],
    /// Last reported state of each `MOD_TABLE` entry. A lock key can also sit
    /// in a slot, so the two paths add to one count instead of overwriting it.
    mod_down: [bool; MOD_TABLE.len()],
    /// Slot array from the previous poll. 0 is an empty slot.
    prev_slots: [u8; SLOT_CAPACITY],
    /// Emit ups for every held key when the keyboard goes away.
    flush_on_disconnect: bool,
}

impl Default for KeyboardLatch {
    fn default() -> Self {
        Self::new(false)
    }
}

impl KeyboardLatch {
    pub fn new(flush_on_disconnect: bool) -> Self {
        Self {
            connected: false,
            held: [0; SCANCODE_RANGE],
            mod_down: [false; MOD_TABLE.len()],
            prev_slots: [0; SLOT_CAPACITY],
            flush_on_disconnect,
        }
    }

    /// Read the keyboard once and emit the edges since the last read.
    ///
    /// A failed read leaves the latch untouched.
    pub fn refresh<S: OrbisSdk + ?Sized>(
        &mut self,
        sdk: &mut S,
        handle: Handle,
        keymap: &Keymap,
        events: &mut dyn KeyboardEventSink,
    ) {
        match sdk.keyboard_read_state(handle) {
            Ok(snapshot) => self.apply(&snapshot, keymap, events),
            Err(e) => trace!("Keyboard read failed: {e}"),
        }
    }

    /// Feed one snapshot through the edge detector.
    pub fn apply(
        &mut self,
        snapshot: &KeyboardData,
        keymap: &Keymap,
        events: &mut dyn KeyboardEventSink,
    ) {
        let was_connected = self.connected;
        self.connected = snapshot.connected;

        if !snapshot.connected {
            if was_connected {
                debug!("Keyboard disconnected");
                if self.flush_on_disconnect {
                    self.release_all(keymap, events);
                }
            }
            return;
        }
        if !was_connected {
            debug!("Keyboard connected");
        }

        let modifiers = snapshot.modifier_key as u16;

        for (i, m) in MOD_TABLE.iter().enumerate() {
            let down = m.is_down(snapshot);
            if down == self.mod_down[i] {
                continue;
            }
            self.mod_down[i] = down;
            let count = &mut self.held[m.scancode as usize];
            *count = if down {
                count.saturating_add(1)
            } else {
                count.saturating_sub(1)
            };
            Self::emit(events, keymap, down, m.scancode, modifiers);
        }

        for (i, &code) in snapshot.key_codes.iter().enumerate() {
            let cur = Self::slot_code(code);
            let prev = self.prev_slots[i];
            if cur == prev {
                continue;
            }
            if prev != 0 {
                let count = &mut self.held[prev as usize];
                *count = count.saturating_sub(1);
                Self::emit(events, keymap, false, prev, modifiers);
            }
            if cur != 0 {
                let count = &mut self.held[cur as usize];
                *count = count.saturating_add(1);
                Self::emit(events, keymap, true, cur, modifiers);
            }
            self.prev_slots[i] = cur;
        }
    }

    pub fn connected(&self) -> bool {
        self.connected
    }

    /// Whether the frontend currently believes `scancode` is down.
    pub fn is_pressed(&self, scancode: u8) -> bool {
        self.held
            .get(scancode as usize)
            .is_some_and(|&count| count > 0)
    }

    pub fn prev_slots(&self) -> &[u8; SLOT_CAPACITY] {
        &self.prev_slots
    }

    /// Keyboard query for frontend key `id`.
    pub fn key_state(&self, keymap: &Keymap, id: u32) -> i16 {
        if id >= retro_key::LAST {
            return 0;
        }
        self.is_pressed(keymap.lookup(id)) as i16
    }

    fn release_all(&mut self, keymap: &Keymap, events: &mut dyn KeyboardEventSink) {
        for scancode in 0..=MAX_SCANCODE {
            for _ in 0..self.held[scancode as usize] {
                Self::emit(events, keymap, false, scancode, 0);
            }
            self.held[scancode as usize] = 0;
        }
        self.mod_down = [false; MOD_TABLE.len()];
        self.prev_slots = [0; SLOT_CAPACITY];
    }

    /// Slot codes above `MAX_SCANCODE` are read as an empty slot.
    fn slot_code(code: u8) -> u8 {
        if code > MAX_SCANCODE { 0 } else { code }
    }

    fn emit(
        events: &mut dyn KeyboardEventSink,
        keymap: &Keymap,
        down: bool,
        scancode: u8,
        modifiers: u16,
    ) {
        let key = keymap.translate(scancode as u32);
        trace!(
            "Key {} scancode={scancode:#04x} key={key} mod={modifiers:#06x}",
            if down { "down" } else { "up" }
        );
        events.keyboard_event(down, key, 0, modifiers, Device::Keyboard);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::PS4_KEYMAP;
    use crate::sdk::VirtualSdk;
    use input_core::event::KeyboardEvent;
    use input_core::retro_key as rk;
    use proptest::prelude::*;

    fn snapshot(mask: u32, slots: [u8; SLOT_CAPACITY]) -> KeyboardData {
        KeyboardData {
            connected: true,
            modifier_key: mask,
            key_codes: slots,
            ..KeyboardData::default()
        }
    }

    fn poll(latch: &mut KeyboardLatch, data: KeyboardData) -> Vec<KeyboardEvent> {
        let mut events = Vec::new();
        latch.apply(&data, &PS4_KEYMAP, &mut events);
        events
    }

    #[test]
    fn modifier_down_then_up() {
        let mut latch = KeyboardLatch::default();

        let events = poll(&mut latch, snapshot(0x01, [0; 6]));
        assert_eq!(events, vec![KeyboardEvent::down(rk::LCTRL, 0x0001)]);

        let events = poll(&mut latch, snapshot(0x00, [0; 6]));
        assert_eq!(events, vec![KeyboardEvent::up(rk::LCTRL, 0x0000)]);
    }

    #[test]
    fn modifier_order_follows_table() {
        let mut latch = KeyboardLatch::default();
        let events = poll(&mut latch, snapshot(0x10 | 0x08, [0; 6]));
        assert_eq!(
            events,
            vec![
                KeyboardEvent::down(rk::RCTRL, 0x18),
                KeyboardEvent::down(rk::LSUPER, 0x18),
            ]
        );
    }

    #[test]
    fn lock_keys_follow_led_word() {
        let mut latch = KeyboardLatch::default();
        let events = poll(&mut latch, snapshot(0x02, [0; 6]));
        assert_eq!(events, vec![KeyboardEvent::down(rk::LSHIFT, 0x02)]);
        assert!(!latch.is_pressed(0x39));

        let mut data = snapshot(0x02, [0; 6]);
        data.led_state = 0x02 | 0x04;
        let events = poll(&mut latch, data);
        assert_eq!(
            events,
            vec![
                KeyboardEvent::down(rk::CAPSLOCK, 0x02),
                KeyboardEvent::down(rk::SCROLLOCK, 0x02),
            ]
        );

        data.led_state = 0;
        let events = poll(&mut latch, data);
        assert_eq!(
            events,
            vec![
                KeyboardEvent::up(rk::CAPSLOCK, 0x02),
                KeyboardEvent::up(rk::SCROLLOCK, 0x02),
            ]
        );
        assert!(latch.is_pressed(0xE1));
    }

    #[test]
    fn lock_key_in_slot_and_led_word_share_one_hold() {
        let mut latch = KeyboardLatch::default();
        let caps_held = snapshot(0, [0x39, 0, 0, 0, 0, 0]);

        assert_eq!(poll(&mut latch, caps_held), vec![KeyboardEvent::down(rk::CAPSLOCK, 0)]);
        assert!(poll(&mut latch, caps_held).is_empty());
        assert!(latch.is_pressed(0x39));
        assert_eq!(latch.prev_slots()[0], 0x39);

        let mut led_on = caps_held;
        led_on.led_state = 0x02;
        assert_eq!(poll(&mut latch, led_on), vec![KeyboardEvent::down(rk::CAPSLOCK, 0)]);

        let mut released = snapshot(0, [0; 6]);
        released.led_state = 0x02;
        assert_eq!(poll(&mut latch, released), vec![KeyboardEvent::up(rk::CAPSLOCK, 0)]);
        assert!(latch.is_pressed(0x39));

        assert_eq!(poll(&mut latch, snapshot(0, [0; 6])), vec![KeyboardEvent::up(rk::CAPSLOCK, 0)]);
        assert!(!latch.is_pressed(0x39));
    }

    #[test]
    fn modifier_mask_is_truncated_to_16_bits() {
        let mut latch = KeyboardLatch::default();
        let events = poll(&mut latch, snapshot(0x0001_0040, [0; 6]));
        assert_eq!(events, vec![KeyboardEvent::down(rk::RALT, 0x0040)]);
    }

    #[test]
    fn slot_add_then_remove() {
        let mut latch = KeyboardLatch::default();

        let events = poll(&mut latch, snapshot(0, [0x04, 0, 0, 0, 0, 0]));
        assert_eq!(events, vec![KeyboardEvent::down(rk::A, 0)]);
        assert!(latch.is_pressed(0x04));

        let events = poll(&mut latch, snapshot(0, [0; 6]));
        assert_eq!(events, vec![KeyboardEvent::up(rk::A, 0)]);
        assert!(!latch.is_pressed(0x04));
    }

    #[test]
    fn slot_events_carry_current_modifiers() {
        let mut latch = KeyboardLatch::default();
        let events = poll(&mut latch, snapshot(0x20, [0x05, 0, 0, 0, 0, 0]));
        assert_eq!(
            events,
            vec![
                KeyboardEvent::down(rk::RSHIFT, 0x20),
                KeyboardEvent::down(rk::B, 0x20),
            ]
        );
    }

    #[test]
    fn slot_swap_emits_per_slot_pairs() {
        let mut latch = KeyboardLatch::default();
        poll(&mut latch, snapshot(0, [0x04, 0x05, 0, 0, 0, 0]));

        let events = poll(&mut latch, snapshot(0, [0x05, 0x04, 0, 0, 0, 0]));
        assert_eq!(
            events,
            vec![
                KeyboardEvent::up(rk::A, 0),
                KeyboardEvent::down(rk::B, 0),
                KeyboardEvent::up(rk::B, 0),
                KeyboardEvent::down(rk::A, 0),
            ]
        );
        assert!(latch.is_pressed(0x04));
        assert!(latch.is_pressed(0x05));
    }

    #[test]
    fn key_moving_to_earlier_slot_stays_pressed() {
        let mut latch = KeyboardLatch::default();
        poll(&mut latch, snapshot(0, [0x04, 0x05, 0, 0, 0, 0]));

        let events = poll(&mut latch, snapshot(0, [0x05, 0, 0, 0, 0, 0]));
        assert_eq!(
            events,
            vec![
                KeyboardEvent::up(rk::A, 0),
                KeyboardEvent::down(rk::B, 0),
                KeyboardEvent::up(rk::B, 0),
            ]
        );
        assert!(!latch.is_pressed(0x04));
        assert!(latch.is_pressed(0x05));
    }

    #[test]
    fn unchanged_snapshot_is_silent() {
        let mut latch = KeyboardLatch::default();
        poll(&mut latch, snapshot(0x01, [0x04, 0, 0, 0, 0, 0]));
        let events = poll(&mut latch, snapshot(0x01, [0x04, 0, 0, 0, 0, 0]));
        assert!(events.is_empty());
    }

    #[test]
    fn disconnected_snapshot_keeps_state() {
        let mut latch = KeyboardLatch::default();
        poll(&mut latch, snapshot(0x01, [0x04, 0, 0, 0, 0, 0]));

        let mut gone = snapshot(0, [0; 6]);
        gone.connected = false;
        let events = poll(&mut latch, gone);
        assert!(events.is_empty());
        assert!(!latch.connected());
        assert!(latch.is_pressed(0x04));
        assert!(latch.is_pressed(0xE0));

        // Back with the same keys held: nothing changed, nothing emitted.
        let events = poll(&mut latch, snapshot(0x01, [0x04, 0, 0, 0, 0, 0]));
        assert!(events.is_empty());
    }

    #[test]
    fn flush_on_disconnect_releases_everything() {
        let mut latch = KeyboardLatch::new(true);
        poll(&mut latch, snapshot(0x01, [0x04, 0, 0, 0, 0, 0]));

        let mut gone = snapshot(0, [0; 6]);
        gone.connected = false;
        let events = poll(&mut latch, gone);
        assert_eq!(
            events,
            vec![KeyboardEvent::up(rk::A, 0), KeyboardEvent::up(rk::LCTRL, 0)]
        );
        assert!(!latch.is_pressed(0x04));
        assert_eq!(latch.prev_slots(), &[0; SLOT_CAPACITY]);

        let events = poll(&mut latch, snapshot(0x01, [0x04, 0, 0, 0, 0, 0]));
        assert_eq!(
            events,
            vec![
                KeyboardEvent::down(rk::LCTRL, 0x01),
                KeyboardEvent::down(rk::A, 0x01),
            ]
        );
    }

    #[test]
    fn out_of_range_slot_code_reads_empty() {
        let mut latch = KeyboardLatch::default();
        let events = poll(&mut latch, snapshot(0, [0xF0, 0, 0, 0, 0, 0]));
        assert!(events.is_empty());
        assert_eq!(latch.prev_slots()[0], 0);
    }

    #[test]
    fn key_state_query() {
        let mut latch = KeyboardLatch::default();
        poll(&mut latch, snapshot(0, [0x04, 0, 0, 0, 0, 0]));
        assert_eq!(latch.key_state(&PS4_KEYMAP, rk::A), 1);
        assert_eq!(latch.key_state(&PS4_KEYMAP, rk::B), 0);
        assert_eq!(latch.key_state(&PS4_KEYMAP, rk::LAST), 0);
        assert_eq!(latch.key_state(&PS4_KEYMAP, rk::EURO), 0);
    }

    #[test]
    fn failed_read_changes_nothing() {
        let sdk_handle = VirtualSdk::new();
        let mut sdk = sdk_handle.clone();
        let mut latch = KeyboardLatch::default();
        let mut events: Vec<KeyboardEvent> = Vec::new();

        sdk_handle.set_keyboard(snapshot(0, [0x04, 0, 0, 0, 0, 0]));
        latch.refresh(&mut sdk, 1, &PS4_KEYMAP, &mut events);
        assert_eq!(events.len(), 1);

        sdk_handle.set_keyboard(snapshot(0, [0; 6]));
        sdk_handle.fail_next_keyboard_read();
        events.clear();
        latch.refresh(&mut sdk, 1, &PS4_KEYMAP, &mut events);
        assert!(events.is_empty());
        assert!(latch.is_pressed(0x04));
    }

    // Letters a..z: never modifiers, one key id each.
    const LETTERS: std::ops::RangeInclusive<u8> = 0x04..=0x1D;

    fn slots_strategy() -> impl Strategy<Value = [u8; SLOT_CAPACITY]> {
        proptest::sample::subsequence(LETTERS.collect::<Vec<u8>>(), 0..=SLOT_CAPACITY)
            .prop_flat_map(|mut keys| {
                keys.resize(SLOT_CAPACITY, 0);
                Just(keys).prop_shuffle()
            })
            .prop_map(|keys| {
                let mut slots = [0u8; SLOT_CAPACITY];
                slots.copy_from_slice(&keys);
                slots
            })
    }

    fn snapshots_strategy() -> impl Strategy<Value = Vec<KeyboardData>> {
        proptest::collection::vec(
            (any::<u8>(), slots_strategy(), proptest::bool::weighted(0.9)),
            1..24,
        )
        .prop_map(|polls| {
            polls
                .into_iter()
                .map(|(mask, slots, connected)| KeyboardData {
                    connected,
                    ..snapshot(mask as u32, slots)
                })
                .collect()
        })
    }

    fn modifier_keys() -> Vec<u32> {
        MOD_TABLE
            .iter()
            .map(|m| PS4_KEYMAP.translate(m.scancode as u32))
            .collect()
    }

    proptest! {
        #[test]
        fn downs_minus_ups_matches_pressed(polls in snapshots_strategy()) {
            let mut latch = KeyboardLatch::default();
            let mut events: Vec<KeyboardEvent> = Vec::new();
            for data in &polls {
                latch.apply(data, &PS4_KEYMAP, &mut events);
            }

            let scancodes = LETTERS.chain(MOD_TABLE.iter().map(|m| m.scancode));
            for scancode in scancodes {
                let key = PS4_KEYMAP.translate(scancode as u32);
                let balance: i32 = events
                    .iter()
                    .filter(|e| e.key == key)
                    .map(|e| if e.down { 1 } else { -1 })
                    .sum();
                prop_assert_eq!(balance, latch.is_pressed(scancode) as i32);
            }
            for &slot in latch.prev_slots() {
                prop_assert!(slot == 0 || latch.is_pressed(slot));
            }
        }

        #[test]
        fn modifier_events_ignore_slots(
            masks in proptest::collection::vec(any::<u8>(), 1..12),
            slots_a in proptest::collection::vec(slots_strategy(), 12),
            slots_b in proptest::collection::vec(slots_strategy(), 12),
        ) {
            let mods = modifier_keys();
            let mut a = KeyboardLatch::default();
            let mut b = KeyboardLatch::default();

            for (i, &mask) in masks.iter().enumerate() {
                let mut events_a: Vec<KeyboardEvent> = Vec::new();
                let mut events_b: Vec<KeyboardEvent> = Vec::new();
                a.apply(&snapshot(mask as u32, slots_a[i]), &PS4_KEYMAP, &mut events_a);
                b.apply(&snapshot(mask as u32, slots_b[i]), &PS4_KEYMAP, &mut events_b);

                let only_mods = |events: Vec<KeyboardEvent>| -> Vec<KeyboardEvent> {
                    events.into_iter().filter(|e| mods.contains(&e.key)).collect()
                };
                prop_assert_eq!(only_mods(events_a), only_mods(events_b));
            }
        }

        #[test]
        fn permuted_slots_pair_per_slot(
            first in slots_strategy(),
            order in Just((0..SLOT_CAPACITY).collect::<Vec<usize>>()).prop_shuffle(),
        ) {
            let mut second = [0u8; SLOT_CAPACITY];
            for (i, &from) in order.iter().enumerate() {
                second[i] = first[from];
            }

            let mut latch = KeyboardLatch::default();
            poll(&mut latch, snapshot(0, first));
            let events = poll(&mut latch, snapshot(0, second));

            let expected: usize = (0..SLOT_CAPACITY)
                .filter(|&i| first[i] != second[i])
                .map(|i| (first[i] != 0) as usize + (second[i] != 0) as usize)
                .sum();
            prop_assert_eq!(events.len(), expected);

            for &code in first.iter().filter(|&&c| c != 0) {
                prop_assert!(latch.is_pressed(code));
            }
        }
    }
}
