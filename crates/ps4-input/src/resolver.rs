/// Joypad bind resolution for digital queries.
///
/// User binds win per field; unset fields fall back to the pad's auto binds.
/// A button hit short-circuits the axis read for the same bind.
use input_core::bind::{
    BIND_LIST_LEN, FIRST_CUSTOM_BIND, JoypadInfo, Keybind, KeybindSet, NO_BTN, axis_exceeds,
};
use input_core::joypad::JoypadDriver;

/// Whether a resolved bind is active on the pad behind `info`.
pub fn bind_active(joypad: &dyn JoypadDriver, info: &JoypadInfo<'_>, bind: &Keybind) -> bool {
    if bind.joykey != NO_BTN && joypad.button(info.joy_idx, bind.joykey) {
        return true;
    }
    axis_exceeds(joypad.axis(info.joy_idx, bind.joyaxis), info.axis_threshold)
}

/// Single digital bind query. Ids past the bind table read as released.
pub fn joypad_pressed(
    joypad: &dyn JoypadDriver,
    info: &JoypadInfo<'_>,
    binds: &KeybindSet,
    id: usize,
) -> bool {
    if id >= BIND_LIST_LEN {
        return false;
    }
    let bind = binds[id].resolve(&info.auto_binds[id]);
    bind_active(joypad, info, &bind)
}

/// Bitfield of the 16 RetroPad buttons, bit `i` set when bind `i` is active.
pub fn joypad_mask(joypad: &dyn JoypadDriver, info: &JoypadInfo<'_>, binds: &KeybindSet) -> i16 {
    let mut mask: u16 = 0;
    for i in 0..FIRST_CUSTOM_BIND {
        if joypad_pressed(joypad, info, binds, i) {
            mask |= 1 << i;
        }
    }
    mask as i16
}
