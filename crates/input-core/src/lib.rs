//! Uniform frontend input model.
//!
//! This crate provides:
//! - [`Device`] and the per-device id constants
//! - [`retro_key`]: frontend key identifiers
//! - [`Keymap`]: scancode <-> key id translation tables
//! - [`Keybind`] / [`KeybindSet`]: user and auto binds with per-field fallback
//! - [`JoypadDriver`]: joypad sub-drivers plus the analog and rumble helpers
//! - [`InputDriver`]: the capability every platform input driver implements

pub mod bind;
pub mod device;
pub mod driver;
pub mod event;
#[cfg(feature = "gilrs")]
pub mod gilrs_joypad;
pub mod joypad;
pub mod keymap;
pub mod retro_key;

pub use bind::{
    AXIS_NONE, AxisDir, BIND_LIST_LEN, FIRST_CUSTOM_BIND, JoypadInfo, Keybind, KeybindSet,
    NO_BTN, UNBOUND_SET, axis_exceeds, axis_neg, axis_pos,
};
pub use device::{Device, analog_id, joypad_id, mouse_id};
pub use driver::InputDriver;
pub use event::{DiscardEvents, KeyboardEvent, KeyboardEventSink};
pub use joypad::{
    JoypadDriver, NullJoypad, RumbleEffect, VirtualJoypad, init_joypad_driver, joypad_analog,
    joypad_driver_names, joypad_set_rumble,
};
pub use keymap::{KeyMapEntry, Keymap};
pub use retro_key::RetroKey;
