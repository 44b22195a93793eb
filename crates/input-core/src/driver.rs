use crate::bind::{JoypadInfo, KeybindSet};
use crate::device::Device;
use crate::event::KeyboardEventSink;
use crate::joypad::{JoypadDriver, RumbleEffect};

/// An input driver as seen by the frontend.
///
/// The frontend calls `poll` once per frame and then any number of `state`
/// queries. Queries read what the last poll latched and never do I/O.
/// Dropping the driver frees it.
pub trait InputDriver {
    /// Registered driver name.
    fn ident(&self) -> &'static str;

    /// Refresh all devices. Key edges found during the poll go to `events`.
    fn poll(&mut self, events: &mut dyn KeyboardEventSink);

    /// Read one input. `binds` holds one bind table per port.
    fn state(
        &self,
        joypad_info: &JoypadInfo<'_>,
        binds: &[KeybindSet],
        port: u32,
        device: Device,
        index: u32,
        id: u32,
    ) -> i16;

    /// Bitmask of `Device::capability_bit` for every device this driver serves.
    fn capabilities(&self) -> u64;

    fn grab_mouse(&mut self, _state: bool) {}

    fn set_rumble(&mut self, port: u32, effect: RumbleEffect, strength: u16) -> bool;

    fn joypad_driver(&self) -> Option<&dyn JoypadDriver>;
}
