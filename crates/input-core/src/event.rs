use crate::device::Device;
use crate::retro_key::RetroKey;

/// A key edge delivered to the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardEvent {
    pub down: bool,
    pub key: RetroKey,
    /// Text character produced by the key, 0 when none.
    pub character: u32,
    /// Modifier mask as reported alongside the key.
    pub modifiers: u16,
    pub device: Device,
}

impl KeyboardEvent {
    pub fn down(key: RetroKey, modifiers: u16) -> Self {
        Self {
            down: true,
            key,
            character: 0,
            modifiers,
            device: Device::Keyboard,
        }
    }

    pub fn up(key: RetroKey, modifiers: u16) -> Self {
        Self {
            down: false,
            ..Self::down(key, modifiers)
        }
    }
}

/// Receiver of key edges produced while a driver polls.
pub trait KeyboardEventSink {
    fn keyboard_event(
        &mut self,
        down: bool,
        key: RetroKey,
        character: u32,
        modifiers: u16,
        device: Device,
    );
}

impl KeyboardEventSink for Vec<KeyboardEvent> {
    fn keyboard_event(
        &mut self,
        down: bool,
        key: RetroKey,
        character: u32,
        modifiers: u16,
        device: Device,
    ) {
        self.push(KeyboardEvent {
            down,
            key,
            character,
            modifiers,
            device,
        });
    }
}

/// Sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardEvents;

impl KeyboardEventSink for DiscardEvents {
    fn keyboard_event(&mut self, _: bool, _: RetroKey, _: u32, _: u16, _: Device) {}
}
