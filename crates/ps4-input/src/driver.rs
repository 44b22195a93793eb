use anyhow::{Context, Result};
use input_core::bind::{JoypadInfo, KeybindSet};
use input_core::device::{Device, joypad_id};
use input_core::driver::InputDriver;
use input_core::event::KeyboardEventSink;
use input_core::joypad::{
    JoypadDriver, RumbleEffect, init_joypad_driver, joypad_analog, joypad_set_rumble,
};
use input_core::keymap::Keymap;
use log::{debug, info, warn};

use crate::config::InputConfig;
use crate::keyboard::KeyboardLatch;
use crate::keymap::PS4_KEYMAP;
use crate::mouse::MouseLatch;
use crate::resolver;
use crate::sdk::{Handle, MOUSE_OPEN_PARAM_MERGED, MouseOpenParam, OrbisSdk, PortType, UserId};

/// Name the driver registers under.
pub const IDENT: &str = "ps4";

/// PS4 input driver.
///
/// Owns the joypad sub-driver and the mouse and keyboard handles. All of them
/// are released exactly once when the driver is dropped.
pub struct Ps4Input<S: OrbisSdk> {
    sdk: S,
    joypad: Box<dyn JoypadDriver>,
    keymap: &'static Keymap,
    mouse_handle: Option<Handle>,
    mouse: MouseLatch,
    keyboard_handle: Option<Handle>,
    keyboard: KeyboardLatch,
}

impl<S: OrbisSdk> Ps4Input<S> {
    /// Create the driver with the joypad sub-driver called `joypad_driver`.
    ///
    /// Mouse and keyboard are optional: if they can't be opened the driver
    /// still comes up without them. Fails only when no joypad driver starts.
    pub fn initialize(joypad_driver: &str, sdk: S, config: &InputConfig) -> Result<Self> {
        let joypad = init_joypad_driver(joypad_driver)
            .with_context(|| format!("{IDENT}: joypad driver \"{joypad_driver}\""))?;
        Ok(Self::with_joypad(joypad, sdk, config))
    }

    /// `initialize` with the joypad driver named in `config`.
    pub fn from_config(sdk: S, config: &InputConfig) -> Result<Self> {
        Self::initialize(&config.joypad_driver, sdk, config)
    }

    /// Create the driver around an existing joypad sub-driver.
    pub fn with_joypad(joypad: Box<dyn JoypadDriver>, mut sdk: S, config: &InputConfig) -> Self {
        let want_mouse = cfg!(feature = "mouse") && config.mouse;
        let want_keyboard = cfg!(feature = "keyboard") && config.keyboard;

        let mut mouse_handle = None;
        let mut keyboard_handle = None;
        if want_mouse || want_keyboard {
            match sdk.initial_user() {
                Ok(user) => {
                    if want_mouse {
                        mouse_handle = open_mouse(&mut sdk, user, config.merged_mouse);
                    }
                    if want_keyboard {
                        keyboard_handle = open_keyboard(&mut sdk, user);
                    }
                }
                Err(e) => warn!("No initial user, mouse and keyboard disabled: {e}"),
            }
        }

        info!(
            "Input driver \"{IDENT}\" initialized (joypad: {}, mouse: {}, keyboard: {})",
            joypad.ident(),
            mouse_handle.is_some(),
            keyboard_handle.is_some()
        );

        Self {
            sdk,
            joypad,
            keymap: &PS4_KEYMAP,
            mouse_handle,
            mouse: MouseLatch::new(),
            keyboard_handle,
            keyboard: KeyboardLatch::new(config.flush_keys_on_disconnect),
        }
    }

    /// Release everything. Same as dropping the driver.
    pub fn free(self) {
        drop(self);
    }

    pub fn mouse(&self) -> &MouseLatch {
        &self.mouse
    }

    pub fn keyboard(&self) -> &KeyboardLatch {
        &self.keyboard
    }

    pub fn sdk(&self) -> &S {
        &self.sdk
    }
}

fn open_mouse<S: OrbisSdk>(sdk: &mut S, user: UserId, merged: bool) -> Option<Handle> {
    if let Err(e) = sdk.mouse_init() {
        warn!("Mouse init failed: {e}");
    }
    let param = MouseOpenParam {
        behavior_flag: if merged { MOUSE_OPEN_PARAM_MERGED } else { 0 },
    };
    match sdk.mouse_open(user, PortType::Standard, 0, &param) {
        Ok(handle) => {
            debug!("Mouse opened, handle {handle}");
            Some(handle)
        }
        Err(e) => {
            warn!("Mouse unavailable: {e}");
            None
        }
    }
}

fn open_keyboard<S: OrbisSdk>(sdk: &mut S, user: UserId) -> Option<Handle> {
    if let Err(e) = sdk.keyboard_init() {
        warn!("Keyboard init failed: {e}");
    }
    match sdk.keyboard_open(user, PortType::Standard, 0) {
        Ok(handle) => {
            debug!("Keyboard opened, handle {handle}");
            Some(handle)
        }
        Err(e) => {
            warn!("Keyboard unavailable: {e}");
            None
        }
    }
}

impl<S: OrbisSdk> InputDriver for Ps4Input<S> {
    fn ident(&self) -> &'static str {
        IDENT
    }

    fn poll(&mut self, events: &mut dyn KeyboardEventSink) {
        self.joypad.poll();
        if let Some(handle) = self.mouse_handle {
            self.mouse.refresh(&mut self.sdk, handle);
        }
        if let Some(handle) = self.keyboard_handle {
            self.keyboard.refresh(&mut self.sdk, handle, self.keymap, events);
        }
    }

    fn state(
        &self,
        joypad_info: &JoypadInfo<'_>,
        binds: &[KeybindSet],
        port: u32,
        device: Device,
        index: u32,
        id: u32,
    ) -> i16 {
        let joypad = self.joypad.as_ref();
        match device {
            Device::Joypad => {
                let Some(port_binds) = binds.get(port as usize) else {
                    return 0;
                };
                if id == joypad_id::MASK {
                    resolver::joypad_mask(joypad, joypad_info, port_binds)
                } else {
                    resolver::joypad_pressed(joypad, joypad_info, port_binds, id as usize) as i16
                }
            }
            Device::Analog => binds.get(port as usize).map_or(0, |port_binds| {
                joypad_analog(joypad, joypad_info, port, index, id, port_binds)
            }),
            Device::Keyboard => self.keyboard.key_state(self.keymap, id),
            Device::Mouse | Device::MouseScreen => self.mouse.state(id),
            _ => 0,
        }
    }

    fn capabilities(&self) -> u64 {
        let mut caps = Device::Joypad.capability_bit() | Device::Analog.capability_bit();
        if self.mouse_handle.is_some() {
            caps |= Device::Mouse.capability_bit();
        }
        if self.keyboard_handle.is_some() {
            caps |= Device::Keyboard.capability_bit();
        }
        caps
    }

    fn set_rumble(&mut self, port: u32, effect: RumbleEffect, strength: u16) -> bool {
        joypad_set_rumble(self.joypad.as_mut(), port, effect, strength)
    }

    fn joypad_driver(&self) -> Option<&dyn JoypadDriver> {
        Some(self.joypad.as_ref())
    }
}

impl<S: OrbisSdk> Drop for Ps4Input<S> {
    fn drop(&mut self) {
        self.joypad.destroy();
        if let Some(handle) = self.mouse_handle.take()
            && let Err(e) = self.sdk.mouse_close(handle)
        {
            warn!("Mouse close failed: {e}");
        }
        if let Some(handle) = self.keyboard_handle.take()
            && let Err(e) = self.sdk.keyboard_close(handle)
        {
            warn!("Keyboard close failed: {e}");
        }
        info!("Input driver \"{IDENT}\" freed");
    }
}
