/// Joypad sub-drivers and the helpers input drivers use to read them.
///
/// An input driver owns exactly one `JoypadDriver`, picked by name at
/// initialize. Digital and analog binds are resolved here so every input
/// driver reads joypads the same way.
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use anyhow::{Result, bail};
use log::{info, warn};

use crate::bind::{
    AxisDir, FIRST_CUSTOM_BIND, JoypadInfo, Keybind, KeybindSet, NO_BTN, analog_bind,
};
use crate::device::analog_id;

/// Rumble motor selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RumbleEffect {
    Strong,
    Weak,
}

/// Platform joypad backend.
pub trait JoypadDriver {
    /// Registered name of the driver.
    fn ident(&self) -> &'static str;

    /// Refresh pad state. Called once per frame before any query.
    fn poll(&mut self);

    /// Returns `true` if button `key` is held on pad `port`.
    fn button(&self, port: u32, key: u16) -> bool;

    /// Reads the half-axis named by `joyaxis` on pad `port`.
    ///
    /// Returns 0 for `AXIS_NONE` or when the axis points the other way.
    fn axis(&self, port: u32, joyaxis: u32) -> i16;

    fn set_rumble(&mut self, _port: u32, _effect: RumbleEffect, _strength: u16) -> bool {
        false
    }

    /// Release backend resources. Called once by the owning input driver.
    fn destroy(&mut self) {}
}

type JoypadCtor = fn() -> Result<Box<dyn JoypadDriver>>;

fn create_null() -> Result<Box<dyn JoypadDriver>> {
    Ok(Box::new(NullJoypad))
}

fn registry() -> Vec<(&'static str, JoypadCtor)> {
    let mut drivers: Vec<(&'static str, JoypadCtor)> = Vec::new();
    #[cfg(feature = "gilrs")]
    drivers.push((
        crate::gilrs_joypad::IDENT,
        crate::gilrs_joypad::create as JoypadCtor,
    ));
    drivers.push((NullJoypad::IDENT, create_null as JoypadCtor));
    drivers
}

/// Names of the joypad drivers compiled into this build, in fallback order.
pub fn joypad_driver_names() -> Vec<&'static str> {
    registry().into_iter().map(|(ident, _)| ident).collect()
}

/// Create the joypad driver called `name`.
///
/// If it is unknown or fails to start, the remaining drivers are tried in
/// registry order. Fails only if none of them can be created.
pub fn init_joypad_driver(name: &str) -> Result<Box<dyn JoypadDriver>> {
    let drivers = registry();

    match drivers.iter().find(|(ident, _)| *ident == name) {
        Some((_, ctor)) => match ctor() {
            Ok(driver) => return Ok(driver),
            Err(e) => warn!("Joypad driver \"{name}\" failed to start: {e:#}"),
        },
        None => warn!("Joypad driver \"{name}\" not found"),
    }

    for (ident, ctor) in &drivers {
        if *ident == name {
            continue;
        }
        match ctor() {
            Ok(driver) => {
                info!("Falling back to joypad driver \"{ident}\"");
                return Ok(driver);
            }
            Err(e) => warn!("Joypad driver \"{ident}\" failed to start: {e:#}"),
        }
    }

    bail!("no joypad driver could be initialized (requested \"{name}\")")
}

/// Forward a rumble request to the sub-driver.
pub fn joypad_set_rumble(
    joypad: &mut dyn JoypadDriver,
    port: u32,
    effect: RumbleEffect,
    strength: u16,
) -> bool {
    joypad.set_rumble(port, effect, strength)
}

const ANALOG_MAX: i32 = 0x7FFF;

fn resolved(binds: &KeybindSet, info: &JoypadInfo<'_>, id: usize) -> Keybind {
    binds[id].resolve(&info.auto_binds[id])
}

fn held(joypad: &dyn JoypadDriver, joy_idx: u32, bind: &Keybind) -> bool {
    bind.joykey != NO_BTN && joypad.button(joy_idx, bind.joykey)
}

/// Analog reading for a port.
///
/// * `index == INDEX_BUTTON`: analog value of digital bind `id`, from its axis
///   or `0x7FFF` if only its button is held.
/// * `index == INDEX_LEFT / INDEX_RIGHT`: stick axis `id` built from the plus
///   and minus half-axis binds, with digital buttons as fallback when neither
///   axis moves.
pub fn joypad_analog(
    joypad: &dyn JoypadDriver,
    info: &JoypadInfo<'_>,
    _port: u32,
    index: u32,
    id: u32,
    binds: &KeybindSet,
) -> i16 {
    let joy_idx = info.joy_idx;

    if index == analog_id::INDEX_BUTTON {
        let id = id as usize;
        if id >= FIRST_CUSTOM_BIND {
            return 0;
        }
        let bind = resolved(binds, info, id);
        let value = joypad.axis(joy_idx, bind.joyaxis).unsigned_abs() as i32;
        if value != 0 {
            return value.min(ANALOG_MAX) as i16;
        }
        return if held(joypad, joy_idx, &bind) {
            ANALOG_MAX as i16
        } else {
            0
        };
    }

    let (plus, minus) = match (index, id) {
        (analog_id::INDEX_LEFT, analog_id::X) => {
            (analog_bind::LEFT_X_PLUS, analog_bind::LEFT_X_MINUS)
        }
        (analog_id::INDEX_LEFT, analog_id::Y) => {
            (analog_bind::LEFT_Y_PLUS, analog_bind::LEFT_Y_MINUS)
        }
        (analog_id::INDEX_RIGHT, analog_id::X) => {
            (analog_bind::RIGHT_X_PLUS, analog_bind::RIGHT_X_MINUS)
        }
        (analog_id::INDEX_RIGHT, analog_id::Y) => {
            (analog_bind::RIGHT_Y_PLUS, analog_bind::RIGHT_Y_MINUS)
        }
        _ => return 0,
    };

    let bind_plus = resolved(binds, info, plus);
    let bind_minus = resolved(binds, info, minus);

    let value = joypad.axis(joy_idx, bind_plus.joyaxis).unsigned_abs() as i32
        - joypad.axis(joy_idx, bind_minus.joyaxis).unsigned_abs() as i32;
    if value != 0 {
        return value.clamp(-ANALOG_MAX, ANALOG_MAX) as i16;
    }

    let mut digital = 0;
    if held(joypad, joy_idx, &bind_plus) {
        digital += ANALOG_MAX;
    }
    if held(joypad, joy_idx, &bind_minus) {
        digital -= ANALOG_MAX;
    }
    digital as i16
}

/// Joypad driver with no pads attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullJoypad;

impl NullJoypad {
    pub const IDENT: &'static str = "null";
}

impl JoypadDriver for NullJoypad {
    fn ident(&self) -> &'static str {
        Self::IDENT
    }

    fn poll(&mut self) {}

    fn button(&self, _port: u32, _key: u16) -> bool {
        false
    }

    fn axis(&self, _port: u32, _joyaxis: u32) -> i16 {
        0
    }
}

#[derive(Debug, Default)]
struct VirtualPadState {
    pressed: HashSet<(u32, u16)>,
    axes: HashMap<(u32, u16), i16>,
    button_queries: RefCell<Vec<(u32, u16)>>,
    axis_queries: RefCell<Vec<(u32, u32)>>,
    polls: usize,
    rumble: Vec<(u32, RumbleEffect, u16)>,
    rumble_supported: bool,
    destroyed: usize,
}

/// Virtual joypad driver for testing.
///
/// Clones share state, so a test can keep one handle while the input driver
/// owns another.
#[derive(Debug, Default, Clone)]
pub struct VirtualJoypad {
    state: Rc<RefCell<VirtualPadState>>,
}

impl VirtualJoypad {
    pub const IDENT: &'static str = "virtual";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&self, port: u32, key: u16) {
        self.state.borrow_mut().pressed.insert((port, key));
    }

    pub fn release(&self, port: u32, key: u16) {
        self.state.borrow_mut().pressed.remove(&(port, key));
    }

    /// Set the raw signed value of axis `index` on pad `port`.
    pub fn set_axis(&self, port: u32, index: u16, value: i16) {
        self.state.borrow_mut().axes.insert((port, index), value);
    }

    pub fn set_rumble_supported(&self, supported: bool) {
        self.state.borrow_mut().rumble_supported = supported;
    }

    /// Every `(port, key)` passed to `button` so far.
    pub fn button_queries(&self) -> Vec<(u32, u16)> {
        self.state.borrow().button_queries.borrow().clone()
    }

    /// Every `(port, joyaxis)` passed to `axis` so far.
    pub fn axis_queries(&self) -> Vec<(u32, u32)> {
        self.state.borrow().axis_queries.borrow().clone()
    }

    pub fn poll_count(&self) -> usize {
        self.state.borrow().polls
    }

    pub fn rumble_log(&self) -> Vec<(u32, RumbleEffect, u16)> {
        self.state.borrow().rumble.clone()
    }

    pub fn destroy_count(&self) -> usize {
        self.state.borrow().destroyed
    }
}

impl JoypadDriver for VirtualJoypad {
    fn ident(&self) -> &'static str {
        Self::IDENT
    }

    fn poll(&mut self) {
        self.state.borrow_mut().polls += 1;
    }

    fn button(&self, port: u32, key: u16) -> bool {
        let state = self.state.borrow();
        state.button_queries.borrow_mut().push((port, key));
        state.pressed.contains(&(port, key))
    }

    fn axis(&self, port: u32, joyaxis: u32) -> i16 {
        let state = self.state.borrow();
        state.axis_queries.borrow_mut().push((port, joyaxis));
        let Some(dir) = AxisDir::decode(joyaxis) else {
            return 0;
        };
        let value = state.axes.get(&(port, dir.index())).copied().unwrap_or(0);
        match dir {
            AxisDir::Negative(_) if value < 0 => value,
            AxisDir::Positive(_) if value > 0 => value,
            _ => 0,
        }
    }

    fn set_rumble(&mut self, port: u32, effect: RumbleEffect, strength: u16) -> bool {
        let mut state = self.state.borrow_mut();
        if !state.rumble_supported {
            return false;
        }
        state.rumble.push((port, effect, strength));
        true
    }

    fn destroy(&mut self) {
        self.state.borrow_mut().destroyed += 1;
    }
}
