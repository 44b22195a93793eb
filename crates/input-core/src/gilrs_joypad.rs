/// Host joypad driver backed by gilrs.
///
/// Pads are numbered in connection order. RetroPad button ids map onto the
/// gilrs standard layout; axis indices 0..4 are left X/Y and right X/Y, with Y
/// pointing down like every other joypad driver.
use anyhow::{Result, anyhow};
use gilrs::{Axis, Button, EventType, GamepadId, Gilrs};
use log::debug;

use crate::bind::AxisDir;
use crate::device::joypad_id;
use crate::joypad::JoypadDriver;

pub const IDENT: &str = "gilrs";

pub(crate) fn create() -> Result<Box<dyn JoypadDriver>> {
    Ok(Box::new(GilrsJoypad::new()?))
}

pub struct GilrsJoypad {
    gilrs: Gilrs,
    pads: Vec<GamepadId>,
}

impl GilrsJoypad {
    pub fn new() -> Result<Self> {
        let gilrs = Gilrs::new().map_err(|e| anyhow!("failed to initialize gilrs: {e}"))?;
        let pads = gilrs.gamepads().map(|(id, _)| id).collect();
        Ok(Self { gilrs, pads })
    }

    fn button_for(key: u16) -> Option<Button> {
        let button = match key as u32 {
            joypad_id::B => Button::South,
            joypad_id::Y => Button::West,
            joypad_id::SELECT => Button::Select,
            joypad_id::START => Button::Start,
            joypad_id::UP => Button::DPadUp,
            joypad_id::DOWN => Button::DPadDown,
            joypad_id::LEFT => Button::DPadLeft,
            joypad_id::RIGHT => Button::DPadRight,
            joypad_id::A => Button::East,
            joypad_id::X => Button::North,
            joypad_id::L => Button::LeftTrigger,
            joypad_id::R => Button::RightTrigger,
            joypad_id::L2 => Button::LeftTrigger2,
            joypad_id::R2 => Button::RightTrigger2,
            joypad_id::L3 => Button::LeftThumb,
            joypad_id::R3 => Button::RightThumb,
            _ => return None,
        };
        Some(button)
    }

    fn axis_for(index: u16) -> Option<(Axis, f32)> {
        match index {
            0 => Some((Axis::LeftStickX, 1.0)),
            1 => Some((Axis::LeftStickY, -1.0)),
            2 => Some((Axis::RightStickX, 1.0)),
            3 => Some((Axis::RightStickY, -1.0)),
            _ => None,
        }
    }
}

impl JoypadDriver for GilrsJoypad {
    fn ident(&self) -> &'static str {
        IDENT
    }

    fn poll(&mut self) {
        while let Some(event) = self.gilrs.next_event() {
            match event.event {
                EventType::Connected => {
                    if !self.pads.contains(&event.id) {
                        self.pads.push(event.id);
                        debug!("Gamepad connected: {:?}", event.id);
                    }
                }
                EventType::Disconnected => {
                    self.pads.retain(|id| *id != event.id);
                    debug!("Gamepad disconnected: {:?}", event.id);
                }
                _ => {}
            }
        }
    }

    fn button(&self, port: u32, key: u16) -> bool {
        let Some(button) = Self::button_for(key) else {
            return false;
        };
        self.pads
            .get(port as usize)
            .and_then(|id| self.gilrs.connected_gamepad(*id))
            .is_some_and(|pad| pad.is_pressed(button))
    }

    fn axis(&self, port: u32, joyaxis: u32) -> i16 {
        let Some(dir) = AxisDir::decode(joyaxis) else {
            return 0;
        };
        let Some((axis, sign)) = Self::axis_for(dir.index()) else {
            return 0;
        };
        let Some(pad) = self
            .pads
            .get(port as usize)
            .and_then(|id| self.gilrs.connected_gamepad(*id))
        else {
            return 0;
        };
        let value = (pad.value(axis) * sign * 32767.0).clamp(-32768.0, 32767.0) as i16;
        match dir {
            AxisDir::Negative(_) if value < 0 => value,
            AxisDir::Positive(_) if value > 0 => value,
            _ => 0,
        }
    }
}
