/// Mouse snapshot latch.
///
/// Each poll zeroes the deltas and reads a single sample into a buffer that
/// persists across polls. Buttons and deltas are only taken from a sample
/// that is connected and not intercepted by the system software.
use input_core::mouse_id;
use log::{debug, trace};

use crate::sdk::{Handle, MouseData, OrbisSdk, mouse_button};

/// Samples requested per read.
pub const MOUSE_MAX_HISTORY: usize = 1;

#[derive(Debug, Default)]
pub struct MouseLatch {
    connected: bool,
    x: i32,
    y: i32,
    left: bool,
    right: bool,
    middle: bool,
    /// Read buffer. A read that returns nothing leaves the previous sample in
    /// place, and `connected` is still taken from it.
    sample: [MouseData; MOUSE_MAX_HISTORY],
}

impl MouseLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the mouse once and latch the result.
    pub fn refresh<S: OrbisSdk + ?Sized>(&mut self, sdk: &mut S, handle: Handle) {
        self.x = 0;
        self.y = 0;

        let read = sdk.mouse_read(handle, &mut self.sample);
        if let Err(e) = &read {
            trace!("Mouse read failed: {e}");
        }

        let data = self.sample[MOUSE_MAX_HISTORY - 1];
        if data.connected != self.connected {
            debug!(
                "Mouse {}",
                if data.connected {
                    "connected"
                } else {
                    "disconnected"
                }
            );
        }
        self.connected = data.connected;

        let fresh = matches!(read, Ok(n) if n > 0);
        if fresh && data.connected && data.buttons & mouse_button::INTERCEPTED == 0 {
            self.left = data.buttons & mouse_button::PRIMARY != 0;
            self.right = data.buttons & mouse_button::SECONDARY != 0;
            self.middle = data.buttons & mouse_button::OPTIONAL != 0;
            self.x = data.x_axis;
            self.y = data.y_axis;
        }
    }

    pub fn connected(&self) -> bool {
        self.connected
    }

    /// Mouse query. Deltas saturate at the i16 range.
    pub fn state(&self, id: u32) -> i16 {
        if !self.connected {
            return 0;
        }
        match id {
            mouse_id::LEFT => self.left as i16,
            mouse_id::RIGHT => self.right as i16,
            mouse_id::MIDDLE => self.middle as i16,
            mouse_id::X => saturate(self.x),
            mouse_id::Y => saturate(self.y),
            _ => 0,
        }
    }
}

fn saturate(v: i32) -> i16 {
    v.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}
