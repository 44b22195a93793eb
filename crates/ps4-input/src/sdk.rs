/// Vendor SDK seam.
///
/// Everything the driver needs from the user service, mouse and debug keyboard
/// libraries goes through `OrbisSdk`, so the driver core runs against
/// `VirtualSdk` in tests.
use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

pub type UserId = i32;
pub type Handle = i32;

/// Held-key slots in a debug keyboard snapshot.
pub const KEY_CODE_SLOTS: usize = 6;

/// Mouse button flags.
pub mod mouse_button {
    pub const PRIMARY: u32 = 0x0000_0001;
    pub const SECONDARY: u32 = 0x0000_0002;
    pub const OPTIONAL: u32 = 0x0000_0004;
    /// Input is currently taken by the system software.
    pub const INTERCEPTED: u32 = 0x8000_0000;
}

/// Mouse open behavior: merge every connected mouse into one handle.
pub const MOUSE_OPEN_PARAM_MERGED: u8 = 0x01;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SceError {
    #[error("{call} failed with status {code:#010x}")]
    Status { call: &'static str, code: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortType {
    Standard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseOpenParam {
    pub behavior_flag: u8,
}

/// One mouse sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseData {
    pub timestamp: u64,
    pub connected: bool,
    pub buttons: u32,
    pub x_axis: i32,
    pub y_axis: i32,
    pub wheel: i32,
    pub tilt: i32,
}

/// Debug keyboard state: modifier mask, LED state and the held-key slot array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardData {
    pub timestamp: u64,
    pub connected: bool,
    pub modifier_key: u32,
    /// NUM (0x01), CAPS (0x02) and SCROLL (0x04) lock state.
    pub led_state: u32,
    pub key_codes: [u8; KEY_CODE_SLOTS],
}

pub trait OrbisSdk {
    /// User that scopes device opens.
    fn initial_user(&mut self) -> Result<UserId, SceError>;

    fn mouse_init(&mut self) -> Result<(), SceError>;

    fn mouse_open(
        &mut self,
        user: UserId,
        port: PortType,
        index: i32,
        param: &MouseOpenParam,
    ) -> Result<Handle, SceError>;

    /// Fill `data` with up to `data.len()` samples, newest last. Returns how many
    /// were written; entries past that are left untouched.
    fn mouse_read(&mut self, handle: Handle, data: &mut [MouseData]) -> Result<usize, SceError>;

    fn mouse_close(&mut self, handle: Handle) -> Result<(), SceError>;

    fn keyboard_init(&mut self) -> Result<(), SceError>;

    fn keyboard_open(&mut self, user: UserId, port: PortType, index: i32)
    -> Result<Handle, SceError>;

    fn keyboard_read_state(&mut self, handle: Handle) -> Result<KeyboardData, SceError>;

    fn keyboard_close(&mut self, handle: Handle) -> Result<(), SceError>;
}

#[derive(Debug, Default)]
struct VirtualSdkState {
    user: Option<UserId>,
    next_handle: Handle,
    mouse_open_fails: bool,
    keyboard_open_fails: bool,
    mouse_opens: Vec<(UserId, PortType, i32, MouseOpenParam)>,
    keyboard_opens: Vec<(UserId, PortType, i32)>,
    mouse_closed: Vec<Handle>,
    keyboard_closed: Vec<Handle>,
    mouse: Option<MouseData>,
    mouse_read_fails: bool,
    keyboard: KeyboardData,
    keyboard_read_fails: bool,
}

/// Virtual SDK for testing.
///
/// Clones share state: keep one handle in the test and hand another to the
/// driver. Mouse and keyboard hold a "current" sample that every read returns;
/// read failures are one-shot.
#[derive(Debug, Clone)]
pub struct VirtualSdk {
    state: Rc<RefCell<VirtualSdkState>>,
}

impl Default for VirtualSdk {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualSdk {
    pub fn new() -> Self {
        let state = VirtualSdkState {
            user: Some(0x1000),
            next_handle: 1,
            ..VirtualSdkState::default()
        };
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Make `initial_user` fail.
    pub fn without_user(self) -> Self {
        self.state.borrow_mut().user = None;
        self
    }

    pub fn fail_mouse_open(&self) {
        self.state.borrow_mut().mouse_open_fails = true;
    }

    pub fn fail_keyboard_open(&self) {
        self.state.borrow_mut().keyboard_open_fails = true;
    }

    /// Sample returned by subsequent mouse reads. `None` means no new sample.
    pub fn set_mouse(&self, data: Option<MouseData>) {
        self.state.borrow_mut().mouse = data;
    }

    pub fn fail_next_mouse_read(&self) {
        self.state.borrow_mut().mouse_read_fails = true;
    }

    pub fn set_keyboard(&self, data: KeyboardData) {
        self.state.borrow_mut().keyboard = data;
    }

    pub fn fail_next_keyboard_read(&self) {
        self.state.borrow_mut().keyboard_read_fails = true;
    }

    pub fn mouse_opens(&self) -> Vec<(UserId, PortType, i32, MouseOpenParam)> {
        self.state.borrow().mouse_opens.clone()
    }

    pub fn keyboard_opens(&self) -> Vec<(UserId, PortType, i32)> {
        self.state.borrow().keyboard_opens.clone()
    }

    pub fn mouse_closed(&self) -> Vec<Handle> {
        self.state.borrow().mouse_closed.clone()
    }

    pub fn keyboard_closed(&self) -> Vec<Handle> {
        self.state.borrow().keyboard_closed.clone()
    }

    fn status(call: &'static str) -> SceError {
        SceError::Status {
            call,
            code: 0x8080_0001_u32 as i32,
        }
    }
}

impl OrbisSdk for VirtualSdk {
    fn initial_user(&mut self) -> Result<UserId, SceError> {
        self.state
            .borrow()
            .user
            .ok_or(Self::status("sceUserServiceGetInitialUser"))
    }

    fn mouse_init(&mut self) -> Result<(), SceError> {
        Ok(())
    }

    fn mouse_open(
        &mut self,
        user: UserId,
        port: PortType,
        index: i32,
        param: &MouseOpenParam,
    ) -> Result<Handle, SceError> {
        let mut state = self.state.borrow_mut();
        if state.mouse_open_fails {
            return Err(Self::status("sceMouseOpen"));
        }
        state.mouse_opens.push((user, port, index, *param));
        let handle = state.next_handle;
        state.next_handle += 1;
        Ok(handle)
    }

    fn mouse_read(&mut self, _handle: Handle, data: &mut [MouseData]) -> Result<usize, SceError> {
        let mut state = self.state.borrow_mut();
        if state.mouse_read_fails {
            state.mouse_read_fails = false;
            return Err(Self::status("sceMouseRead"));
        }
        match (state.mouse, data.first_mut()) {
            (Some(sample), Some(slot)) => {
                *slot = sample;
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    fn mouse_close(&mut self, handle: Handle) -> Result<(), SceError> {
        self.state.borrow_mut().mouse_closed.push(handle);
        Ok(())
    }

    fn keyboard_init(&mut self) -> Result<(), SceError> {
        Ok(())
    }

    fn keyboard_open(
        &mut self,
        user: UserId,
        port: PortType,
        index: i32,
    ) -> Result<Handle, SceError> {
        let mut state = self.state.borrow_mut();
        if state.keyboard_open_fails {
            return Err(Self::status("sceDbgKeyboardOpen"));
        }
        state.keyboard_opens.push((user, port, index));
        let handle = state.next_handle;
        state.next_handle += 1;
        Ok(handle)
    }

    fn keyboard_read_state(&mut self, _handle: Handle) -> Result<KeyboardData, SceError> {
        let mut state = self.state.borrow_mut();
        if state.keyboard_read_fails {
            state.keyboard_read_fails = false;
            return Err(Self::status("sceDbgKeyboardReadState"));
        }
        Ok(state.keyboard)
    }

    fn keyboard_close(&mut self, handle: Handle) -> Result<(), SceError> {
        self.state.borrow_mut().keyboard_closed.push(handle);
        Ok(())
    }
}
