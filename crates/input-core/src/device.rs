/// Device classes a frontend can query.
///
/// The raw values match the libretro device ids. The two `*Screen` variants are
/// frontend-private and carry `0x10000` on top of their base device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    None,
    Joypad,
    Mouse,
    Keyboard,
    Lightgun,
    Analog,
    Pointer,
    MouseScreen,
    PointerScreen,
}

impl Device {
    const SCREEN_FLAG: u32 = 0x10000;

    /// Decode a raw device id. Unknown ids yield `None`.
    pub fn from_raw(raw: u32) -> Option<Self> {
        let device = match raw {
            0 => Self::None,
            1 => Self::Joypad,
            2 => Self::Mouse,
            3 => Self::Keyboard,
            4 => Self::Lightgun,
            5 => Self::Analog,
            6 => Self::Pointer,
            r if r == 2 | Self::SCREEN_FLAG => Self::MouseScreen,
            r if r == 6 | Self::SCREEN_FLAG => Self::PointerScreen,
            _ => return None,
        };
        Some(device)
    }

    pub fn raw(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Joypad => 1,
            Self::Mouse => 2,
            Self::Keyboard => 3,
            Self::Lightgun => 4,
            Self::Analog => 5,
            Self::Pointer => 6,
            Self::MouseScreen => 2 | Self::SCREEN_FLAG,
            Self::PointerScreen => 6 | Self::SCREEN_FLAG,
        }
    }

    /// The underlying libretro device, with the screen flag stripped.
    pub fn base(self) -> Self {
        match self {
            Self::MouseScreen => Self::Mouse,
            Self::PointerScreen => Self::Pointer,
            other => other,
        }
    }

    /// Bit advertised in a driver's capability mask for this device.
    pub fn capability_bit(self) -> u64 {
        1u64 << self.base().raw()
    }
}

/// RetroPad button ids.
pub mod joypad_id {
    pub const B: u32 = 0;
    pub const Y: u32 = 1;
    pub const SELECT: u32 = 2;
    pub const START: u32 = 3;
    pub const UP: u32 = 4;
    pub const DOWN: u32 = 5;
    pub const LEFT: u32 = 6;
    pub const RIGHT: u32 = 7;
    pub const A: u32 = 8;
    pub const X: u32 = 9;
    pub const L: u32 = 10;
    pub const R: u32 = 11;
    pub const L2: u32 = 12;
    pub const R2: u32 = 13;
    pub const L3: u32 = 14;
    pub const R3: u32 = 15;
    /// Query every digital bind at once; the answer is a bitfield.
    pub const MASK: u32 = 256;
}

/// Mouse ids.
pub mod mouse_id {
    pub const X: u32 = 0;
    pub const Y: u32 = 1;
    pub const LEFT: u32 = 2;
    pub const RIGHT: u32 = 3;
    pub const WHEELUP: u32 = 4;
    pub const WHEELDOWN: u32 = 5;
    pub const MIDDLE: u32 = 6;
}

/// Analog stick indices and axis ids.
pub mod analog_id {
    pub const INDEX_LEFT: u32 = 0;
    pub const INDEX_RIGHT: u32 = 1;
    pub const INDEX_BUTTON: u32 = 2;

    pub const X: u32 = 0;
    pub const Y: u32 = 1;
}
