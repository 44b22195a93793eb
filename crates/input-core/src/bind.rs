//! Keybinds and joypad axis encoding.
//!
//! Every port owns a `KeybindSet` of user binds; every physical joypad carries
//! a set of auto binds. A field left unset in the user bind falls back to the
//! auto bind's field, and each field falls back on its own.

/// Joykey value meaning "no button bound".
pub const NO_BTN: u16 = 0xFFFF;
/// Joyaxis value meaning "no axis bound".
pub const AXIS_NONE: u32 = 0xFFFF_FFFF;

/// Number of digital RetroPad binds. Bits of a joypad MASK query.
pub const FIRST_CUSTOM_BIND: usize = 16;

/// Analog half-axis bind ids, following the digital binds.
pub mod analog_bind {
    pub const LEFT_X_PLUS: usize = 16;
    pub const LEFT_X_MINUS: usize = 17;
    pub const LEFT_Y_PLUS: usize = 18;
    pub const LEFT_Y_MINUS: usize = 19;
    pub const RIGHT_X_PLUS: usize = 20;
    pub const RIGHT_X_MINUS: usize = 21;
    pub const RIGHT_Y_PLUS: usize = 22;
    pub const RIGHT_Y_MINUS: usize = 23;
}

/// Length of a per-port bind table.
pub const BIND_LIST_LEN: usize = 24;

/// Value a fully deflected axis maps to in the normalized range.
pub const AXIS_SCALE: f32 = 32768.0;

/// Encode "axis `index`, negative direction".
pub const fn axis_neg(index: u16) -> u32 {
    ((index as u32) << 16) | 0xFFFF
}

/// Encode "axis `index`, positive direction".
pub const fn axis_pos(index: u16) -> u32 {
    (index as u32) | 0xFFFF_0000
}

/// A decoded axis encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisDir {
    Negative(u16),
    Positive(u16),
}

impl AxisDir {
    /// Decode a joyaxis value. `AXIS_NONE` and malformed encodings give `None`.
    pub fn decode(joyaxis: u32) -> Option<Self> {
        if joyaxis == AXIS_NONE {
            return None;
        }
        let hi = (joyaxis >> 16) as u16;
        let lo = (joyaxis & 0xFFFF) as u16;
        match (hi, lo) {
            (hi, 0xFFFF) if hi != 0xFFFF => Some(Self::Negative(hi)),
            (0xFFFF, lo) if lo != 0xFFFF => Some(Self::Positive(lo)),
            _ => None,
        }
    }

    pub fn encode(self) -> u32 {
        match self {
            Self::Negative(i) => axis_neg(i),
            Self::Positive(i) => axis_pos(i),
        }
    }

    pub fn index(self) -> u16 {
        match self {
            Self::Negative(i) | Self::Positive(i) => i,
        }
    }
}

/// A single bind: a joypad button and/or a joypad half-axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keybind {
    pub joykey: u16,
    pub joyaxis: u32,
}

impl Default for Keybind {
    fn default() -> Self {
        Self::UNBOUND
    }
}

impl Keybind {
    pub const UNBOUND: Self = Self {
        joykey: NO_BTN,
        joyaxis: AXIS_NONE,
    };

    pub const fn key(joykey: u16) -> Self {
        Self {
            joykey,
            joyaxis: AXIS_NONE,
        }
    }

    pub const fn axis(joyaxis: u32) -> Self {
        Self {
            joykey: NO_BTN,
            joyaxis,
        }
    }

    /// Apply the per-field fallback to `auto`.
    pub fn resolve(&self, auto: &Keybind) -> Keybind {
        Keybind {
            joykey: if self.joykey != NO_BTN {
                self.joykey
            } else {
                auto.joykey
            },
            joyaxis: if self.joyaxis != AXIS_NONE {
                self.joyaxis
            } else {
                auto.joyaxis
            },
        }
    }
}

/// One port's bind table.
pub type KeybindSet = [Keybind; BIND_LIST_LEN];

/// An all-unbound bind table.
pub const UNBOUND_SET: KeybindSet = [Keybind::UNBOUND; BIND_LIST_LEN];

/// Per-query view of the physical joypad behind a port.
#[derive(Debug, Clone, Copy)]
pub struct JoypadInfo<'a> {
    /// Sub-driver port index of the physical pad.
    pub joy_idx: u32,
    /// Auto binds for that pad.
    pub auto_binds: &'a KeybindSet,
    /// Normalized deflection an axis must exceed to count as pressed.
    pub axis_threshold: f32,
}

/// Whether an axis reading is past `threshold`. Equality does not trigger.
pub fn axis_exceeds(value: i16, threshold: f32) -> bool {
    (value.unsigned_abs() as f32 / AXIS_SCALE) > threshold
}
