//! PS4 input driver.
//!
//! Bridges the platform joypad, mouse and debug keyboard to the frontend input
//! model in `input-core`:
//! - [`Ps4Input`]: the driver, registered as [`IDENT`]
//! - [`KeyboardLatch`]: turns keyboard snapshots into key-down / key-up events
//! - [`MouseLatch`]: per-frame mouse deltas and buttons
//! - [`sdk::OrbisSdk`]: the vendor SDK seam, with [`sdk::VirtualSdk`] for tests

pub mod config;
pub mod driver;
pub mod keyboard;
pub mod keymap;
pub mod mouse;
pub mod resolver;
pub mod sdk;

pub use config::InputConfig;
pub use driver::{IDENT, Ps4Input};
pub use keyboard::{KeyboardLatch, MAX_SCANCODE, MOD_TABLE, SLOT_CAPACITY};
pub use keymap::{PS4_KEY_MAP, PS4_KEYMAP};
pub use mouse::{MOUSE_MAX_HISTORY, MouseLatch};
pub use sdk::{KeyboardData, MouseData, OrbisSdk, SceError, VirtualSdk};
