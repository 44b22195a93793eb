use std::path::Path;

use anyhow::Result;
use input_core::joypad::{NullJoypad, joypad_driver_names};
use serde::{Deserialize, Serialize};

/// Driver settings, stored as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct InputConfig {
    /// Joypad sub-driver requested at initialize.
    pub joypad_driver: String,
    /// Open the mouse. Ignored when built without the `mouse` feature.
    pub mouse: bool,
    /// Open the debug keyboard. Ignored when built without the `keyboard` feature.
    pub keyboard: bool,
    /// Merge every connected mouse into one handle.
    pub merged_mouse: bool,
    /// Release held keys when the keyboard disconnects.
    pub flush_keys_on_disconnect: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            joypad_driver: default_joypad_driver(),
            mouse: true,
            keyboard: true,
            merged_mouse: true,
            flush_keys_on_disconnect: false,
        }
    }
}

fn default_joypad_driver() -> String {
    joypad_driver_names()
        .first()
        .copied()
        .unwrap_or(NullJoypad::IDENT)
        .to_string()
}

impl InputConfig {
    pub fn validate(&mut self) {
        let name = self.joypad_driver.trim();
        self.joypad_driver = if name.is_empty() {
            default_joypad_driver()
        } else {
            name.to_string()
        };
    }

    /// Read config from a JSON file.
    pub fn read(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let mut config: InputConfig = serde_json::from_str(&data)?;
        config.validate();
        Ok(config)
    }

    /// Write config to a JSON file.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
