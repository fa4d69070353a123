//! Saved controller state
//!
//! The engine keeps almost nothing durable: offsets reset to closed on
//! every construction. Only the "was ever opened" flag survives, so hosts
//! can e.g. stop showing an onboarding hint once the user found the panels.

use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SavedState {
    /// Schema version for forward compatibility
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub was_ever_opened: bool,
}

impl SavedState {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new(was_ever_opened: bool) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            was_ever_opened,
        }
    }

    /// Load from `path`; missing or unreadable files yield the default
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Ignoring corrupt state file {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
    }
}
