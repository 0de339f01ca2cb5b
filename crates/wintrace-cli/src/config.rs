use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;
use wintrace_types::provider::{ProviderSelector, default_selectors};
use wintrace_types::WdatConfig;

use crate::output;

/// Bump this whenever new defaults should override a user's on-disk
/// settings.
pub const SETTINGS_VERSION: u32 = 2;

/// On-disk settings for wintrace.
///
/// Persistence lives here, in the CLI; the conversion core only ever sees
/// the resolved [`WdatConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Settings-file schema version, gated on load.
    #[serde(default = "default_version")]
    pub settings_version: u32,

    /// Provider-enablement selections for the capture session.
    #[serde(default = "default_selectors")]
    pub providers: Vec<ProviderSelector>,

    /// Emit inspection records for unmatched events.
    #[serde(default)]
    pub dump_all: bool,

    /// Explore-mode test provider, when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explore: Option<Uuid>,
}

fn default_version() -> u32 {
    SETTINGS_VERSION
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            settings_version: SETTINGS_VERSION,
            providers: default_selectors(),
            dump_all: false,
            explore: None,
        }
    }
}

impl Settings {
    /// Load settings, falling back to defaults when the file is missing,
    /// unreadable, or carries a different schema version.
    pub fn load_from(path: &Path) -> Settings {
        if !path.exists() {
            return Settings::default();
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                output::warn(&format!(
                    "could not read settings {}: {}; using defaults",
                    path.display(),
                    err
                ));
                return Settings::default();
            }
        };

        let settings: Settings = match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(err) => {
                output::warn(&format!(
                    "could not parse settings {}: {}; using defaults",
                    path.display(),
                    err
                ));
                return Settings::default();
            }
        };

        // Only honor an on-disk file with a matching version.
        if settings.settings_version != SETTINGS_VERSION {
            output::warn(&format!(
                "settings {} has version {} (expected {}); using defaults",
                path.display(),
                settings.settings_version,
                SETTINGS_VERSION
            ));
            return Settings::default();
        }

        settings
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// The default settings location (~/.wintrace/wintrace.toml).
    pub fn default_path() -> Option<PathBuf> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok()?;
        Some(PathBuf::from(home).join(".wintrace").join("wintrace.toml"))
    }

    /// Resolve into the plain configuration the conversion core consumes.
    pub fn into_config(self) -> WdatConfig {
        WdatConfig {
            dump_all: self.dump_all,
            explore: self.explore,
            providers: self.providers,
        }
    }
}
