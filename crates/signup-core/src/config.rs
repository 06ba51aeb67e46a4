//! Configuration management for signup.
//!
//! Loads configuration from ${SIGNUP_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::role::{Role, RoleCopy};

/// Returns the default config template with comments.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for signup configuration and log directories.
    //!
    //! SIGNUP_HOME resolution order:
    //! 1. SIGNUP_HOME environment variable (if set)
    //! 2. ~/.config/signup (default)
    //! 3. ./.signup when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the signup home directory.
    pub fn signup_home() -> PathBuf {
        if let Ok(home) = std::env::var("SIGNUP_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".signup"),
            |h| h.join(".config").join("signup"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        signup_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn log_dir() -> PathBuf {
        signup_home().join("logs")
    }
}

/// Delays used to sequence overlay transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Delay before focusing the first field after opening.
    pub focus_delay_ms: u64,
    /// Delay between closing and hiding the overlay.
    pub hide_delay_ms: u64,
    /// Duration of the rejection shake.
    pub shake_ms: u64,
}

impl Timings {
    const DEFAULT_FOCUS_DELAY_MS: u64 = 220;
    const DEFAULT_HIDE_DELAY_MS: u64 = 320;
    const DEFAULT_SHAKE_MS: u64 = 380;

    pub fn focus_delay(&self) -> Duration {
        Duration::from_millis(self.focus_delay_ms)
    }

    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }

    pub fn shake(&self) -> Duration {
        Duration::from_millis(self.shake_ms)
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            focus_delay_ms: Self::DEFAULT_FOCUS_DELAY_MS,
            hide_delay_ms: Self::DEFAULT_HIDE_DELAY_MS,
            shake_ms: Self::DEFAULT_SHAKE_MS,
        }
    }
}

/// Optional replacements for the built-in role copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_text: Option<String>,
}

impl CopyOverrides {
    fn apply(&self, mut copy: RoleCopy) -> RoleCopy {
        if let Some(title) = &self.title {
            copy.title.clone_from(title);
        }
        if let Some(subtitle) = &self.subtitle {
            copy.subtitle.clone_from(subtitle);
        }
        if let Some(label) = &self.label {
            copy.label.clone_from(label);
        }
        if let Some(image) = &self.image {
            copy.image.clone_from(image);
        }
        if let Some(switch_text) = &self.switch_text {
            copy.switch_text.clone_from(switch_text);
        }
        copy
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Transition delays.
    pub timings: Timings,
    /// Student copy overrides.
    pub student: CopyOverrides,
    /// Teacher copy overrides.
    pub teacher: CopyOverrides,
}

impl Config {
    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the commented default config to `path`.
    ///
    /// # Errors
    /// Fails if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Effective copy for a role (built-in text with overrides applied).
    pub fn copy_for(&self, role: Role) -> RoleCopy {
        let overrides = match role {
            Role::Student => &self.student,
            Role::Teacher => &self.teacher,
        };
        overrides.apply(RoleCopy::default_for(role))
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}
