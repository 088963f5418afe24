use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::drill::practice;
use crate::drill::session::{SessionState, Timing};
use crate::error::DrillError;

/// Application configuration loaded from `~/.config/keydrill/config.toml`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Feedback pacing
    pub timing: TimingConfig,
    /// Display settings
    pub display: DisplayConfig,
    /// Practice defaults
    pub practice: PracticeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay after a correct key before the next target (ms)
    pub success_delay_ms: u64,
    /// Delay after a wrong key before the next target (ms)
    pub error_delay_ms: u64,
    /// How long a pressed key stays lit on the keyboard (ms)
    pub press_flash_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Monochrome mode (no colors)
    pub monochrome: bool,
    /// Draw the on-screen keyboard
    pub show_keyboard: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PracticeConfig {
    /// Initial mode: 1-based index or exact mode name
    pub default_mode: Option<String>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            success_delay_ms: 500,
            error_delay_ms: 1000,
            press_flash_ms: 100,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            monochrome: false,
            show_keyboard: true,
        }
    }
}

impl AppConfig {
    /// Build the startup session: configured delays and initial mode.
    ///
    /// Unknown modes and zero delays are errors, even though a config file
    /// that fails to parse is only warned about.
    pub fn build_session(&self) -> Result<SessionState, DrillError> {
        let timing = self.timing.session_timing()?;
        let mut session = SessionState::with_timing(timing);
        if let Some(ref selector) = self.practice.default_mode {
            session.select_mode(practice::resolve_mode(selector)?);
        }
        info!(
            "starting in mode {} ({:?} / {:?})",
            session.mode().name,
            timing.success_delay,
            timing.error_delay
        );
        Ok(session)
    }
}

impl TimingConfig {
    /// Feedback delays for the session. Both must be non-zero.
    pub fn session_timing(&self) -> Result<Timing, DrillError> {
        if self.success_delay_ms == 0 {
            return Err(DrillError::ZeroDelay {
                name: "success_delay_ms",
            });
        }
        if self.error_delay_ms == 0 {
            return Err(DrillError::ZeroDelay {
                name: "error_delay_ms",
            });
        }
        Ok(Timing {
            success_delay: Duration::from_millis(self.success_delay_ms),
            error_delay: Duration::from_millis(self.error_delay_ms),
        })
    }

    pub fn press_flash(&self) -> Duration {
        Duration::from_millis(self.press_flash_ms)
    }
}

/// Get the configuration directory path.
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "keydrill").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the config file path.
pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from disk, or return defaults.
pub fn load_config() -> AppConfig {
    match config_file_path() {
        Some(path) => load_config_or_default(&path),
        None => AppConfig::default(),
    }
}

/// Load `path`, falling back to defaults when it is missing or unreadable.
pub fn load_config_or_default(path: &Path) -> AppConfig {
    if !path.exists() {
        return AppConfig::default();
    }
    load_config_from(path).unwrap_or_else(|e| {
        warn!("ignoring config: {e:#}");
        AppConfig::default()
    })
}

/// Load configuration from a specific file.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Save the current configuration to disk.
pub fn save_config(config: &AppConfig) -> Result<()> {
    if let Some(path) = config_file_path() {
        save_config_to(config, &path)?;
    }
    Ok(())
}

/// Save configuration to a specific file, creating parent directories.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
