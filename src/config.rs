use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;

use crate::theme::ThemeConfig;

pub const APP_NAME: &str = "remind-tui";

/// User settings from `config.toml`. Every key is optional.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub notice_duration_ms: u64,
    pub log_level: String,
    pub note_indent: usize,
    pub theme: ThemeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notice_duration_ms: 4000,
            log_level: "info".to_string(),
            note_indent: 4,
            theme: ThemeConfig::default(),
        }
    }
}

impl Config {
    /// Load from the user config dir. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&content)
            .wrap_err_with(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME).join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg = Config::from_toml(
            r##"
            notice_duration_ms = 1500

            [theme]
            preset = "gruvbox"
            focused_bg = "#83a598"
            "##,
        )
        .unwrap();
        assert_eq!(cfg.notice_duration(), Duration::from_millis(1500));
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.note_indent, 4);
        assert_eq!(cfg.theme.preset.as_deref(), Some("gruvbox"));
        assert_eq!(cfg.theme.focused_bg.as_deref(), Some("#83a598"));
    }

    #[test]
    fn wrong_type_is_an_error() {
        assert!(Config::from_toml("notice_duration_ms = \"soon\"").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Config::from_file(Path::new("/nonexistent/remind-tui.toml")).unwrap_err();
        assert!(format!("{err}").contains("/nonexistent/remind-tui.toml"));
    }
}
