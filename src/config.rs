use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub picker: PickerConfig,
    pub ui: UiConfig,
    pub keymap: KeymapConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PickerConfig {
    pub min_chars: usize,
    /// Cap for static pickers. `0` leaves them uncapped.
    pub max_results: usize,
    pub airport_max_results: usize,
    pub lookup_cache_entries: usize,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            min_chars: 2,
            max_results: 0,
            airport_max_results: 10,
            lookup_cache_entries: 64,
        }
    }
}

impl PickerConfig {
    pub fn static_cap(&self) -> Option<usize> {
        (self.max_results > 0).then_some(self.max_results)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    pub lookup_poll_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { lookup_poll_ms: 16 }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeymapConfig {
    pub preset: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            preset: "default".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    pub filter: String,
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };
        Self::load_from_path(path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        if !path.is_file() {
            return Err(AppError::invalid_argument(format!(
                "config path is not a regular file: {}",
                path.display()
            )));
        }

        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read config: {}", path.display()))
        })?;
        let parsed = toml::from_str::<Self>(&raw).map_err(|source| {
            AppError::invalid_argument(format!(
                "failed to parse config {}: {source}",
                path.display()
            ))
        })?;
        Ok(parsed.sanitized())
    }

    fn sanitized(mut self) -> Self {
        self.picker.min_chars = self.picker.min_chars.max(1);
        self.picker.airport_max_results = self.picker.airport_max_results.max(1);
        self.picker.lookup_cache_entries = self.picker.lookup_cache_entries.max(1);
        self.ui.lookup_poll_ms = self.ui.lookup_poll_ms.max(1);
        if self.log.filter.trim().is_empty() {
            self.log.filter = LogConfig::default().filter;
        }
        self
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("DESK_CONFIG_PATH")
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("desk").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("desk")
                .join("config.toml"),
        );
    }
    if let Some(appdata) = std::env::var_os("APPDATA")
        && !appdata.is_empty()
    {
        return Some(PathBuf::from(appdata).join("desk").join("config.toml"));
    }
    None
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::process;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::Config;

    fn unique_temp_path(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("desk_config_{suffix}_{}_{}", process::id(), nanos));
        path
    }

    #[test]
    fn load_from_path_returns_defaults_for_missing_file() {
        let missing = unique_temp_path("missing.toml");
        let config = Config::load_from_path(&missing).expect("missing config should fallback");
        assert_eq!(config, Config::default());
        assert_eq!(config.picker.min_chars, 2);
        assert_eq!(config.picker.airport_max_results, 10);
        assert_eq!(config.picker.static_cap(), None);
    }

    #[test]
    fn load_from_path_applies_partial_overrides_and_sanitizes() {
        let path = unique_temp_path("custom.toml");
        fs::write(
            &path,
            r#"
            [picker]
            min_chars = 0
            max_results = 5
            airport_max_results = 0
            lookup_cache_entries = 0

            [ui]
            lookup_poll_ms = 0

            [keymap]
            preset = "emacs"

            [log]
            filter = "  "
            file = "/tmp/desk.log"
            "#,
        )
        .expect("config file should be written");

        let config = Config::load_from_path(&path).expect("config should parse");
        assert_eq!(config.picker.min_chars, 1);
        assert_eq!(config.picker.static_cap(), Some(5));
        assert_eq!(config.picker.airport_max_results, 1);
        assert_eq!(config.picker.lookup_cache_entries, 1);
        assert_eq!(config.ui.lookup_poll_ms, 1);
        assert_eq!(config.keymap.preset, "emacs");
        assert_eq!(config.log.filter, "info");
        assert_eq!(config.log.file, Some(PathBuf::from("/tmp/desk.log")));

        fs::remove_file(&path).expect("config file should be removed");
    }

    #[test]
    fn load_from_path_rejects_malformed_toml() {
        let path = unique_temp_path("broken.toml");
        fs::write(&path, "[picker\nmin_chars = ").expect("config file should be written");

        let err = Config::load_from_path(&path).expect_err("malformed config should fail");
        assert!(err.to_string().contains("failed to parse config"));

        fs::remove_file(&path).expect("config file should be removed");
    }
}
