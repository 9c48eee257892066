//! User settings loaded from `settings.conf`.
//!
//! The file is plain `key = value` lines. Unknown keys are ignored and values
//! that do not parse leave the default in place, so a stale or hand-edited
//! file never stops the tool from running.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::state::SortMode;
use crate::util::config::{parse_bool, parse_key_value, skip_comment_or_empty};

pub mod paths;

pub use paths::{config_dir, logs_dir, resolve_settings_path};

/// Effective user preferences; CLI flags override these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Product data file replacing the bundled catalogue.
    pub data_path: Option<PathBuf>,
    /// Default sort when neither `--sort` nor a UI state sets one.
    pub sort_mode: SortMode,
    /// Log level when no flag or `RUST_LOG` chooses one.
    pub log_level: Option<String>,
    /// Print JSON instead of the text table by default.
    pub json_output: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: None,
            sort_mode: SortMode::Newest,
            log_level: None,
            json_output: false,
        }
    }
}

impl Settings {
    /// What: Parse settings from file content.
    ///
    /// Inputs:
    /// - `content`: Text of a `settings.conf`.
    ///
    /// Output:
    /// - Defaults overlaid with every recognised, well-formed key.
    ///
    /// Details:
    /// - Keys are case-insensitive; `-`, `.` and spaces in keys read as `_`.
    /// - `default_sort` is accepted for `sort_mode`.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut settings = Self::default();
        for line in content.lines() {
            if skip_comment_or_empty(line) {
                continue;
            }
            let Some((key, val)) = parse_key_value(line) else {
                continue;
            };
            settings.apply(&key, &val);
        }
        settings
    }

    fn apply(&mut self, key: &str, val: &str) {
        match key {
            "data_path" | "products_path" => {
                self.data_path = (!val.is_empty()).then(|| PathBuf::from(val));
            }
            "sort_mode" | "default_sort" => match SortMode::from_config_key(val) {
                Some(mode) => self.sort_mode = mode,
                None => warn!(value = %val, "[Config] Unknown sort_mode; keeping default"),
            },
            "log_level" => {
                self.log_level = (!val.is_empty()).then(|| val.to_ascii_lowercase());
            }
            "json_output" | "json" => self.json_output = parse_bool(val),
            _ => debug!(key = %key, "[Config] Ignoring unknown setting"),
        }
    }

    /// What: Read settings from one file.
    ///
    /// Inputs:
    /// - `path`: File to read.
    ///
    /// Output:
    /// - Parsed settings, or defaults when the file cannot be read.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => {
                debug!(path = %path.display(), "[Config] Loaded settings");
                Self::parse(&content)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "[Config] Cannot read settings; using defaults");
                Self::default()
            }
        }
    }

    /// Settings from the first `settings.conf` found, or defaults.
    #[must_use]
    pub fn load() -> Self {
        resolve_settings_path().map_or_else(
            || {
                debug!("[Config] No settings.conf found; using defaults");
                Self::default()
            },
            |p| Self::load_from(&p),
        )
    }
}
