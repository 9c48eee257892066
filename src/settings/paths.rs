use std::env;
use std::path::{Path, PathBuf};

/// Directory name used under the user's config base.
const APP_DIR: &str = "fa-catalogue";

/// What: Find an existing `settings.conf`, searching in priority order.
///
/// Inputs:
/// - None (reads `HOME` and `XDG_CONFIG_HOME`).
///
/// Output:
/// - First candidate that is a regular file, or `None`.
///
/// Details:
/// - `$HOME/.config/fa-catalogue/settings.conf` wins over
///   `$XDG_CONFIG_HOME/fa-catalogue/settings.conf`.
#[must_use]
pub fn resolve_settings_path() -> Option<PathBuf> {
    settings_candidates(
        env::var("HOME").ok().as_deref(),
        env::var("XDG_CONFIG_HOME").ok().as_deref(),
    )
    .into_iter()
    .find(|p| p.is_file())
}

/// Candidate settings files for the given base variables, highest priority first.
fn settings_candidates(home: Option<&str>, xdg_config: Option<&str>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(h) = home.filter(|h| !h.trim().is_empty()) {
        candidates.push(Path::new(h).join(".config").join(APP_DIR).join("settings.conf"));
    }
    if let Some(x) = xdg_config.filter(|x| !x.trim().is_empty()) {
        candidates.push(Path::new(x).join(APP_DIR).join("settings.conf"));
    }
    candidates
}

/// Resolve an XDG base directory from `var`, else `$HOME` joined with `home_default`.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    home_default
        .iter()
        .fold(PathBuf::from(home), |base, seg| base.join(seg))
}

/// Config directory (`$HOME/.config/fa-catalogue`, else under `XDG_CONFIG_HOME`).
///
/// Creation is attempted but not required; callers that write into it handle
/// the failure themselves.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(home) = env::var("HOME")
        && !home.trim().is_empty()
    {
        let dir = Path::new(&home).join(".config").join(APP_DIR);
        if std::fs::create_dir_all(&dir).is_ok() {
            return dir;
        }
    }
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Log directory: `<config_dir>/logs`.
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}
