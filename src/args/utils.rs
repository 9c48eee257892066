//! Shared utilities for argument processing.

use fa_catalogue::settings::Settings;

use crate::args::Args;

/// What: Determine the log filter from flags, environment and settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: User settings.
/// - `rust_log`: Value of `RUST_LOG`, if set.
///
/// Output:
/// - Filter directive for `EnvFilter` (e.g. `info` or `fa_catalogue=trace`).
///
/// Details:
/// - Precedence: `--verbose`, `--log-level`, `RUST_LOG`, `log_level` setting, `info`.
pub fn determine_log_level(args: &Args, settings: &Settings, rust_log: Option<&str>) -> String {
    if args.verbose {
        return "debug".to_string();
    }
    args.log_level
        .clone()
        .or_else(|| {
            rust_log
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToString::to_string)
        })
        .or_else(|| settings.log_level.clone())
        .unwrap_or_else(|| "info".to_string())
}

/// Format a fabric weight for display, e.g. `12oz`, or `-` when unknown.
pub fn format_weight(oz: Option<f64>) -> String {
    oz.map_or_else(|| "-".to_string(), |w| format!("{w}oz"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    /// What: Log level precedence
    ///
    /// - Input: Combinations of verbose, flag, RUST_LOG and settings
    /// - Output: Highest-priority source wins; `info` otherwise
    fn utils_log_level_precedence() {
        let settings = Settings {
            log_level: Some("warn".into()),
            ..Settings::default()
        };
        let plain = Args::parse_from(["fa-catalogue"]);
        assert_eq!(determine_log_level(&plain, &Settings::default(), None), "info");
        assert_eq!(determine_log_level(&plain, &settings, None), "warn");
        assert_eq!(determine_log_level(&plain, &settings, Some("trace")), "trace");
        assert_eq!(determine_log_level(&plain, &settings, Some("  ")), "warn");

        let flagged = Args::parse_from(["fa-catalogue", "--log-level", "error"]);
        assert_eq!(determine_log_level(&flagged, &settings, Some("trace")), "error");
        let verbose = Args::parse_from(["fa-catalogue", "-v", "--log-level", "error"]);
        assert_eq!(determine_log_level(&verbose, &settings, None), "debug");
    }

    #[test]
    /// What: Weight formatting
    ///
    /// - Input: Whole, fractional and missing weights
    /// - Output: `12oz`, `10.5oz`, `-`
    fn utils_format_weight() {
        assert_eq!(format_weight(Some(12.0)), "12oz");
        assert_eq!(format_weight(Some(10.5)), "10.5oz");
        assert_eq!(format_weight(None), "-");
    }
}
