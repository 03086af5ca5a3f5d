//! Settings read from the environment (and an optional `.env` file).
//!
//! | Variable            | Meaning                              | Default |
//! |---------------------|--------------------------------------|---------|
//! | `CONVERT_PRECISION` | significant digits in text output    | 6       |
//! | `CONVERT_FORMAT`    | `text` or `json`                     | text    |
//! | `CONVERT_LOG`       | `error` `warn` `info` `debug` `trace` | warn    |
//!
//! Command-line flags take precedence over all of these.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;

use clap::ValueEnum;
use tracing::Level;

use crate::cli::{Cli, OutputFormat};

pub const DEFAULT_PRECISION: usize = 6;
pub const MAX_PRECISION: usize = 17;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub precision: usize,
    pub format: OutputFormat,
    pub log_level: Level,
    /// Variables that were set but could not be used, as
    /// `NAME=value (reason)`, and unreadable `.env` files.  Reported
    /// once logging is up.
    pub ignored: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            format: OutputFormat::Text,
            log_level: Level::WARN,
            ignored: Vec::new(),
        }
    }
}

impl Settings {
    /// Read settings from the process environment, loading `.env` first.
    pub fn from_env() -> Self {
        let problems = load_dotenv();
        let mut settings = Self::from_lookup(|key| env::var(key).ok());
        settings.ignored.extend(problems.iter().cloned());
        settings
    }

    /// Read settings through an arbitrary variable lookup.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(raw) = get("CONVERT_PRECISION") {
            match raw.trim().parse::<usize>() {
                Ok(p) if (1..=MAX_PRECISION).contains(&p) => settings.precision = p,
                _ => settings
                    .ignored
                    .push(format!("CONVERT_PRECISION={raw} (expected 1-{MAX_PRECISION})")),
            }
        }

        if let Some(raw) = get("CONVERT_FORMAT") {
            match OutputFormat::from_str(raw.trim(), true) {
                Ok(f) => settings.format = f,
                Err(_) => settings
                    .ignored
                    .push(format!("CONVERT_FORMAT={raw} (expected text or json)")),
            }
        }

        if let Some(raw) = get("CONVERT_LOG") {
            match Level::from_str(raw.trim()) {
                Ok(level) => settings.log_level = level,
                Err(_) => settings
                    .ignored
                    .push(format!("CONVERT_LOG={raw} (expected a log level)")),
            }
        }

        settings
    }

    /// Apply command-line overrides.
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if let Some(p) = cli.precision {
            self.precision = usize::from(p);
        }
        if let Some(f) = cli.format {
            self.format = f;
        }
        if cli.verbose {
            self.log_level = self.log_level.max(Level::DEBUG);
        }
        self
    }
}

// ── .env loading (once) ──────────────────────────────────────────────

/// Load the first `.env` found: current directory (and its parents),
/// then `CARGO_MANIFEST_DIR`, then the executable's directory.
///
/// Returns the files that exist but could not be read, as
/// `path (reason)`.
pub fn load_dotenv() -> &'static [String] {
    static DOTENV_PROBLEMS: OnceLock<Vec<String>> = OnceLock::new();
    DOTENV_PROBLEMS.get_or_init(|| {
        match dotenvy::dotenv() {
            Ok(_) => return Vec::new(),
            Err(e) if e.not_found() => {}
            Err(e) => return vec![format!(".env ({e})")],
        }

        let manifest_dir = env::var("CARGO_MANIFEST_DIR").ok().map(PathBuf::from);
        let exe_dir = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(PathBuf::from));

        let Some(path) = manifest_dir
            .into_iter()
            .chain(exe_dir)
            .map(|dir| dir.join(".env"))
            .find(|p| p.exists())
        else {
            return Vec::new();
        };

        match dotenvy::from_path(&path) {
            Ok(()) => Vec::new(),
            Err(e) => vec![format!("{} ({e})", path.display())],
        }
    })
}
