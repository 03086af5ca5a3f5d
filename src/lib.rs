//! # unitconv
//!
//! The `convert` command-line tool: converts a value between units of
//! length, mass, volume or temperature.
//!
//! ```text
//! $ convert -f kilometers -t miles 1
//! From: km
//! To: mi
//! Value: 0.621371mi
//! ```
//!
//! Unit spellings go through [`converter::normalize`] (case-insensitive
//! aliases such as `Pounds` or `fahrenheit`) and the conversion itself
//! is done by [`converter::Converter`].
//!
//! ```
//! use clap::Parser;
//! use unitconv::{Cli, Outcome, run};
//!
//! let cli = Cli::parse_from(["convert", "-f", "F", "-t", "celsius", "212"]);
//! let Outcome::Converted(c) = run(&cli)? else { unreachable!() };
//! assert_eq!(c.result, 100.0);
//! # Ok::<(), unitconv::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, OutputFormat, Request};
pub use config::Settings;
pub use error::{Error, Result};

use converter::{Conversion, Converter, normalize};
use tracing::debug;

/// What the binary should do after a successful run.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Converted(Conversion),
    /// The request could not be served; print usage and exit non-zero.
    Usage,
}

/// Execute one invocation.
///
/// A listing request (`--list`) only prints usage: listing units is not
/// supported.
pub fn run(cli: &Cli) -> Result<Outcome> {
    if cli.list {
        cli.parsed_value()?;
        return Ok(Outcome::Usage);
    }

    let request = cli.request()?;
    let from = normalize(request.from);
    let to = normalize(request.to);
    debug!(raw_from = request.from, raw_to = request.to, %from, %to, "normalized units");

    let conversion = Converter::new().conversion(&from, &to, request.value)?;
    Ok(Outcome::Converted(conversion))
}
