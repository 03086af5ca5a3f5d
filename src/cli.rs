//! Command-line interface.
//!
//! All conversion arguments are optional at the clap level so that a
//! missing piece is reported as [`Error::MissingArgument`] and a bad
//! value as [`Error::InvalidNumber`], not as clap usage errors.

use clap::Parser;

use crate::error::{Error, Result};

/// Convert a value between units of length, mass, volume or temperature.
#[derive(Parser, Debug, Default)]
#[command(name = "convert", author, version, about, long_about = None)]
pub struct Cli {
    /// Unit to convert from (e.g. km, Pounds, fahrenheit)
    #[arg(short = 'f', long = "from", value_name = "UNIT", num_args = 0..=1, default_missing_value = "")]
    pub from: Option<String>,

    /// Unit to convert to
    #[arg(short = 't', long = "to", value_name = "UNIT", num_args = 0..=1, default_missing_value = "")]
    pub to: Option<String>,

    /// Value to convert
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub value: Option<String>,

    /// List the available units
    #[arg(short = 'l', long = "list", visible_alias = "units")]
    pub list: bool,

    /// Significant digits in text output [env: CONVERT_PRECISION, default: 6]
    #[arg(short = 'p', long, value_parser = clap::value_parser!(u8).range(1..=17))]
    pub precision: Option<u8>,

    /// Output format [env: CONVERT_FORMAT, default: text]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log conversion steps to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A fully-specified conversion request, before unit normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct Request<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub value: f64,
}

impl Cli {
    /// Parsed value, if one was given.
    ///
    /// Checked before anything else, so a bad number is reported even
    /// when other arguments are missing.
    pub fn parsed_value(&self) -> Result<Option<f64>> {
        self.value.as_deref().map(parse_value).transpose()
    }

    /// Collect the three conversion inputs, failing on the first one
    /// that is absent or empty.
    pub fn request(&self) -> Result<Request<'_>> {
        let value = self.parsed_value()?;
        let from = non_empty(self.from.as_deref()).ok_or(Error::MissingArgument("-f/--from <UNIT>"))?;
        let to = non_empty(self.to.as_deref()).ok_or(Error::MissingArgument("-t/--to <UNIT>"))?;
        let value = value.ok_or(Error::MissingArgument("<VALUE>"))?;
        Ok(Request { from, to, value })
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Parse a value token as a finite `f64`.
pub fn parse_value(raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::InvalidNumber(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("convert").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn parses_short_flags_and_value() {
        let cli = parse(&["-f", "km", "-t", "mi", "1"]);
        let req = cli.request().unwrap();
        assert_eq!(req, Request { from: "km", to: "mi", value: 1.0 });
    }

    #[test]
    fn value_may_come_first_and_be_negative() {
        let cli = parse(&["-40", "--from", "C", "--to", "F"]);
        assert_eq!(cli.request().unwrap().value, -40.0);
    }

    #[test]
    fn units_is_an_alias_for_list() {
        assert!(parse(&["--units"]).list);
        assert!(parse(&["-l"]).list);
    }

    #[test]
    fn missing_arguments_are_reported_in_order() {
        let err = parse(&["5"]).request().unwrap_err();
        assert!(matches!(err, Error::MissingArgument("-f/--from <UNIT>")));

        let err = parse(&["-f", "m", "5"]).request().unwrap_err();
        assert!(matches!(err, Error::MissingArgument("-t/--to <UNIT>")));

        let err = parse(&["-f", "m", "-t", "ft"]).request().unwrap_err();
        assert!(matches!(err, Error::MissingArgument("<VALUE>")));
    }

    #[test]
    fn empty_unit_counts_as_missing() {
        let err = parse(&["-f", "", "-t", "ft", "1"]).request().unwrap_err();
        assert!(matches!(err, Error::MissingArgument(_)));
    }

    #[test]
    fn unit_flag_without_a_value_is_missing() {
        let err = parse(&["1", "-t", "ft", "-f"]).request().unwrap_err();
        assert!(matches!(err, Error::MissingArgument("-f/--from <UNIT>")));

        let cli = parse(&["-t", "-f", "m", "1"]);
        assert_eq!(cli.to.as_deref(), Some(""));
        assert!(matches!(cli.request(), Err(Error::MissingArgument("-t/--to <UNIT>"))));
    }

    #[test]
    fn invalid_number_wins_over_missing_units() {
        let err = parse(&["abc"]).request().unwrap_err();
        assert!(matches!(err, Error::InvalidNumber(ref s) if s == "abc"));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(parse_value("inf").is_err());
        assert!(parse_value("NaN").is_err());
        assert!(parse_value("12abc").is_err());
        assert_eq!(parse_value(" 2.5 ").unwrap(), 2.5);
        assert_eq!(parse_value("1e3").unwrap(), 1000.0);
    }

    #[test]
    fn precision_is_bounded() {
        assert!(Cli::try_parse_from(["convert", "-p", "0"]).is_err());
        assert!(Cli::try_parse_from(["convert", "-p", "18"]).is_err());
        assert_eq!(parse(&["-p", "3"]).precision, Some(3));
    }

    #[test]
    fn format_flag() {
        assert_eq!(parse(&["--format", "json"]).format, Some(OutputFormat::Json));
        assert_eq!(parse(&[]).format, None);
    }
}
