//! Console output: conversion results, errors and usage.

use colored::Colorize;
use converter::Conversion;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

pub const USAGE: &str = "Usage: convert -f (From Unit) -t (To Unit) <num>";

/// JSON shape of a failed invocation.
#[derive(Debug, Serialize)]
struct ErrorReport<'a> {
    kind: &'static str,
    error: String,
    usage: &'a str,
}

/// Format `value` with `digits` significant digits, the way a C++
/// `ostream` or `printf("%g")` would: trailing zeros are dropped and
/// exponent notation is used for very large or very small magnitudes.
pub fn format_significant(value: f64, digits: usize) -> String {
    let digits = digits.clamp(1, 17);
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }

    // Exponent after rounding to `digits`, so 999999.5 counts as 1e6.
    let sci = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else { return sci };
    let Ok(exp) = exp.parse::<i32>() else { return sci };

    if exp < -4 || exp >= digits as i32 {
        format!("{}e{exp}", trim_fraction(mantissa))
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Text report for a successful conversion.
pub fn render_text(conversion: &Conversion, precision: usize) -> String {
    let value = format!("{}{}", format_significant(conversion.result, precision), conversion.to);
    format!(
        "From: {}\nTo: {}\nValue: {}",
        conversion.from,
        conversion.to,
        value.green().bold()
    )
}

pub fn render_json(conversion: &Conversion) -> Result<String> {
    Ok(serde_json::to_string(conversion)?)
}

pub fn print_conversion(conversion: &Conversion, format: OutputFormat, precision: usize) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", render_text(conversion, precision)),
        OutputFormat::Json => println!("{}", render_json(conversion)?),
    }
    Ok(())
}

/// Report a failure on stderr, followed by the usage line.
pub fn print_error(error: &Error, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            eprintln!("{} {}", "Error:".red().bold(), error.to_string().red());
            print_usage();
        }
        OutputFormat::Json => {
            let report = ErrorReport { kind: error.kind(), error: error.to_string(), usage: USAGE };
            match serde_json::to_string(&report) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("Error: {error}"),
            }
        }
    }
}

pub fn print_usage() {
    println!("{USAGE}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use converter::Category;

    #[test]
    fn six_significant_digits_by_default() {
        assert_eq!(format_significant(0.621_371_192, 6), "0.621371");
        assert_eq!(format_significant(32.0, 6), "32");
        assert_eq!(format_significant(-40.0, 6), "-40");
        assert_eq!(format_significant(1609.34, 6), "1609.34");
        assert_eq!(format_significant(273.15, 6), "273.15");
    }

    #[test]
    fn large_and_small_magnitudes_use_exponents() {
        assert_eq!(format_significant(1.0e7, 6), "1e7");
        assert_eq!(format_significant(0.00001, 6), "1e-5");
        assert_eq!(format_significant(0.0001, 6), "0.0001");
        assert_eq!(format_significant(999_999.7, 6), "1e6");
    }

    #[test]
    fn precision_changes_digits() {
        assert_eq!(format_significant(2.0 / 3.0, 3), "0.667");
        assert_eq!(format_significant(2.0 / 3.0, 1), "0.7");
        assert_eq!(format_significant(0.0, 6), "0");
    }

    #[test]
    fn json_report_contains_all_fields() {
        let c = Conversion {
            from: "C".into(),
            to: "F".into(),
            category: Category::Temperature,
            value: 100.0,
            result: 212.0,
        };
        let json: serde_json::Value = serde_json::from_str(&render_json(&c).unwrap()).unwrap();
        assert_eq!(json["from"], "C");
        assert_eq!(json["to"], "F");
        assert_eq!(json["category"], "temperature");
        assert_eq!(json["value"], 100.0);
        assert_eq!(json["result"], 212.0);
    }

    #[test]
    fn text_report_lists_units_and_value() {
        let c = Conversion {
            from: "km".into(),
            to: "mi".into(),
            category: Category::Length,
            value: 1.0,
            result: 0.621_371_192,
        };
        let text = render_text(&c, 6);
        assert!(text.starts_with("From: km\nTo: mi\nValue: "));
        assert!(text.contains("0.621371mi"));
    }
}
