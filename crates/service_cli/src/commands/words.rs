//! Words command implementation

use almanac_core::text::{to_signed_words, to_words_str};
use almanac_core::types::NumberError;
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;
use tracing::info;

use crate::config::OutputFormat;
use crate::Result;

/// Result of the words command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordsReport {
    /// Input text
    pub number: String,
    /// English rendering
    pub words: String,
}

/// Spells `number`; with `signed` the value may be negative and gains a
/// sign word.
pub fn compute(number: &str, signed: bool) -> Result<WordsReport> {
    let number = number.trim();
    let words = if signed {
        let value = Decimal::from_str(number).map_err(|_| NumberError::Parse {
            input: number.to_string(),
        })?;
        to_signed_words(Some(value))?
    } else {
        to_words_str(number)?
    };

    Ok(WordsReport {
        number: number.to_string(),
        words,
    })
}

/// Formats a report for printing.
pub fn render(report: &WordsReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(report.words.clone()),
        OutputFormat::Json => super::render(format, report, &[]),
    }
}

/// Run the words command
pub fn run(number: &str, signed: bool, format: OutputFormat) -> Result<()> {
    info!("Spelling {} (signed: {})", number, signed);

    let report = compute(number, signed)?;
    println!("{}", render(&report, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    #[test]
    fn test_compute_unsigned() {
        let report = compute("36.4", false).unwrap();
        assert_eq!(report.words, "thirty six point four zero");
    }

    #[test]
    fn test_compute_signed() {
        assert_eq!(compute("-5.4", true).unwrap().words, "minus five point four zero");
        assert_eq!(compute("0", true).unwrap().words, "positive zero");
    }

    #[test]
    fn test_compute_rejects_out_of_range() {
        assert!(matches!(
            compute("1000", false),
            Err(CliError::Number(NumberError::OutOfRange { .. }))
        ));
        assert!(matches!(
            compute("-1", false),
            Err(CliError::Number(NumberError::OutOfRange { .. }))
        ));
        assert!(matches!(
            compute("-1000", true),
            Err(CliError::Number(NumberError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_compute_rejects_huge_numbers() {
        let huge = "79228162514264337593543950335";
        assert!(matches!(
            compute(huge, false),
            Err(CliError::Number(NumberError::OutOfRange { .. }))
        ));
        assert!(matches!(
            compute(&format!("-{}", huge), true),
            Err(CliError::Number(NumberError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_compute_rejects_text() {
        assert!(matches!(
            compute("ten", true),
            Err(CliError::Number(NumberError::Parse { .. }))
        ));
        assert!(matches!(
            compute("ten", false),
            Err(CliError::Number(NumberError::Parse { .. }))
        ));
    }

    #[test]
    fn test_render_formats() {
        let report = compute("7", false).unwrap();
        assert_eq!(render(&report, OutputFormat::Table).unwrap(), "seven");

        let json: serde_json::Value =
            serde_json::from_str(&render(&report, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["words"], "seven");
        assert_eq!(json["number"], "7");
    }
}
