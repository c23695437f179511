use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::error::{MinderError, Result};

/// Print a prompt and read one trimmed line. EOF is an error rather than an
/// empty answer so scripted input that runs out does not spin forever.
pub fn prompt_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<String> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(MinderError::Input("unexpected end of input".to_string()));
    }
    Ok(line.trim().to_string())
}

/// Parse a transaction date entered as DD-MM-YYYY.
pub fn parse_entry_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%d-%m-%Y").ok()
}

/// Parse a monetary value. Accepted only when rounding to two decimal places
/// leaves the parsed value unchanged, so "12.34" passes and "12.345" does not.
pub fn parse_amount(s: &str) -> Option<f64> {
    let value: f64 = s.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    if (value * 100.0).round() / 100.0 == value {
        Some(value)
    } else {
        None
    }
}

/// Empty or whitespace-only comments are stored as NULL.
pub fn normalize_comment(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Ask for a date until one parses. The retry loop is unbounded by choice:
/// the prompt blocks until valid input arrives (or input ends).
pub fn prompt_date<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<NaiveDate> {
    loop {
        let line = prompt_line(input, out, "Enter the date of the transaction (DD-MM-YYYY): ")?;
        match parse_entry_date(&line) {
            Some(date) => return Ok(date),
            None => writeln!(out, "Please enter a date in the format DD-MM-YYYY.")?,
        }
    }
}

/// Ask for a value until one passes the two-decimal rule. Unbounded like
/// `prompt_date`.
pub fn prompt_amount<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<f64> {
    loop {
        let line = prompt_line(input, out, "Enter the value of the transaction (e.g., 12.34): ")?;
        match parse_amount(&line) {
            Some(value) => return Ok(value),
            None => writeln!(out, "Please enter a value with at most two decimal places.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_parse_amount_two_decimals() {
        assert_eq!(parse_amount("12.34"), Some(12.34));
        assert_eq!(parse_amount("2500.00"), Some(2500.0));
        assert_eq!(parse_amount("0"), Some(0.0));
        assert_eq!(parse_amount("-42.5"), Some(-42.5));
    }

    #[test]
    fn test_parse_amount_rejects_extra_precision() {
        assert_eq!(parse_amount("12.345"), None);
        assert_eq!(parse_amount("0.001"), None);
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("nan"), None);
        assert_eq!(parse_amount("inf"), None);
    }

    #[test]
    fn test_parse_entry_date() {
        assert_eq!(
            parse_entry_date("15-03-2024"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(parse_entry_date("2024/01/01"), None);
        assert_eq!(parse_entry_date("32-01-2024"), None);
        assert_eq!(parse_entry_date("15-13-2024"), None);
        assert_eq!(parse_entry_date(""), None);
    }

    #[test]
    fn test_normalize_comment() {
        assert_eq!(normalize_comment(""), None);
        assert_eq!(normalize_comment("   "), None);
        assert_eq!(normalize_comment(" groceries "), Some("groceries".to_string()));
    }

    #[test]
    fn test_prompt_date_reprompts_until_valid() {
        let mut input = Cursor::new("2024/01/01\nnope\n15-03-2024\n");
        let mut out = Vec::new();
        let date = prompt_date(&mut input, &mut out).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown.matches("format DD-MM-YYYY").count(), 2);
    }

    #[test]
    fn test_prompt_amount_reprompts_until_valid() {
        let mut input = Cursor::new("12.345\n12.34\n");
        let mut out = Vec::new();
        assert_eq!(prompt_amount(&mut input, &mut out).unwrap(), 12.34);
    }

    #[test]
    fn test_prompt_line_errors_at_eof() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        assert!(prompt_line(&mut input, &mut out, "? ").is_err());
    }
}
