//! Text input coercion for trip submissions.
//!
//! Form fields arrive as text. Numbers are coerced leniently: anything that is not a
//! non-negative decimal becomes zero instead of failing the submission. Dates are
//! normalised to the pt-BR display format used throughout the trip log.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

/// Display format for trip dates (day/month/year).
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Format produced by date pickers.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest accepted amount (one quadrillion). Anything above is treated as invalid.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Parses a money, weight or distance field, defaulting to zero.
///
/// Accepts plain decimals (`"2800"`, `" 12.50 "`) and scientific notation (`"1e3"`).
/// Empty text, non-numeric text, decimal commas (`"12,5"`), negative values and values
/// above [`MAX_AMOUNT`] all yield `0`. This never fails.
#[must_use]
pub fn parse_money_field(text: &str) -> Decimal {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    let parsed = Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed));
    match parsed {
        Ok(value) if value < Decimal::ZERO => {
            debug!("Negative amount {:?} coerced to zero", trimmed);
            Decimal::ZERO
        }
        Ok(value) if value > MAX_AMOUNT => {
            debug!("Amount {:?} above the accepted maximum, coerced to zero", trimmed);
            Decimal::ZERO
        }
        Ok(value) => value,
        Err(_) => {
            debug!("Non-numeric amount {:?} coerced to zero", trimmed);
            Decimal::ZERO
        }
    }
}

/// Formats a submitted date for display.
///
/// `YYYY-MM-DD` becomes `DD/MM/YYYY`, text already in `DD/MM/YYYY` is kept, and
/// anything unparseable falls back to `today`.
#[must_use]
pub fn format_start_date(text: &str, today: NaiveDate) -> String {
    let trimmed = text.trim();
    let date = NaiveDate::parse_from_str(trimmed, INPUT_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, DISPLAY_DATE_FORMAT))
        .unwrap_or_else(|_| {
            if !trimmed.is_empty() {
                debug!("Unparseable start date {:?}, using today", trimmed);
            }
            today
        });
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap_or_default()
    }

    #[test]
    fn test_parse_plain_amounts() {
        assert_eq!(parse_money_field("2800"), Decimal::from(2800));
        assert_eq!(parse_money_field("  160 "), Decimal::from(160));
        assert_eq!(parse_money_field("12.50"), Decimal::new(1250, 2));
    }

    #[test]
    fn test_parse_scientific_notation() {
        assert_eq!(parse_money_field("1e3"), Decimal::from(1000));
    }

    #[test]
    fn test_empty_text_is_zero() {
        assert_eq!(parse_money_field(""), Decimal::ZERO);
        assert_eq!(parse_money_field("   "), Decimal::ZERO);
    }

    // Lenient by contract: garbage never fails a submission, it becomes zero.
    #[test]
    fn test_non_numeric_text_is_zero() {
        assert_eq!(parse_money_field("abc"), Decimal::ZERO);
        assert_eq!(parse_money_field("R$ 100"), Decimal::ZERO);
        assert_eq!(parse_money_field("12,5"), Decimal::ZERO);
        assert_eq!(parse_money_field("NaN"), Decimal::ZERO);
    }

    #[test]
    fn test_negative_amount_is_zero() {
        assert_eq!(parse_money_field("-50"), Decimal::ZERO);
    }

    #[test]
    fn test_amount_ceiling() {
        assert_eq!(MAX_AMOUNT, Decimal::from(1_000_000_000_000_000_i64));
        assert_eq!(parse_money_field("1000000000000000"), MAX_AMOUNT);
        assert_eq!(parse_money_field("1000000000000000.01"), Decimal::ZERO);
        assert_eq!(parse_money_field("50000000000000000000000000000"), Decimal::ZERO);
        assert_eq!(parse_money_field("5e28"), Decimal::ZERO);
    }

    #[test]
    fn test_format_iso_date() {
        assert_eq!(format_start_date("2026-02-11", today()), "11/02/2026");
    }

    #[test]
    fn test_format_keeps_display_date() {
        assert_eq!(format_start_date("08/02/2026", today()), "08/02/2026");
    }

    #[test]
    fn test_format_invalid_date_falls_back_to_today() {
        assert_eq!(format_start_date("", today()), "15/10/2026");
        assert_eq!(format_start_date("2026-13-40", today()), "15/10/2026");
    }
}
