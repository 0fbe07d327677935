//! Display helpers for the fixed pt-BR locale.
//!
//! Functions here are framework-agnostic and return plain strings that the bot
//! layer drops into messages and embeds.

use crate::core::{summary, trip::Trip};
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as Brazilian reais: `R$ 1.840,00`.
///
/// Negative amounts are prefixed with a minus sign: `-R$ 200,00`.
#[must_use]
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let plain = format!("{:.2}", rounded.abs());
    let (integer, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    format!("{sign}R$ {},{cents}", group_thousands(integer))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Generates a text bar for a percentage, like `[██████░░░░] 63%`.
///
/// The bar is clamped to 0-100; the printed number is not.
#[must_use]
pub fn format_ratio_bar(percent: i64, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(10);
    let clamped = usize::try_from(percent.clamp(0, 100)).unwrap_or(0);
    let filled = (clamped * length + 50) / 100;
    let empty = length.saturating_sub(filled);

    format!("[{}{}] {percent}%", "█".repeat(filled), "░".repeat(empty))
}

/// One-line trip summary for the trip list.
#[must_use]
pub fn format_trip_line(trip: &Trip) -> String {
    format!(
        "{} | {} | {} → {} | {} | profit {}",
        trip.start_date,
        trip.status.label(),
        trip.origin,
        trip.destination,
        format_brl(trip.freight_value),
        format_brl(summary::profit(trip))
    )
}
