//! Autocomplete handlers for Discord slash command parameters.

use crate::{bot::BotData, errors::Error};
use poise::serenity_prelude as serenity;

/// Discord caps autocomplete labels at 100 characters.
const MAX_LABEL_LEN: usize = 100;

/// Suggests trip ids, labelled with their date and route.
///
/// Matches the partial input against the id, origin and destination
/// (case-insensitive) and returns up to 25 choices, newest trips first.
pub async fn autocomplete_trip_id(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<serenity::AutocompleteChoice> {
    let store = ctx.data().store.read().await;
    let partial_lower = partial.to_lowercase();

    store
        .list()
        .iter()
        .filter(|trip| {
            trip.id.as_str().to_lowercase().contains(&partial_lower)
                || trip.origin.to_lowercase().contains(&partial_lower)
                || trip.destination.to_lowercase().contains(&partial_lower)
        })
        .take(25) // Discord autocomplete limit
        .map(|trip| {
            let label: String = format!(
                "{} {} → {}",
                trip.start_date, trip.origin, trip.destination
            )
            .chars()
            .take(MAX_LABEL_LEN)
            .collect();
            serenity::AutocompleteChoice::new(label, trip.id.to_string())
        })
        .collect()
}
