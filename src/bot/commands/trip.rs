//! Trip Discord commands - `addtrip`, `trips` and `trip`.
//!
//! These commands go through the core trip store; the store is the only place
//! trips are created and read.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete},
        core::{
            format::{format_brl, format_trip_line},
            summary,
            trip::{Trip, TripDraft, TripId},
        },
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use std::fmt::Write;

    /// Discord caps embed descriptions at 4096 characters.
    const MAX_DESCRIPTION_CHARS: usize = 4096;

    fn trip_detail_embed(trip: &Trip) -> Result<serenity::CreateEmbed> {
        let mut costs = String::new();
        writeln!(&mut costs, "**Diesel:** {}", format_brl(trip.fuel_cost))?;
        writeln!(&mut costs, "**Tolls:** {}", format_brl(trip.toll_cost))?;
        writeln!(
            &mut costs,
            "**Driver commission:** {}",
            format_brl(trip.driver_commission)
        )?;
        write!(&mut costs, "**Other:** {}", format_brl(trip.other_expenses))?;

        let mut cargo = String::new();
        writeln!(&mut cargo, "**Cargo:** {}", trip.cargo.as_deref().unwrap_or("-"))?;
        match trip.weight {
            Some(weight) => writeln!(&mut cargo, "**Weight:** {weight} kg")?,
            None => writeln!(&mut cargo, "**Weight:** -")?,
        }
        write!(&mut cargo, "**Plate:** {}", trip.plate.as_deref().unwrap_or("-"))?;

        let mut embed = serenity::CreateEmbed::default()
            .title(format!("🚚 {} → {}", trip.origin, trip.destination))
            .description(format!(
                "{} | {} | {} km",
                trip.start_date,
                trip.status.label(),
                trip.distance
            ))
            .color(0x0025_63EB)
            .field("Freight", format_brl(trip.freight_value), true)
            .field("Advance", format_brl(trip.advance_amount), true)
            .field("Costs", costs, false)
            .field("Cargo", cargo, false)
            .field("Estimated profit", format_brl(summary::profit(trip)), false);

        if let Some(notes) = &trip.notes {
            embed = embed.field("Notes", notes.clone(), false);
        }

        Ok(embed.footer(serenity::CreateEmbedFooter::new(format!("Trip ID: {}", trip.id))))
    }

    /// Saves a new trip.
    ///
    /// Amounts are typed as text; anything blank or not a number counts as zero.
    /// The date defaults to today.
    #[allow(clippy::too_many_arguments)]
    #[poise::command(slash_command, prefix_command)]
    pub async fn addtrip(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Where the freight starts"] origin: String,
        #[description = "Where the freight goes"] destination: String,
        #[description = "Gross freight value (R$)"] freight_value: String,
        #[description = "Start date (YYYY-MM-DD)"] start_date: Option<String>,
        #[description = "Distance in km"] distance: Option<String>,
        #[description = "Driver commission (R$)"] commission: Option<String>,
        #[description = "Diesel (R$)"] fuel: Option<String>,
        #[description = "Tolls (R$)"] tolls: Option<String>,
        #[description = "Other expenses (R$)"] other_expenses: Option<String>,
        #[description = "Advance paid to the driver (R$)"] advance: Option<String>,
        #[description = "Cargo description"] cargo: Option<String>,
        #[description = "Cargo weight in kg"] weight: Option<String>,
        #[description = "Vehicle plate"] plate: Option<String>,
        #[description = "Notes"] notes: Option<String>,
    ) -> Result<()> {
        let draft = TripDraft {
            origin,
            destination,
            start_date: start_date.unwrap_or_default(),
            distance: distance.unwrap_or_default(),
            freight_value,
            driver_commission: commission.unwrap_or_default(),
            fuel_cost: fuel.unwrap_or_default(),
            toll_cost: tolls.unwrap_or_default(),
            other_expenses: other_expenses.unwrap_or_default(),
            advance_amount: advance.unwrap_or_default(),
            cargo: cargo.unwrap_or_default(),
            weight: weight.unwrap_or_default(),
            plate: plate.unwrap_or_default(),
            notes: notes.unwrap_or_default(),
        };

        if let Err(e) = draft.validate() {
            ctx.say(format!("❌ {e}")).await?;
            return Ok(());
        }

        let result = ctx.data().store.write().await.add(&draft).await;
        match result {
            Ok(trip) => {
                let embed = trip_detail_embed(&trip)?;
                ctx.send(
                    poise::CreateReply::default()
                        .content("✅ Trip saved!")
                        .embed(embed),
                )
                .await?;
            }
            Err(e) => {
                ctx.say(format!(
                    "⚠️ Trip added for this session, but it could not be written to storage: {e}"
                ))
                .await?;
            }
        }

        Ok(())
    }

    /// Lists all trips, newest first, with their profit.
    #[poise::command(slash_command, prefix_command)]
    pub async fn trips(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let store = ctx.data().store.read().await;
        let trips = store.list();

        if trips.is_empty() {
            drop(store);
            ctx.say("🚚 No trips yet. Add one with `/addtrip`!").await?;
            return Ok(());
        }

        let mut description = String::new();
        let mut shown = 0;
        for trip in trips {
            let entry = format!("{}\n`{}`\n\n", format_trip_line(trip), trip.id);
            if description.chars().count() + entry.chars().count() > MAX_DESCRIPTION_CHARS {
                break;
            }
            description.push_str(&entry);
            shown += 1;
        }

        let total = trips.len();
        drop(store);

        let embed = serenity::CreateEmbed::default()
            .title("🚚 My Trips")
            .color(0x0025_63EB)
            .description(description)
            .footer(serenity::CreateEmbedFooter::new(if shown < total {
                format!("Showing {shown} of {total} trips")
            } else {
                format!("{total} trip{}", if total == 1 { "" } else { "s" })
            }));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Shows the details of one trip.
    #[poise::command(slash_command, prefix_command)]
    pub async fn trip(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Trip to show"]
        #[autocomplete = "autocomplete::autocomplete_trip_id"]
        trip_id: String,
    ) -> Result<()> {
        let embed = {
            let store = ctx.data().store.read().await;
            match store.require(&TripId::from(trip_id.as_str())) {
                Ok(trip) => Some(trip_detail_embed(trip)?),
                Err(_) => None,
            }
        };

        match embed {
            Some(embed) => {
                ctx.send(poise::CreateReply::default().embed(embed)).await?;
            }
            None => {
                ctx.say(format!(
                    "❌ Trip '{trip_id}' not found. Use `/trips` to see your trips."
                ))
                .await?;
            }
        }

        Ok(())
    }
}

pub use inner::*;
