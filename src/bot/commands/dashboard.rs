//! Dashboard Discord command - financial summary over every trip.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        core::{
            format::{format_brl, format_ratio_bar},
            summary,
        },
        errors::{Error, Result},
    };

    /// Shows total revenue, expenses, net profit and profit margin.
    ///
    /// The driver advance is not counted as an expense.
    #[poise::command(slash_command, prefix_command)]
    pub async fn dashboard(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        use poise::serenity_prelude as serenity;

        let stats = ctx.data().store.read().await.stats();
        let margin = summary::profit_ratio(&stats);

        let embed = serenity::CreateEmbed::default()
            .title("📊 Financial Summary")
            .color(0x0022_C55E)
            .field("Revenue", format_brl(stats.total_revenue), true)
            .field("Expenses", format_brl(stats.total_expenses), true)
            .field("Net profit", format_brl(stats.net_profit), false)
            .field("Profit margin", format_ratio_bar(margin, Some(10)), false)
            .field(
                "Expense share",
                format!("{}% of revenue", stats.expense_share()),
                false,
            )
            .footer(serenity::CreateEmbedFooter::new(format!(
                "{} trip{}",
                stats.trip_count,
                if stats.trip_count == 1 { "" } else { "s" }
            )));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }
}

pub use inner::*;
