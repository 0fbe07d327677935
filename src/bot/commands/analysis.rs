//! AI analysis Discord command - `analyze`.
//!
//! The assessment is shown and discarded. It never creates or changes a trip.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        analysis::{AnalysisRequest, FreightAnalysis, Verdict},
        bot::BotData,
        core::{format::format_brl, trip::TripDraft},
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use std::fmt::Write;

    const fn verdict_color(verdict: Verdict) -> u32 {
        match verdict {
            Verdict::Excellent => 0x0016_A34A,
            Verdict::Good => 0x0022_C55E,
            Verdict::Risk => 0x00EA_B308,
            Verdict::Loss => 0x00EF_4444,
        }
    }

    fn analysis_embed(analysis: &FreightAnalysis) -> Result<serenity::CreateEmbed> {
        let mut tips = String::new();
        for tip in &analysis.tips {
            writeln!(&mut tips, "• {tip}")?;
        }
        if tips.is_empty() {
            tips.push('-');
        }

        Ok(serenity::CreateEmbed::default()
            .title("🧠 AI Analysis")
            .description(format!(
                "**Verdict:** {} (score {}/100)",
                analysis.verdict, analysis.score
            ))
            .color(verdict_color(analysis.verdict))
            .field(
                "Estimated net profit",
                format_brl(analysis.estimated_net_profit),
                false,
            )
            .field("Tips", tips, false)
            .footer(serenity::CreateEmbedFooter::new(
                "Advisory only. Nothing was saved.",
            )))
    }

    /// Asks the AI whether a freight is worth taking.
    ///
    /// Amounts are coerced the same way as `/addtrip`. Nothing is saved.
    #[allow(clippy::too_many_arguments)]
    #[poise::command(slash_command, prefix_command)]
    pub async fn analyze(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Where the freight starts"] origin: String,
        #[description = "Where the freight goes"] destination: String,
        #[description = "Gross freight value (R$)"] freight_value: String,
        #[description = "Distance in km"] distance: Option<String>,
        #[description = "Driver commission (R$)"] commission: Option<String>,
        #[description = "Diesel (R$)"] fuel: Option<String>,
        #[description = "Tolls (R$)"] tolls: Option<String>,
        #[description = "Other expenses (R$)"] other_expenses: Option<String>,
        #[description = "Advance paid to the driver (R$)"] advance: Option<String>,
    ) -> Result<()> {
        let Some(analyzer) = ctx.data().analyzer.as_ref() else {
            ctx.say("ℹ️ AI analysis is not configured on this bot.")
                .await?;
            return Ok(());
        };

        let draft = TripDraft {
            origin,
            destination,
            freight_value,
            distance: distance.unwrap_or_default(),
            driver_commission: commission.unwrap_or_default(),
            fuel_cost: fuel.unwrap_or_default(),
            toll_cost: tolls.unwrap_or_default(),
            other_expenses: other_expenses.unwrap_or_default(),
            advance_amount: advance.unwrap_or_default(),
            ..TripDraft::default()
        };
        let request = AnalysisRequest::from_draft(&draft);

        // The model can take a while
        ctx.defer().await?;

        match analyzer.analyze(&request).await {
            Some(analysis) => {
                let embed = analysis_embed(&analysis)?;
                ctx.send(poise::CreateReply::default().embed(embed)).await?;
            }
            None => {
                ctx.say("ℹ️ No analysis available right now. Your trip can still be saved with `/addtrip`.")
                    .await?;
            }
        }

        Ok(())
    }
}

pub use inner::*;
