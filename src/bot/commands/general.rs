//! General Discord commands - ping and help.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**FreteSmart Help**\n\
        Log your freight trips and keep an eye on what they really earn.\n\n\
        **Trips**\n\
        • `/addtrip <origin> <destination> <freight> [costs...]` - Saves a new trip.\n\
        • `/trips` - Lists your trips, newest first, with their profit.\n\
        • `/trip <id>` - Shows the details of one trip.\n\n\
        **Money**\n\
        • `/dashboard` - Revenue, expenses, net profit and profit margin.\n\
        • `/analyze <origin> <destination> <freight> [costs...]` - Asks the AI whether a freight is worth it. Nothing is saved.\n\n\
        **Utility**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.\n\n\
        Amounts that are left blank or are not numbers count as zero.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
