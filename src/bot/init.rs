use crate::bot::Handler;
use crate::config::Config;
use anyhow::{Context as _, Result};
use serenity::prelude::*;

/// Initialize and start the Discord bot
pub async fn start_bot(config: Config) -> Result<()> {
    tracing::info!("[INIT] Starting Leafbook Discord Bot");

    let token = config.discord_token.clone();
    let handler = Handler::new(config);

    let mut client = Client::builder(token, GatewayIntents::empty())
        .event_handler(handler)
        .await
        .context("Error creating client")?;

    if let Err(why) = client.start().await {
        tracing::error!("[ERROR] Discord client error: {why:?}");
        return Err(why.into());
    }

    Ok(())
}
