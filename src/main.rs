mod bot;
mod commands;
mod config;
mod paginator;
mod tests;

use tracing_subscriber::EnvFilter;

fn init_tracing(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::Config::from_env()?;
    init_tracing(&config.log_level);

    bot::init::start_bot(config).await
}
