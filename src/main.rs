use clap::Parser;
use tracing::info;

use sportlink_client::cli::{self, Cli};
use sportlink_client::config::AppConfig;
use sportlink_client::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if let Some(api_url) = cli.api_url.clone() {
        config.api_base_url = api_url;
    }

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .init();
    info!("Configuration: {}", config.get_config_info());

    let state = AppState::new(config)?;
    cli::run(cli.command, &state).await
}
