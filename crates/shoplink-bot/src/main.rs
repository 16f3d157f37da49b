mod command;
mod discord;
mod orchestrator;
mod render;
mod selection;

use clap::{Parser, Subcommand};
use shoplink_scraper::{classify, StorefrontClient};
use tracing_subscriber::EnvFilter;

use crate::orchestrator::{InteractionSettings, Orchestrator};

#[derive(Debug, Parser)]
#[command(name = "shoplink-bot")]
#[command(about = "Shopify storefront lookup bot")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Connect to Discord and answer `s <url>` commands (default).
    Run,
    /// Look up one product or collection link and print it as JSON.
    Lookup {
        /// Storefront product or collection URL.
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_bot().await,
        Commands::Lookup { url } => lookup_once(&url).await,
    }
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

async fn run_bot() -> anyhow::Result<()> {
    let config = shoplink_core::load_app_config()?;
    init_tracing(&config.log_level)?;
    tracing::info!(?config, "starting shoplink bot");

    let client = StorefrontClient::from_config(&config.http)?;
    let orchestrator = Orchestrator::new(client, InteractionSettings::from_config(&config));

    discord::run(&config.discord_token, config.command_prefix.clone(), orchestrator).await
}

async fn lookup_once(url: &str) -> anyhow::Result<()> {
    let http = shoplink_core::load_http_config()?;
    init_tracing("warn")?;

    let client = StorefrontClient::from_config(&http)?;
    let Some(found) = client.lookup(&classify(url)).await? else {
        anyhow::bail!("\"{url}\" is not a Shopify product or collection link");
    };

    let rendered = serde_json::to_string_pretty(&found)?;
    println!("{rendered}");
    Ok(())
}
