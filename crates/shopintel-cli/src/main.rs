mod fetch;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "shopintel-cli")]
#[command(about = "Shopify store insights command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch insights for one storefront and print them as JSON
    Fetch {
        /// Storefront URL, e.g. `https://shop.example.com`
        url: String,

        /// Pretty-print the JSON record
        #[arg(long)]
        pretty: bool,

        /// Per-request timeout; defaults to `SHOPINTEL_REQUEST_TIMEOUT_SECS`
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout_secs: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = shopintel_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Fetch {
            url,
            pretty,
            timeout_secs,
        } => fetch::run_fetch(&config, &url, pretty, timeout_secs).await,
    }
}

#[cfg(test)]
mod tests;
