//! PubMed fetcher - entry point.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pubmed_fetcher::{Config, EntrezClient, pipeline};

#[derive(Parser, Debug)]
#[command(name = "pubmed-fetcher")]
#[command(about = "Fetch research papers from PubMed and flag industry-affiliated authors")]
#[command(version)]
struct Cli {
    /// Search query for PubMed
    query: String,

    /// Output file name
    #[arg(short, long, default_value = "papers.csv")]
    file: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// NCBI API key (optional, raises request quotas)
    #[arg(long, env = "PUBMED_API_KEY")]
    api_key: Option<String>,
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        query = %cli.query,
        "starting PubMed fetch"
    );

    let config = Config::new(cli.api_key.filter(|k| !k.is_empty()));
    let client = EntrezClient::new(config)?;

    pipeline::run(&client, &cli.query, &cli.file).await;

    Ok(())
}
