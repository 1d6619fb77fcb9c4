mod api;
mod config;
mod error;
mod model;
mod output;
mod prompt;

use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use log::{error, info};

use config::Config;
use model::CapitalLocator;

/// Ask a local Ollama model for the capital of a country and print its name
/// and coordinates as JSON.
#[derive(Debug, Parser)]
#[command(name = "capital-locator", version)]
struct Cli {
    /// Country name, sent to the model as typed
    country: String,
}

#[tokio::main]
async fn main() {
    // Arguments first: a missing country must fail before anything else happens.
    let cli = Cli::parse();

    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    match run(&cli.country).await {
        Ok(text) => println!("{}", text),
        Err(e) => {
            error!("Capital lookup failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn run(country: &str) -> Result<String> {
    let config = Config::from_env().context("Failed to read configuration")?;
    info!("Starting capital lookup with model {}", config.model);

    let locator = CapitalLocator::new(&config)?;
    let reply = locator.locate(country).await?;

    output::to_pretty_json(&reply).context("Failed to render result")
}
