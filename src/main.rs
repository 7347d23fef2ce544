use chef_leads::utils::{logger, validation::Validate};
use chef_leads::{CliArgs, LeadEngine};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);
    tracing::info!("Starting chef-leads");

    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // Missing credentials or endpoints only cost that provider's results.
    if config.validate().is_err() {
        for problem in config.problems() {
            tracing::warn!("⚠️ {}", problem);
        }
    }

    let engine = LeadEngine::from_config(config);

    match engine.run().await {
        Ok(summary) => {
            tracing::info!(
                "✅ {} leads ({} Google Places, {} Yelp)",
                summary.records,
                summary.google_places,
                summary.yelp
            );
            println!(
                "Scraped {} chef leads and saved to {}",
                summary.records, summary.output_path
            );
        }
        Err(e) => {
            tracing::error!("❌ Run failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }

    Ok(())
}
