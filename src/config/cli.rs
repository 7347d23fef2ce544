use crate::config::{LeadsConfig, LeadsFile};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "chef-leads")]
#[command(about = "Collect private chef and catering leads from Google Places and Yelp")]
pub struct CliArgs {
    #[arg(long, help = "TOML file overriding endpoints, search terms, locations or output")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "CSV file to write (overwritten)")]
    pub output: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliArgs {
    /// Environment first, then the overrides file, then `--output`.
    pub fn load_config(&self) -> Result<LeadsConfig> {
        self.load_config_with(LeadsConfig::from_env())
    }

    /// Applies the overrides file and `--output` on top of `base`.
    pub fn load_config_with(&self, base: LeadsConfig) -> Result<LeadsConfig> {
        let mut config = base;

        if let Some(path) = &self.config {
            tracing::debug!("Loading overrides from {}", path.display());
            config.apply_file(LeadsFile::from_file(path)?);
        }

        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }

        Ok(config)
    }
}
