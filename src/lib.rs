pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::{GooglePlacesClient, YelpClient};
pub use config::LeadsConfig;
pub use crate::core::{
    collector::LeadCollector,
    engine::{LeadEngine, RunSummary},
    export::export_csv,
};
pub use domain::model::{LeadRecord, LeadSource, LeadValue};
pub use utils::error::{LeadsError, Result};
