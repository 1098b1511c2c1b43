//! Address Book - demo entry point
//!
//! Loads configuration, seeds a model with sample data and prints the
//! displayed person list. Parsing user input and saving to disk are handled by
//! other layers.

use address_book::commands::{Command, ListCommand};
use address_book::models::sample_data::sample_address_book;
use address_book::{Config, Model, ModelManager};
use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut model = ModelManager::new(sample_address_book()?, config.user_prefs());
    info!(
        "Using address book file: {}",
        model.address_book_file_path().display()
    );

    let result = ListCommand.execute(&mut model)?;
    println!("{}", result);
    for person in model.filtered_person_list().iter() {
        println!("  {}", person);
    }

    Ok(())
}
