//! Command-line driver for the nightly aging simulation.
//!
//! Builds a stock list, ages it one day at a time and prints what the shop
//! looks like each morning. The aging rules live in `gilded-rose-inventory`;
//! nothing here changes how an item ages.

pub mod config;
pub mod error;
pub mod fixture;
pub mod report;

pub use config::Config;
pub use error::{CliError, CliResult};

use std::io::Write;

use gilded_rose_inventory::Inventory;

/// Run a simulation and write the report to `out`.
pub fn run(config: &Config, out: &mut impl Write) -> CliResult<()> {
    let items = match &config.items {
        Some(path) => fixture::load_items(path)?,
        None => fixture::default_stock(),
    };

    let source = match &config.items {
        Some(path) => path.display().to_string(),
        None => "built-in".to_string(),
    };
    tracing::info!(items = items.len(), days = config.days, %source, "starting simulation");

    let mut inventory = Inventory::new(items);
    let mut text = String::new();

    for day in 0..=config.days {
        if day > 0 {
            inventory.advance_one_day();
        }
        report::render_day(&mut text, day, config.start_date, inventory.items())?;
    }

    out.write_all(text.as_bytes())?;
    out.flush()?;

    tracing::info!(days = config.days, "simulation finished");
    Ok(())
}
