//! Where the stock list comes from.

use std::path::Path;

use gilded_rose_core::DomainError;
use gilded_rose_inventory::Item;

use crate::error::{CliError, CliResult};

/// The shop's standard stock, used when no item file is given.
pub fn default_stock() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new("Aged Brie", 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
        Item::new("Sulfuras, Hand of Ragnaros", -1, 80),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 10, 49),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}

/// Parse a JSON array of items.
///
/// Values are taken as given (the aging rules clamp them); only blank names
/// are refused, since a nameless line of stock cannot be reported.
pub fn parse_items(json: &str) -> CliResult<Vec<Item>> {
    let items: Vec<Item> = serde_json::from_str(json)?;

    if let Some(index) = items.iter().position(|item| item.name().trim().is_empty()) {
        return Err(DomainError::validation(format!("item #{index} has an empty name")).into());
    }

    Ok(items)
}

/// Read and parse an item file.
pub fn load_items(path: &Path) -> CliResult<Vec<Item>> {
    let json = std::fs::read_to_string(path).map_err(|source| CliError::ReadItems {
        path: path.to_path_buf(),
        source,
    })?;
    parse_items(&json)
}
