use serde::{Deserialize, Serialize};

use gilded_rose_core::{Quality, SellIn};

/// Rule family an item ages under.
///
/// Resolved once from the item name when the item is constructed. A new
/// family (e.g. conjured goods) is added here and then handled in
/// [`crate::aging::next_state`]; the exhaustive match there makes a missing
/// rule a compile error rather than a silent fallthrough.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// Loses quality every day, twice as fast once the sell-by date passes.
    Ordinary,
    /// Gains quality every day, twice as fast once the sell-by date passes.
    AgingImproves,
    /// Never sold, never ages.
    Legendary,
    /// Gains quality faster as the event nears, worthless once it has passed.
    EventTicket,
}

impl ItemCategory {
    pub const LEGENDARY_NAME: &'static str = "Sulfuras, Hand of Ragnaros";
    pub const AGING_IMPROVES_NAME: &'static str = "Aged Brie";
    pub const EVENT_TICKET_NAME: &'static str = "Backstage passes to a TAFKAL80ETC concert";

    /// Classify an item by exact, case-sensitive name. Unknown names are ordinary.
    pub fn classify(name: &str) -> Self {
        match name {
            Self::LEGENDARY_NAME => ItemCategory::Legendary,
            Self::AGING_IMPROVES_NAME => ItemCategory::AgingImproves,
            Self::EVENT_TICKET_NAME => ItemCategory::EventTicket,
            _ => ItemCategory::Ordinary,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Ordinary => "ordinary",
            ItemCategory::AgingImproves => "aging_improves",
            ItemCategory::Legendary => "legendary",
            ItemCategory::EventTicket => "event_ticket",
        }
    }
}

impl core::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The part of an item that changes from one day to the next.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemState {
    pub sell_in: SellIn,
    pub quality: Quality,
}

impl ItemState {
    pub fn new(sell_in: impl Into<SellIn>, quality: impl Into<Quality>) -> Self {
        Self {
            sell_in: sell_in.into(),
            quality: quality.into(),
        }
    }
}

/// A tracked line of stock.
///
/// The name is fixed for the item's lifetime and only used to pick the
/// category. Items serialize as `{ "name", "sell_in", "quality" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    name: String,
    category: ItemCategory,
    state: ItemState,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: impl Into<SellIn>, quality: impl Into<Quality>) -> Self {
        let name = name.into();
        let category = ItemCategory::classify(&name);
        Self {
            name,
            category,
            state: ItemState::new(sell_in, quality),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    pub fn state(&self) -> ItemState {
        self.state
    }

    pub fn sell_in(&self) -> SellIn {
        self.state.sell_in
    }

    pub fn quality(&self) -> Quality {
        self.state.quality
    }

    /// Replace the day-to-day state. Only the aging engine moves items forward.
    pub(crate) fn set_state(&mut self, state: ItemState) {
        self.state = state;
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.state.sell_in, self.state.quality)
    }
}

/// Wire shape of an item; the category is derived, never stored.
#[derive(Serialize, Deserialize)]
struct ItemRecord {
    name: String,
    sell_in: SellIn,
    quality: Quality,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::new(record.name, record.sell_in, record.quality)
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        ItemRecord {
            name: item.name,
            sell_in: item.state.sell_in,
            quality: item.state.quality,
        }
    }
}
