//! Nightly aging rules.
//!
//! [`next_state`] is the pure rule: it consumes one day's [`ItemState`] and
//! produces the next. [`advance_one_day`] applies it to every item of a stock
//! list the caller lends out exclusively for the duration of the call.

use gilded_rose_core::{Quality, SellIn};

use crate::item::{Item, ItemCategory, ItemState};

/// Compute an item's state one day later.
///
/// Total over every input: unknown names were already mapped to
/// [`ItemCategory::Ordinary`], and out-of-range quality is clamped rather
/// than rejected (legendary stock excepted, which is returned untouched).
pub fn next_state(category: ItemCategory, state: ItemState) -> ItemState {
    if category == ItemCategory::Legendary {
        return state;
    }

    let quality = match category {
        ItemCategory::Ordinary => state.quality.decreased_by(1),
        ItemCategory::AgingImproves => state.quality.increased_by(1),
        ItemCategory::EventTicket => state.quality.increased_by(event_ticket_gain(state.sell_in)),
        ItemCategory::Legendary => state.quality,
    }
    .clamped();

    let sell_in = state.sell_in.next_day();
    if !sell_in.is_past() {
        return ItemState { sell_in, quality };
    }

    let quality = match category {
        ItemCategory::Ordinary => quality.decreased_by(1),
        ItemCategory::AgingImproves => quality.increased_by(1),
        ItemCategory::EventTicket => Quality::MIN,
        ItemCategory::Legendary => quality,
    }
    .clamped();

    ItemState { sell_in, quality }
}

/// Daily gain of an event ticket, judged on the countdown before it ticks.
fn event_ticket_gain(sell_in: SellIn) -> i32 {
    match sell_in.days() {
        d if d > 10 => 1,
        d if d > 5 => 2,
        _ => 3,
    }
}

/// Advance every item by one day, in place.
///
/// The `&mut` borrow is the ownership contract: the caller keeps the items
/// but cannot observe or touch them until the update has finished. Item
/// count, order and names are never changed. An empty slice is a no-op.
pub fn advance_one_day(items: &mut [Item]) {
    for item in items.iter_mut() {
        let before = item.state();
        let after = next_state(item.category(), before);
        item.set_state(after);

        tracing::trace!(
            name = item.name(),
            category = %item.category(),
            sell_in = after.sell_in.days(),
            quality = after.quality.value(),
            quality_delta = after.quality.value().saturating_sub(before.quality.value()),
            "item aged"
        );
    }

    tracing::debug!(items = items.len(), "stock advanced one day");
}
