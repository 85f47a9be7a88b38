//! Inventory domain module: shop stock and its nightly aging.
//!
//! This crate contains the aging rules, implemented purely as deterministic
//! domain logic (no IO, no storage, no clock).

pub mod aging;
pub mod item;
pub mod stock;

pub use aging::{advance_one_day, next_state};
pub use item::{Item, ItemCategory, ItemState};
pub use stock::Inventory;

pub use gilded_rose_core::{Quality, SellIn};
