//! Plain-text morning report.

use std::fmt::Write;

use chrono::{Days, NaiveDate};

use gilded_rose_inventory::Item;

/// Append one day's block: header, column line, one line per item, blank line.
///
/// When `start_date` is known the header also carries the calendar date of
/// `day`. Dates past the end of the calendar are left off.
pub fn render_day(
    out: &mut impl Write,
    day: u32,
    start_date: Option<NaiveDate>,
    items: &[Item],
) -> std::fmt::Result {
    let date = start_date.and_then(|start| start.checked_add_days(Days::new(u64::from(day))));

    match date {
        Some(date) => writeln!(out, "-------- day {day} -------- ({})", date.format("%Y-%m-%d"))?,
        None => writeln!(out, "-------- day {day} --------")?,
    }
    writeln!(out, "name, sellIn, quality")?;
    for item in items {
        writeln!(out, "{item}")?;
    }
    writeln!(out)
}
