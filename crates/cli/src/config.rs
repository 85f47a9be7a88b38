use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use gilded_rose_observability::LogFormat;

/// Run configuration, from flags or `GILDED_ROSE_*` environment variables.
#[derive(Debug, Clone, Parser)]
#[command(name = "gilded-rose")]
#[command(about = "Simulate nightly aging of a shop's stock.")]
pub struct Config {
    /// Number of nights to simulate
    #[arg(short, long, env = "GILDED_ROSE_DAYS", default_value_t = 2)]
    pub days: u32,

    /// JSON file holding an array of {"name", "sell_in", "quality"} items
    #[arg(short, long, env = "GILDED_ROSE_ITEMS")]
    pub items: Option<PathBuf>,

    /// Calendar date of day 0, shown next to each day header
    #[arg(long, env = "GILDED_ROSE_START_DATE")]
    pub start_date: Option<NaiveDate>,

    /// Log output format (json or pretty)
    #[arg(long, env = "GILDED_ROSE_LOG_FORMAT", default_value = "json")]
    pub log_format: LogFormat,
}

impl Config {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_two_days_of_built_in_stock() {
        let config = Config::try_parse_from(["gilded-rose"]).unwrap();
        assert_eq!(config.days, 2);
        assert!(config.items.is_none());
        assert!(config.start_date.is_none());
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn parses_all_flags() {
        let config = Config::try_parse_from([
            "gilded-rose",
            "--days",
            "30",
            "--items",
            "stock.json",
            "--start-date",
            "2026-10-19",
            "--log-format",
            "pretty",
        ])
        .unwrap();

        assert_eq!(config.days, 30);
        assert_eq!(config.items, Some(PathBuf::from("stock.json")));
        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2026, 10, 19));
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn rejects_negative_days() {
        assert!(Config::try_parse_from(["gilded-rose", "--days", "-1"]).is_err());
    }

    #[test]
    fn rejects_unknown_log_format() {
        assert!(Config::try_parse_from(["gilded-rose", "--log-format", "xml"]).is_err());
    }
}
