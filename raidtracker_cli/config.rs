use std::{env, path::PathBuf};

use dotenvy::dotenv;
use raidtracker_parser::options::{
    DEFAULT_MIN_UNIT_COLUMNS, DEFAULT_STATISTIC_TRIGGERS, ParseOptions,
};

pub struct Config {
    pub parse_options: ParseOptions,
    pub log_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_source(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Malformed values fall back to defaults.
    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let min_unit_columns = match lookup("RAIDTRACKER_MIN_UNIT_COLUMNS") {
            Some(val) => val
                .trim()
                .parse::<usize>()
                .unwrap_or(DEFAULT_MIN_UNIT_COLUMNS)
                .max(1),
            None => DEFAULT_MIN_UNIT_COLUMNS,
        };

        let statistic_triggers: Vec<String> = match lookup("RAIDTRACKER_STATISTIC_TRIGGERS") {
            Some(val) => val
                .split(',')
                .map(str::trim)
                .filter(|trigger| !trigger.is_empty())
                .map(str::to_string)
                .collect(),
            None => vec![],
        };

        let log_dir = lookup("RAIDTRACKER_LOG_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let mut parse_options = ParseOptions::default().with_min_unit_columns(min_unit_columns);
        if !statistic_triggers.is_empty() {
            parse_options = parse_options.with_statistic_triggers(statistic_triggers);
        }

        Self {
            parse_options,
            log_dir,
        }
    }
}
