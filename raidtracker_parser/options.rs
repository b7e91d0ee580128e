use serde::Deserialize;

/// Default number of tab-separated fields a unit header line needs.
pub const DEFAULT_MIN_UNIT_COLUMNS: usize = 6;

/// Substrings that open a statistic in the `Statistics` section.
pub const DEFAULT_STATISTIC_TRIGGERS: [&str; 4] = [
    "Combat strength",
    "Supply before",
    "Supply lost",
    "Resources lost",
];

/// Grammar knobs for the parser.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// A tab-delimited line without digits is a unit header only when it has at least
    /// this many fields.
    pub min_unit_columns: usize,
    pub statistic_triggers: Vec<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            min_unit_columns: DEFAULT_MIN_UNIT_COLUMNS,
            statistic_triggers: DEFAULT_STATISTIC_TRIGGERS
                .iter()
                .map(|trigger| trigger.to_string())
                .collect(),
        }
    }
}

impl ParseOptions {
    pub fn with_min_unit_columns(mut self, columns: usize) -> Self {
        self.min_unit_columns = columns.max(1);
        self
    }

    pub fn with_statistic_triggers<I, S>(mut self, triggers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.statistic_triggers = triggers.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_statistic_trigger(&self, line: &str) -> bool {
        self.statistic_triggers
            .iter()
            .any(|trigger| line.contains(trigger.as_str()))
    }
}
