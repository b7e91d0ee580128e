use raidtracker_types::{
    section::SectionMarker,
    statistics::{StatisticValues, Statistics},
};

use crate::options::ParseOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatisticLine {
    /// `Attacker` / `Defender` column labels.
    Label,
    Opened(String),
    Assigned { key: String, value: u64 },
    /// A numeric line that went nowhere: zero, overflowing, no open statistic,
    /// or both slots already filled.
    Dropped,
    Ignored,
}

/// Tracks the statistic that value lines are currently filling.
#[derive(Debug, Default, Clone)]
pub struct StatisticsParser {
    current: Option<String>,
}

impl StatisticsParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn feed(
        &mut self,
        statistics: &mut Statistics,
        line: &str,
        options: &ParseOptions,
    ) -> StatisticLine {
        if matches!(
            SectionMarker::from_line(line),
            Some(SectionMarker::Attacker | SectionMarker::Defender)
        ) {
            return StatisticLine::Label;
        }

        if options.is_statistic_trigger(line) {
            let key = statistic_key(line);
            tracing::debug!(statistic = %key, "Found statistic type");
            // an existing key keeps its position but starts over
            statistics.insert(key.clone(), StatisticValues::default());
            self.current = Some(key.clone());
            return StatisticLine::Opened(key);
        }

        if !line.chars().any(|c| c.is_ascii_digit()) {
            return StatisticLine::Ignored;
        }

        let digits: String = line.chars().filter(char::is_ascii_digit).collect();
        // TODO: zero is a legitimate statistic (e.g. no supply lost) and should fill its slot
        let value = match digits.parse::<u64>() {
            Ok(value) if value > 0 => value,
            _ => return StatisticLine::Dropped,
        };

        let Some(key) = self.current.as_ref() else {
            return StatisticLine::Dropped;
        };
        let Some(values) = statistics.get_mut(key) else {
            return StatisticLine::Dropped;
        };
        if !values.fill(value) {
            return StatisticLine::Dropped;
        }

        tracing::trace!(statistic = %key, value, "Set statistic value");
        StatisticLine::Assigned {
            key: key.clone(),
            value,
        }
    }
}

/// Keeps word characters and whitespace only, then trims.
pub fn statistic_key(line: &str) -> String {
    line.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}
