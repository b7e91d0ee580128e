use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Statistic name to values, in the order the statistics were first seen.
pub type Statistics = IndexMap<String, StatisticValues>;

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attacker: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defender: Option<u64>,
}

impl StatisticValues {
    /// Fills the first free slot, attacker before defender.
    ///
    /// Returns `false` when both slots are already taken and the value was dropped.
    pub fn fill(&mut self, value: u64) -> bool {
        if self.attacker.is_none() {
            self.attacker = Some(value);
        } else if self.defender.is_none() {
            self.defender = Some(value);
        } else {
            return false;
        }
        true
    }

    pub fn is_complete(&self) -> bool {
        self.attacker.is_some() && self.defender.is_some()
    }
}
