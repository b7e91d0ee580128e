use serde::{Deserialize, Serialize};

use crate::{combatant::Combatant, statistics::Statistics};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attacker_village: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defender_village: Option<String>,
    /// Kept verbatim, the date format is not interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
}

/// Structured result of parsing one attack report.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(default)]
    pub header: Header,
    #[serde(default)]
    pub attacker: Combatant,
    /// One entry per `Defender` marker, in input order.
    #[serde(default)]
    pub defenders: Vec<Combatant>,
    #[serde(default)]
    pub statistics: Statistics,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.header == Header::default()
            && self.attacker.is_empty()
            && self.defenders.is_empty()
            && self.statistics.is_empty()
    }

    /// Units lost across every defender.
    pub fn defenders_total_lost(&self) -> u64 {
        self.defenders.iter().map(Combatant::total_lost).sum()
    }
}
