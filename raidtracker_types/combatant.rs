use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::bounty::Bounty;

/// Unit name to casualties, in the column order of the report.
pub type UnitTable = IndexMap<String, UnitCasualties>;

/// Pre-battle count and losses of one unit type.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCasualties {
    pub initial: u32,
    pub lost: u32,
    pub remaining: u32,
}

impl UnitCasualties {
    /// Builds an entry, deriving `remaining` as `initial - lost` floored at zero.
    pub fn new(initial: u32, lost: u32) -> Self {
        Self {
            initial,
            lost,
            remaining: initial.saturating_sub(lost),
        }
    }
}

/// One side of the battle: the attacker or a single defender.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combatant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tribe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub village: Option<String>,
    #[serde(default)]
    pub units: UnitTable,
    /// Free-form information lines. Attacker only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub information: Option<Vec<String>>,
    /// Attacker only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounty: Option<Bounty>,
}

impl Combatant {
    pub fn has_identity(&self) -> bool {
        self.tribe.is_some() && self.player.is_some() && self.village.is_some()
    }

    pub fn total_initial(&self) -> u64 {
        self.units.values().map(|u| u64::from(u.initial)).sum()
    }

    pub fn total_lost(&self) -> u64 {
        self.units.values().map(|u| u64::from(u.lost)).sum()
    }

    pub fn total_remaining(&self) -> u64 {
        self.units.values().map(|u| u64::from(u.remaining)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tribe.is_none()
            && self.player.is_none()
            && self.village.is_none()
            && self.units.is_empty()
            && self.information.is_none()
            && self.bounty.is_none()
    }
}
