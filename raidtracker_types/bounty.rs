use serde::{Deserialize, Serialize};

use crate::common::{ResourceGroup, ResourceKind};

/// Resources carried home by the attacker.
///
/// The report lists the amounts without labels. They are read by position, assuming the
/// game's usual lumber, clay, iron, crop order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounty {
    #[serde(default)]
    pub resources: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u64>,
}

impl Bounty {
    pub fn resource(&self, kind: ResourceKind) -> Option<u64> {
        self.resources.get(kind.index()).copied()
    }

    pub fn resources_sum(&self) -> u64 {
        self.resources.iter().sum()
    }

    /// Returns the amounts as a group, only when exactly four were listed.
    pub fn resource_group(&self) -> Option<ResourceGroup> {
        match self.resources.as_slice() {
            [lumber, clay, iron, crop] => Some(ResourceGroup::new(*lumber, *clay, *iron, *crop)),
            _ => None,
        }
    }
}
