use serde::{Deserialize, Serialize};

/// The four resource kinds, in the order the game lists them.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    Lumber,
    Clay,
    Iron,
    Crop,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Lumber,
        ResourceKind::Clay,
        ResourceKind::Iron,
        ResourceKind::Crop,
    ];

    /// Position of this resource in a bounty row.
    pub fn index(&self) -> usize {
        match self {
            ResourceKind::Lumber => 0,
            ResourceKind::Clay => 1,
            ResourceKind::Iron => 2,
            ResourceKind::Crop => 3,
        }
    }
}

#[derive(Debug, Default, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceGroup(pub u64, pub u64, pub u64, pub u64);

impl ResourceGroup {
    pub const fn new(lumber: u64, clay: u64, iron: u64, crop: u64) -> Self {
        Self(lumber, clay, iron, crop)
    }

    pub fn total(&self) -> u64 {
        self.0 + self.1 + self.2 + self.3
    }

    pub fn get(&self, kind: ResourceKind) -> u64 {
        match kind {
            ResourceKind::Lumber => self.0,
            ResourceKind::Clay => self.1,
            ResourceKind::Iron => self.2,
            ResourceKind::Crop => self.3,
        }
    }

    pub fn lumber(&self) -> u64 {
        self.0
    }
    pub fn clay(&self) -> u64 {
        self.1
    }
    pub fn iron(&self) -> u64 {
        self.2
    }
    pub fn crop(&self) -> u64 {
        self.3
    }
}
