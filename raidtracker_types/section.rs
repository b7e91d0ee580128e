use std::fmt;

use serde::{Deserialize, Serialize};

/// A standalone marker line that opens a report section.
///
/// Markers are matched with exact, case-sensitive equality against the trimmed line.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionMarker {
    Attacker,
    Defender,
    Statistics,
    Information,
    Bounty,
}

impl SectionMarker {
    pub const ALL: [SectionMarker; 5] = [
        SectionMarker::Attacker,
        SectionMarker::Defender,
        SectionMarker::Statistics,
        SectionMarker::Information,
        SectionMarker::Bounty,
    ];

    /// Markers that must appear for a text to be accepted as a report.
    pub const REQUIRED: [SectionMarker; 3] = [
        SectionMarker::Attacker,
        SectionMarker::Defender,
        SectionMarker::Statistics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionMarker::Attacker => "Attacker",
            SectionMarker::Defender => "Defender",
            SectionMarker::Statistics => "Statistics",
            SectionMarker::Information => "Information",
            SectionMarker::Bounty => "Bounty",
        }
    }

    /// Returns the marker whose literal equals `line`, if any.
    pub fn from_line(line: &str) -> Option<Self> {
        SectionMarker::ALL
            .into_iter()
            .find(|marker| marker.as_str() == line)
    }
}

impl fmt::Display for SectionMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
