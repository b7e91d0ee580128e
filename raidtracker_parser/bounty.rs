use once_cell::sync::Lazy;
use regex::Regex;

use raidtracker_types::bounty::Bounty;

static HAUL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)/(\d+)").expect("valid haul regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BountyLine {
    /// A bare amount of one resource.
    Resource(u64),
    /// The carried total over the army's carry capacity.
    Haul { total: u64, capacity: u64 },
    Ignored,
}

pub fn classify(line: &str) -> BountyLine {
    if !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit()) {
        return match line.parse() {
            Ok(amount) => BountyLine::Resource(amount),
            Err(_) => BountyLine::Ignored,
        };
    }

    if line.contains('/') {
        // the game decorates the haul with icons and thousands separators
        let cleaned: String = line
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '/')
            .collect();
        if let Some(caps) = HAUL_RE.captures(&cleaned) {
            if let (Ok(total), Ok(capacity)) = (caps[1].parse(), caps[2].parse()) {
                return BountyLine::Haul { total, capacity };
            }
        }
    }

    BountyLine::Ignored
}

/// Applies a line from the `Bounty` section. A later haul line overwrites an earlier one.
pub fn apply_bounty_line(bounty: &mut Bounty, line: &str) -> BountyLine {
    let parsed = classify(line);
    match parsed {
        BountyLine::Resource(amount) => bounty.resources.push(amount),
        BountyLine::Haul { total, capacity } => {
            tracing::debug!(total, capacity, "Parsed bounty total/capacity");
            bounty.total = Some(total);
            bounty.capacity = Some(capacity);
        }
        BountyLine::Ignored => {}
    }
    parsed
}
