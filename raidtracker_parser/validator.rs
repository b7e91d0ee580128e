use std::collections::HashSet;

use raidtracker_types::{errors::ReportError, section::SectionMarker};

/// Checks that the text looks like an attack report: every required marker line
/// (`Attacker`, `Defender`, `Statistics`) appears at least once, in any order.
///
/// Counts, ordering and the content of each section are not checked.
pub fn check(text: &str) -> Result<(), ReportError> {
    if text.trim().is_empty() {
        return Err(ReportError::EmptyInput);
    }

    let lines: HashSet<&str> = text.lines().map(str::trim).collect();
    let missing: Vec<SectionMarker> = SectionMarker::REQUIRED
        .into_iter()
        .filter(|marker| !lines.contains(marker.as_str()))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ReportError::MissingSections(missing))
    }
}

pub fn validate(text: &str) -> bool {
    check(text).is_ok()
}
