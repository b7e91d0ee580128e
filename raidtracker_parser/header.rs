use once_cell::sync::Lazy;
use regex::Regex;

use raidtracker_types::report::Header;

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s+attacks\s+(.+)$").expect("valid title regex"));

/// Splits a `<village> attacks <village>` title line.
pub fn parse_title(line: &str) -> Option<(String, String)> {
    let caps = TITLE_RE.captures(line)?;
    Some((caps[1].to_string(), caps[2].to_string()))
}

/// Applies one of the first two report lines to the header.
///
/// Line 0 is the title; a title that does not match leaves both villages unset.
/// Line 1 is stored verbatim as the date.
pub fn apply_header_line(header: &mut Header, index: usize, line: &str) {
    match index {
        0 => {
            if let Some((attacker, defender)) = parse_title(line) {
                tracing::debug!(%attacker, %defender, "Parsed report title");
                header.attacker_village = Some(attacker);
                header.defender_village = Some(defender);
            }
        }
        1 => header.date_time = Some(line.to_string()),
        _ => {}
    }
}
