use once_cell::sync::Lazy;
use regex::Regex;

use raidtracker_types::combatant::Combatant;

pub const FROM_VILLAGE: &str = "from village";

static IDENTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(.+?)\]\s+(.+?)\s+from village\s+(.+)$").expect("valid identity regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub tribe: String,
    pub player: String,
    pub village: String,
}

/// Parses a `[Tribe] Player from village Village` line.
pub fn parse_identity(line: &str) -> Option<Identity> {
    let caps = IDENTITY_RE.captures(line)?;
    Some(Identity {
        tribe: caps[1].to_string(),
        player: caps[2].to_string(),
        village: caps[3].to_string(),
    })
}

/// Fills the combatant identity when `line` is a well-formed "from village" line.
///
/// Returns `false` for any other line, leaving the combatant untouched.
pub fn apply_identity(combatant: &mut Combatant, line: &str) -> bool {
    if !line.contains(FROM_VILLAGE) {
        return false;
    }
    let Some(identity) = parse_identity(line) else {
        tracing::trace!(line, "Malformed combatant line");
        return false;
    };

    tracing::debug!(
        player = %identity.player,
        village = %identity.village,
        "Parsed combatant"
    );
    combatant.tribe = Some(identity.tribe);
    combatant.player = Some(identity.player);
    combatant.village = Some(identity.village);
    true
}
