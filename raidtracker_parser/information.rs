use raidtracker_types::combatant::Combatant;

/// Appends a line from the `Information` section to the attacker, verbatim.
pub fn append_information(attacker: &mut Combatant, line: &str) {
    attacker
        .information
        .get_or_insert_with(Vec::new)
        .push(line.to_string());
}
