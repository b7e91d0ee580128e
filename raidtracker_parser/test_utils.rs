//! Builders for attack report text, shaped like what the game client lets players copy.

pub const GAUL_UNITS: [&str; 10] = [
    "Phalanx",
    "Swordsman",
    "Pathfinder",
    "Theutates Thunder",
    "Druidrider",
    "Haeduan",
    "Ram",
    "Trebuchet",
    "Chieftain",
    "Settler",
];

pub const TEUTON_UNITS: [&str; 10] = [
    "Maceman",
    "Spearman",
    "Axeman",
    "Scout",
    "Paladin",
    "Teutonic Knight",
    "Ram",
    "Catapult",
    "Chief",
    "Settler",
];

/// One column of a unit table: name, pre-battle count, losses.
pub type UnitColumn<'a> = (&'a str, u32, u32);

/// Zips ten unit names with their counts and losses.
pub fn troop_columns<'a>(
    names: &[&'a str; 10],
    initial: [u32; 10],
    lost: [u32; 10],
) -> Vec<UnitColumn<'a>> {
    names
        .iter()
        .zip(initial)
        .zip(lost)
        .map(|((name, initial), lost)| (*name, initial, lost))
        .collect()
}

#[derive(Default, Clone)]
pub struct CombatantFactoryOptions<'a> {
    pub tribe: Option<&'a str>,
    pub player: Option<&'a str>,
    pub village: Option<&'a str>,
    /// `Some(vec![])` leaves the unit table out.
    pub units: Option<Vec<UnitColumn<'a>>>,
}

#[derive(Default, Clone)]
pub struct ReportTextFactoryOptions<'a> {
    pub attacker_village: Option<&'a str>,
    pub defender_village: Option<&'a str>,
    pub date_time: Option<&'a str>,
    pub attacker: Option<CombatantFactoryOptions<'a>>,
    pub information: Option<Vec<&'a str>>,
    /// Resource amounts, then the carried total and the capacity.
    pub bounty: Option<(Vec<u64>, u64, u64)>,
    pub defenders: Option<Vec<CombatantFactoryOptions<'a>>>,
    /// Statistic name, attacker value, defender value.
    pub statistics: Option<Vec<(&'a str, u64, u64)>>,
}

pub fn combatant_lines(
    options: CombatantFactoryOptions,
    defaults: (&str, &str, &str),
) -> Vec<String> {
    let tribe = options.tribe.unwrap_or(defaults.0);
    let player = options.player.unwrap_or(defaults.1);
    let village = options.village.unwrap_or(defaults.2);

    let mut lines = vec![format!("[{tribe}] {player} from village {village}")];
    let units = options.units.unwrap_or_default();
    if !units.is_empty() {
        lines.push(join_tabs(units.iter().map(|(name, _, _)| name.to_string())));
        lines.push(join_tabs(units.iter().map(|(_, initial, _)| initial.to_string())));
        lines.push(join_tabs(units.iter().map(|(_, _, lost)| lost.to_string())));
    }
    lines
}

/// Builds the text of a full attack report.
///
/// Defaults to a Gaul attacker against one Teuton defender, with ten-column unit tables
/// and a single `Combat strength` statistic.
pub fn report_text_factory(options: ReportTextFactoryOptions) -> String {
    let attacker_village = options.attacker_village.unwrap_or("Northwatch");
    let defender_village = options.defender_village.unwrap_or("Stonebridge");
    let date_time = options.date_time.unwrap_or("12.05.2024 14:23:10");

    let mut lines = vec![
        format!("{attacker_village} attacks {defender_village}"),
        date_time.to_string(),
        "Attacker".to_string(),
    ];

    let attacker = options.attacker.unwrap_or_else(|| CombatantFactoryOptions {
        units: Some(troop_columns(
            &GAUL_UNITS,
            [100, 50, 0, 20, 0, 0, 0, 0, 0, 0],
            [10, 5, 0, 20, 0, 0, 0, 0, 0, 0],
        )),
        ..Default::default()
    });
    lines.extend(combatant_lines(attacker, ("Gaul", "Hero", attacker_village)));

    if let Some(information) = options.information {
        lines.push("Information".to_string());
        lines.extend(information.into_iter().map(str::to_string));
    }

    if let Some((resources, total, capacity)) = options.bounty {
        lines.push("Bounty".to_string());
        lines.extend(resources.iter().map(u64::to_string));
        lines.push(format!("{total}/{capacity}"));
    }

    let defenders = options.defenders.unwrap_or_else(|| {
        vec![CombatantFactoryOptions {
            units: Some(troop_columns(
                &TEUTON_UNITS,
                [80, 20, 0, 0, 0, 0, 0, 0, 0, 0],
                [5, 2, 0, 0, 0, 0, 0, 0, 0, 0],
            )),
            ..Default::default()
        }]
    });
    for defender in defenders {
        lines.push("Defender".to_string());
        lines.extend(combatant_lines(defender, ("Teuton", "Boss", defender_village)));
    }

    let statistics = options
        .statistics
        .unwrap_or_else(|| vec![("Combat strength", 500000, 300000)]);
    lines.push("Statistics".to_string());
    lines.push("Attacker".to_string());
    lines.push("Defender".to_string());
    for (name, attacker_value, defender_value) in statistics {
        lines.push(name.to_string());
        lines.push(attacker_value.to_string());
        lines.push(defender_value.to_string());
    }

    lines.join("\n")
}

fn join_tabs(cells: impl Iterator<Item = String>) -> String {
    cells.collect::<Vec<_>>().join("\t")
}
