use raidtracker_parser::{
    ParseOptions, parse, parse_with,
    test_utils::{
        CombatantFactoryOptions, GAUL_UNITS, ReportTextFactoryOptions, TEUTON_UNITS,
        report_text_factory, troop_columns,
    },
    validate,
};
use raidtracker_types::{
    combatant::UnitCasualties,
    common::{ResourceGroup, ResourceKind},
    statistics::StatisticValues,
};

const TWO_COLUMN_REPORT: &str = "VillageA attacks VillageB
12.05.2024 14:23:10
Attacker
[Gaul] Hero from village VillageA
Swordsman\tPhalanx
100\t50
10\t5
Defender
[Teuton] Boss from village VillageB
Swordsman\tPhalanx
80\t20
5\t2
Statistics
Attacker
Defender
Combat strength
500000
300000
";

#[test]
fn test_two_column_report_end_to_end() {
    let options = ParseOptions::default().with_min_unit_columns(2);
    assert!(validate(TWO_COLUMN_REPORT));

    let report = parse_with(TWO_COLUMN_REPORT, &options);

    assert_eq!(report.header.attacker_village.as_deref(), Some("VillageA"));
    assert_eq!(report.header.defender_village.as_deref(), Some("VillageB"));
    assert_eq!(
        report.header.date_time.as_deref(),
        Some("12.05.2024 14:23:10")
    );

    assert_eq!(report.attacker.tribe.as_deref(), Some("Gaul"));
    assert_eq!(report.attacker.player.as_deref(), Some("Hero"));
    assert_eq!(report.attacker.village.as_deref(), Some("VillageA"));
    assert_eq!(
        report.attacker.units["Swordsman"],
        UnitCasualties {
            initial: 100,
            lost: 10,
            remaining: 90
        }
    );
    assert_eq!(
        report.attacker.units["Phalanx"],
        UnitCasualties {
            initial: 50,
            lost: 5,
            remaining: 45
        }
    );

    assert_eq!(report.defenders.len(), 1);
    let defender = &report.defenders[0];
    assert_eq!(defender.tribe.as_deref(), Some("Teuton"));
    assert_eq!(defender.player.as_deref(), Some("Boss"));
    assert_eq!(defender.village.as_deref(), Some("VillageB"));
    assert_eq!(defender.units["Swordsman"], UnitCasualties::new(80, 5));
    assert_eq!(defender.units["Phalanx"], UnitCasualties::new(20, 2));
    assert_eq!(defender.units["Phalanx"].remaining, 18);

    assert_eq!(report.statistics.len(), 1);
    assert_eq!(
        report.statistics["Combat strength"],
        StatisticValues {
            attacker: Some(500000),
            defender: Some(300000)
        }
    );
    assert_eq!(report.attacker.information, None);
    assert_eq!(report.attacker.bounty, None);
}

#[test]
fn test_two_column_tables_need_relaxed_options() {
    let report = parse(TWO_COLUMN_REPORT);

    assert!(report.attacker.units.is_empty());
    assert!(report.defenders[0].units.is_empty());
    assert_eq!(report.attacker.player.as_deref(), Some("Hero"));
    assert_eq!(report.statistics["Combat strength"].defender, Some(300000));
}

#[test]
fn test_full_report_with_information_and_bounty() {
    let text = report_text_factory(ReportTextFactoryOptions {
        information: Some(vec!["Your hero gained 40 XP", "The wall was damaged"]),
        bounty: Some((vec![1200, 900, 400, 150], 2650, 3000)),
        statistics: Some(vec![
            ("Combat strength", 12000, 8000),
            ("Supply before", 400, 150),
            ("Supply lost", 60, 45),
        ]),
        ..Default::default()
    });
    assert!(validate(&text));

    let report = parse(&text);

    assert_eq!(report.header.attacker_village.as_deref(), Some("Northwatch"));
    assert_eq!(report.attacker.units.len(), 10);
    assert_eq!(report.attacker.units["Phalanx"], UnitCasualties::new(100, 10));
    assert_eq!(
        report.attacker.units["Theutates Thunder"],
        UnitCasualties::new(20, 20)
    );
    assert_eq!(report.attacker.total_lost(), 35);

    assert_eq!(
        report.attacker.information,
        Some(vec![
            "Your hero gained 40 XP".to_string(),
            "The wall was damaged".to_string()
        ])
    );

    let bounty = report.attacker.bounty.as_ref().unwrap();
    assert_eq!(bounty.resources, vec![1200, 900, 400, 150]);
    assert_eq!(bounty.total, Some(2650));
    assert_eq!(bounty.capacity, Some(3000));
    assert_eq!(bounty.resource(ResourceKind::Clay), Some(900));
    assert_eq!(
        bounty.resource_group(),
        Some(ResourceGroup::new(1200, 900, 400, 150))
    );

    assert_eq!(report.defenders.len(), 1);
    assert_eq!(report.defenders[0].units["Maceman"], UnitCasualties::new(80, 5));
    assert_eq!(report.defenders[0].bounty, None);
    assert_eq!(report.defenders[0].information, None);

    assert_eq!(
        report.statistics.keys().collect::<Vec<_>>(),
        vec!["Combat strength", "Supply before", "Supply lost"]
    );
    assert_eq!(report.statistics["Supply lost"].attacker, Some(60));
    assert_eq!(report.statistics["Supply lost"].defender, Some(45));
}

#[test]
fn test_multiple_defenders_keep_order() {
    let text = report_text_factory(ReportTextFactoryOptions {
        defenders: Some(vec![
            CombatantFactoryOptions {
                tribe: Some("Teuton"),
                player: Some("First"),
                village: Some("Alpha"),
                units: Some(troop_columns(&TEUTON_UNITS, [30; 10], [3; 10])),
            },
            CombatantFactoryOptions {
                tribe: Some("Gaul"),
                player: Some("Second"),
                village: Some("Beta"),
                units: Some(vec![]),
            },
            CombatantFactoryOptions {
                tribe: Some("Roman"),
                player: Some("Third"),
                village: Some("Gamma"),
                units: Some(troop_columns(&GAUL_UNITS, [7; 10], [9; 10])),
            },
        ]),
        ..Default::default()
    });

    let report = parse(&text);

    let players: Vec<_> = report
        .defenders
        .iter()
        .map(|defender| defender.player.as_deref())
        .collect();
    assert_eq!(players, vec![Some("First"), Some("Second"), Some("Third")]);

    assert_eq!(report.defenders[0].units["Spearman"], UnitCasualties::new(30, 3));
    assert!(report.defenders[1].units.is_empty());
    assert_eq!(report.defenders[2].units["Haeduan"], UnitCasualties::new(7, 9));
    assert_eq!(report.defenders[2].units["Haeduan"].remaining, 0);
    assert_eq!(report.defenders_total_lost(), 30 + 90);
}

#[test]
fn test_malformed_lines_are_skipped() {
    let text = "no title line
when
Attacker
Hero from village Nowhere
Phalanx\tSwordsman\tPathfinder\tTheutates Thunder\tDruidrider\tHaeduan
100\t100\t100\t100\t100\t100
Defender
[Teuton] Boss from village Home
Statistics
Combat strength
0
-
1.000
2.000
3.000";

    let report = parse(text);

    assert_eq!(report.header.attacker_village, None);
    assert_eq!(report.header.date_time.as_deref(), Some("when"));
    assert!(!report.attacker.has_identity());
    // only one numeric row arrived before the next marker
    assert!(report.attacker.units.is_empty());
    assert_eq!(report.defenders[0].player.as_deref(), Some("Boss"));
    assert_eq!(
        report.statistics["Combat strength"],
        StatisticValues {
            attacker: Some(1000),
            defender: Some(2000)
        }
    );
}

#[test]
fn test_custom_statistic_triggers() {
    let text = "A attacks B
now
Attacker
Defender
Statistics
Heroes lost
1
2
Combat strength
3
4";
    let options = ParseOptions::default().with_statistic_triggers(["Heroes lost"]);

    let report = parse_with(text, &options);

    assert_eq!(report.statistics.len(), 1);
    assert_eq!(report.statistics["Heroes lost"].attacker, Some(1));
    // "Combat strength" is no longer a trigger, its values find both slots taken
    assert_eq!(report.statistics["Heroes lost"].defender, Some(2));
}

#[test]
fn test_report_json_shape() {
    let report = parse(&report_text_factory(Default::default()));
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["header"]["attackerVillage"], "Northwatch");
    assert_eq!(json["header"]["dateTime"], "12.05.2024 14:23:10");
    assert_eq!(json["attacker"]["units"]["Swordsman"]["lost"], 5);
    assert_eq!(json["defenders"][0]["village"], "Stonebridge");
    assert_eq!(json["statistics"]["Combat strength"]["defender"], 300000);
}
