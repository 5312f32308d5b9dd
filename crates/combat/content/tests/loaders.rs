use std::io::Write;

use combat_content::{ConfigLoader, RosterLoader};
use combat_core::{CharacterKind, CombatConfig};
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn loads_rule_table_from_disk() {
    let file = write_temp(
        r#"
max_health = 600
starting_level = 2
level_gap = 4
advantage_percent = 175
disadvantage_percent = 40
"#,
    );

    let config = ConfigLoader::load(file.path()).unwrap();
    assert_eq!(
        config,
        CombatConfig {
            max_health: 600,
            starting_level: 2,
            level_gap: 4,
            advantage_percent: 175,
            disadvantage_percent: 40,
        }
    );
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = ConfigLoader::load(&path).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn invalid_rule_table_reports_path() {
    let file = write_temp("max_health = 0");
    let err = ConfigLoader::load(file.path()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("max_health"));
    assert!(message.contains(&file.path().display().to_string()));
}

#[test]
fn roster_builds_characters_in_order() {
    let file = write_temp(
        r#"[
    ("aria", (kind: Some(Ranged), level: Some(6), factions: ["guild", "north"])),
    ("borin", (kind: Some(Melee), factions: ["guild"])),
    ("cutpurse", (attack_max_range: Some(3))),
]"#,
    );

    let roster = RosterLoader::load(file.path(), CombatConfig::default()).unwrap();
    let names: Vec<_> = roster.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, ["aria", "borin", "cutpurse"]);

    let (_, aria) = &roster[0];
    let (_, borin) = &roster[1];
    let (_, cutpurse) = &roster[2];

    assert_eq!(aria.kind(), Some(CharacterKind::Ranged));
    assert_eq!(aria.level(), 6);
    assert!(aria.is_allied_with(borin));
    assert!(!aria.is_allied_with(cutpurse));

    assert_eq!(cutpurse.kind(), None);
    assert_eq!(cutpurse.attack_max_range(), 3);
    assert_eq!(cutpurse.level(), 1);
    assert_ne!(aria.id(), borin.id());
}

#[test]
fn roster_characters_follow_loaded_rules() {
    let config = ConfigLoader::parse("max_health = 300").unwrap();
    let roster = RosterLoader::parse(
        r#"[("a", (kind: Some(Melee))), ("b", (kind: Some(Melee)))]"#,
        config,
    )
    .unwrap();

    let mut characters: Vec<_> = roster.into_iter().map(|(_, c)| c).collect();
    let mut target = characters.pop().unwrap();
    let attacker = characters.pop().unwrap();

    assert_eq!(target.health(), 300);
    attacker.deal_damage_to(&mut target, 350).unwrap();
    assert!(!target.is_alive());
}

#[test]
fn malformed_roster_is_rejected() {
    let file = write_temp("[(\"a\", (kind: Some(Wizard)))]");
    let err = RosterLoader::load(file.path(), CombatConfig::default()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse roster RON"));
}

#[test]
fn roster_rejects_invalid_rule_table() {
    let file = write_temp("[(\"a\", (kind: Some(Melee)))]");
    let err = RosterLoader::load(file.path(), CombatConfig::new().with_level_gap(0)).unwrap_err();
    assert!(err.to_string().contains("Invalid combat config"));
}
