//! Tests for the character classes and their factories

use std::collections::HashSet;

use strum::IntoEnumIterator;

use crate::*;

#[test]
fn test_every_factory_creates_its_own_class() {
    for class in Class::iter() {
        let character = class.factory().create_character();
        assert_eq!(character.class(), class);
        assert_eq!(character.name(), class.label());
        assert_eq!(character.vitality(), class.vitality());
        assert_eq!(character.attack(), class.attack_narration());
    }
}

#[test]
fn test_label_vitality_pairs_are_unique() {
    let pairs: HashSet<(&str, u32)> = Class::iter().map(|c| (c.label(), c.vitality())).collect();
    assert_eq!(pairs.len(), Class::iter().count());
    assert_eq!(Class::iter().count(), 4);
}

#[test]
fn test_warrior_spawn_report() {
    let report = WarriorFactory.spawn_and_attack();
    assert_eq!(report.created, "Created Warrior with vitality 100.");
    assert_eq!(report.attack, "Warrior swings a sword!");
    assert_eq!(
        report.lines(),
        ["Created Warrior with vitality 100.", "Warrior swings a sword!"]
    );
}

#[test]
fn test_spawn_report_mentions_only_its_class() {
    for class in Class::iter() {
        let report = class.factory().spawn_and_attack();
        assert!(report.created.contains(class.label()));
        assert!(report.created.contains(&class.vitality().to_string()));

        for other in Class::iter().filter(|o| *o != class) {
            assert!(!report.created.contains(other.label()));
        }
    }
}

#[test]
fn test_knight_has_vitality() {
    let knight = KnightFactory.create_character();
    assert_eq!(knight.vitality(), 80);
    assert_eq!(knight.name(), "Knight");
}

#[test]
fn test_class_serializes_by_name() {
    let json = serde_json::to_string(&Class::Archer).expect("Failed to serialize to JSON");
    assert_eq!(json, "\"Archer\"");
    let back: Class = serde_json::from_str(&json).expect("Failed to deserialize from JSON");
    assert_eq!(back, Class::Archer);
}

#[test]
fn test_default_class_is_warrior() {
    assert_eq!(Class::default(), Class::Warrior);
    assert_eq!(Class::Mage.to_string(), "Mage");
}
