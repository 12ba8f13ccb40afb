//! One factory per character class.
//!
//! `spawn_and_attack` returns the report instead of printing it; the caller
//! decides where the lines go.

use tracing::debug;

use crate::character::{Archer, Character, Knight, Mage, Warrior};

/// The two lines produced by spawning a character, in output order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnReport {
    pub created: String,
    pub attack: String,
}

impl SpawnReport {
    pub fn lines(&self) -> [&str; 2] {
        [self.created.as_str(), self.attack.as_str()]
    }
}

/// Creates exactly one kind of character
pub trait CharacterFactory {
    fn create_character(&self) -> Box<dyn Character>;

    /// Create a character, then report it and let it attack
    fn spawn_and_attack(&self) -> SpawnReport {
        let character = self.create_character();
        debug!(class = ?character.class(), "character spawned");

        let created = format!(
            "Created {} with vitality {}.",
            character.name(),
            character.vitality()
        );
        let attack = character.attack();

        SpawnReport { created, attack }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WarriorFactory;

#[derive(Debug, Clone, Copy, Default)]
pub struct MageFactory;

#[derive(Debug, Clone, Copy, Default)]
pub struct ArcherFactory;

#[derive(Debug, Clone, Copy, Default)]
pub struct KnightFactory;

impl CharacterFactory for WarriorFactory {
    fn create_character(&self) -> Box<dyn Character> {
        Box::new(Warrior)
    }
}

impl CharacterFactory for MageFactory {
    fn create_character(&self) -> Box<dyn Character> {
        Box::new(Mage)
    }
}

impl CharacterFactory for ArcherFactory {
    fn create_character(&self) -> Box<dyn Character> {
        Box::new(Archer)
    }
}

impl CharacterFactory for KnightFactory {
    fn create_character(&self) -> Box<dyn Character> {
        Box::new(Knight)
    }
}
