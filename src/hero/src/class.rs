// src/hero/src/class.rs

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::factory::{
    ArcherFactory, CharacterFactory, KnightFactory, MageFactory, WarriorFactory,
};

/// Character classes
#[derive(
    Default, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter,
)]
pub enum Class {
    #[default]
    Warrior, // sturdy melee fighter

    Mage,   // fragile caster
    Archer, // ranged
    Knight, // mounted, armored
}

impl Class {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Class::Warrior => "Warrior",
            Class::Mage => "Mage",
            Class::Archer => "Archer",
            Class::Knight => "Knight",
        }
    }

    /// Fixed vitality for the class
    pub fn vitality(&self) -> u32 {
        match self {
            Class::Warrior => 100,
            Class::Mage => 50,
            Class::Archer => 70,
            Class::Knight => 80,
        }
    }

    /// What the class does when it attacks
    pub fn attack_narration(&self) -> &'static str {
        match self {
            Class::Warrior => "Warrior swings a sword!",
            Class::Mage => "Mage casts a fireball!",
            Class::Archer => "Archer shoots an arrow!",
            Class::Knight => "Knight charges with a lance!",
        }
    }

    /// The factory paired with this class
    pub fn factory(&self) -> Box<dyn CharacterFactory> {
        match self {
            Class::Warrior => Box::new(WarriorFactory),
            Class::Mage => Box::new(MageFactory),
            Class::Archer => Box::new(ArcherFactory),
            Class::Knight => Box::new(KnightFactory),
        }
    }
}

impl std::fmt::Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
