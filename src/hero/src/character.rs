use std::fmt;

use crate::class::Class;

/// Common capability of every playable character
pub trait Character: fmt::Debug {
    /// Which class this character belongs to
    fn class(&self) -> Class;

    /// Name shown to the player; the class label unless overridden
    fn name(&self) -> String {
        self.class().label().to_string()
    }

    /// Narration of the character's attack
    fn attack(&self) -> String;

    /// Starting vitality
    fn vitality(&self) -> u32;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Warrior;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mage;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Archer;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Knight;

macro_rules! impl_character {
    ($ty:ident) => {
        impl Character for $ty {
            fn class(&self) -> Class {
                Class::$ty
            }

            fn attack(&self) -> String {
                Class::$ty.attack_narration().to_string()
            }

            fn vitality(&self) -> u32 {
                Class::$ty.vitality()
            }
        }
    };
}

impl_character!(Warrior);
impl_character!(Mage);
impl_character!(Archer);
impl_character!(Knight);
