// src/hero/src/lib.rs
//! Character creation through per-class factories.
//!
//! Each [`CharacterFactory`] builds exactly one class of [`Character`]. The
//! set of classes is closed and enumerated by [`Class`].

mod character;
pub mod class;
pub mod factory;

#[cfg(test)]
mod tests;

pub use self::{
    character::{Archer, Character, Knight, Mage, Warrior},
    class::Class,
    factory::{
        ArcherFactory, CharacterFactory, KnightFactory, MageFactory, SpawnReport, WarriorFactory,
    },
};
