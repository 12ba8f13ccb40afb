//! Beverage customization through condiment decorators.
//!
//! Base drinks implement [`Beverage`] directly. A [`CondimentDecorator`]
//! implements it too and owns the drink it wraps, so chains of any depth are
//! just decorators wrapping decorators, ending in a single base drink.

pub mod beverage;
pub mod builder;
pub mod condiment;
pub mod price;

pub use beverage::{Beverage, Espresso, Tea};
pub use builder::DrinkBuilder;
pub use condiment::{Condiment, CondimentDecorator, Garnish};
pub use error::PatternError;
pub use price::Price;
