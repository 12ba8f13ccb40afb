use tracing::debug;

use error::PatternError;

use crate::beverage::Beverage;
use crate::condiment::{Condiment, CondimentDecorator};

/// Collects a base drink and condiments, then assembles the chain.
///
/// Condiments are applied in the order they were added, so the first one
/// ends up innermost and its suffix directly follows the base description.
#[derive(Debug, Default)]
pub struct DrinkBuilder {
    base: Option<Box<dyn Beverage>>,
    condiments: Vec<Condiment>,
}

impl DrinkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base(mut self, beverage: impl Beverage + 'static) -> Self {
        self.base = Some(Box::new(beverage));
        self
    }

    pub fn condiment(mut self, condiment: Condiment) -> Self {
        self.condiments.push(condiment);
        self
    }

    pub fn condiments(mut self, condiments: impl IntoIterator<Item = Condiment>) -> Self {
        self.condiments.extend(condiments);
        self
    }

    /// Build the drink. Without a base this fails before anything is wrapped.
    pub fn build(self) -> Result<Box<dyn Beverage>, PatternError> {
        let base = self.base.ok_or(PatternError::MissingBase)?;
        debug!(depth = self.condiments.len(), "building drink");

        Ok(self
            .condiments
            .into_iter()
            .fold(base, |drink, condiment| {
                let wrapped: Box<dyn Beverage> =
                    Box::new(CondimentDecorator::from_boxed(drink, condiment));
                wrapped
            }))
    }
}
