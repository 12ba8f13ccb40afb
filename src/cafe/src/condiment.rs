//! Condiments and the decorator that applies them.
//!
//! A [`CondimentDecorator`] owns the beverage it wraps. Its description is the
//! wrapped description followed by `", "` and the condiment name, and its cost
//! is the wrapped cost plus the condiment's increment. The inner result is
//! always computed first and the inner beverage is never modified.

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;
use tracing::trace;

use error::PatternError;

use crate::beverage::Beverage;
use crate::price::Price;

/// Extras that can be added on top of any beverage
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Condiment {
    Milk,
    Sugar,
    Syrup,
    Chocolate,
}

impl Condiment {
    /// Text appended to the description
    pub fn suffix(&self) -> &'static str {
        match self {
            Condiment::Milk => "Milk",
            Condiment::Sugar => "Sugar",
            Condiment::Syrup => "Syrup",
            Condiment::Chocolate => "Chocolate",
        }
    }

    /// Amount added to the price
    pub fn increment(&self) -> Price {
        match self {
            Condiment::Milk => Price::from_cents(10),
            Condiment::Sugar => Price::from_cents(5),
            Condiment::Syrup => Price::from_cents(15),
            Condiment::Chocolate => Price::from_cents(20),
        }
    }
}

/// A beverage with one more condiment on top
#[derive(Debug)]
pub struct CondimentDecorator {
    beverage: Box<dyn Beverage>,
    condiment: Condiment,
}

impl CondimentDecorator {
    /// Wrap a beverage that is already built
    pub fn new(beverage: impl Beverage + 'static, condiment: Condiment) -> Self {
        Self::from_boxed(Box::new(beverage), condiment)
    }

    pub fn from_boxed(beverage: Box<dyn Beverage>, condiment: Condiment) -> Self {
        trace!(?condiment, "wrapping beverage");
        Self {
            beverage,
            condiment,
        }
    }

    /// Wrap a beverage that may be absent. Fails immediately if it is.
    pub fn try_wrap(
        beverage: Option<Box<dyn Beverage>>,
        condiment: Condiment,
    ) -> Result<Self, PatternError> {
        let beverage = beverage.ok_or(PatternError::MissingBase)?;
        Ok(Self::from_boxed(beverage, condiment))
    }

    pub fn condiment(&self) -> Condiment {
        self.condiment
    }

    /// The beverage directly underneath this condiment
    pub fn inner(&self) -> &dyn Beverage {
        self.beverage.as_ref()
    }

    /// Remove this condiment, handing back the wrapped beverage
    pub fn into_inner(self) -> Box<dyn Beverage> {
        self.beverage
    }
}

impl Beverage for CondimentDecorator {
    fn description(&self) -> String {
        let mut description = self.beverage.description();
        description.push_str(", ");
        description.push_str(self.condiment.suffix());
        description
    }

    fn cost(&self) -> Price {
        self.beverage.cost() + self.condiment.increment()
    }
}

/// Fluent wrapping: `Espresso.with(Condiment::Milk).with(Condiment::Sugar)`
pub trait Garnish: Beverage + Sized + 'static {
    fn with(self, condiment: Condiment) -> CondimentDecorator {
        CondimentDecorator::new(self, condiment)
    }
}

impl<B: Beverage + Sized + 'static> Garnish for B {}
