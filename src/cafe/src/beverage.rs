use std::fmt;

use crate::price::Price;

/// Anything that can be served: it has a description and a price
pub trait Beverage: fmt::Debug {
    fn description(&self) -> String;

    fn cost(&self) -> Price;
}

impl<B: Beverage + ?Sized> Beverage for Box<B> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn cost(&self) -> Price {
        (**self).cost()
    }
}

/// Single shot of espresso
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Espresso;

impl Beverage for Espresso {
    fn description(&self) -> String {
        "Espresso".to_string()
    }

    fn cost(&self) -> Price {
        Price::from_cents(199)
    }
}

/// Plain black tea
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tea;

impl Beverage for Tea {
    fn description(&self) -> String {
        "Tea".to_string()
    }

    fn cost(&self) -> Price {
        Price::from_cents(150)
    }
}
