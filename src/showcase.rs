//! The fixed demonstration sequence.
//!
//! Building the lines is kept apart from writing them so the whole sequence
//! can be checked without touching stdout.

use std::io::Write;

use strum::IntoEnumIterator;
use tracing::info;

use cafe::{Beverage, Condiment, DrinkBuilder, Espresso, Tea};
use error::PatternError;
use hero::Class;

/// Spawn one character of every class, two lines each
pub fn factory_lines() -> Vec<String> {
    Class::iter()
        .flat_map(|class| {
            let report = class.factory().spawn_and_attack();
            [report.created, report.attack]
        })
        .collect()
}

/// The three sample orders
pub fn cafe_orders() -> Result<Vec<Box<dyn Beverage>>, PatternError> {
    Ok(vec![
        DrinkBuilder::new()
            .base(Espresso)
            .condiments([Condiment::Milk, Condiment::Sugar, Condiment::Chocolate])
            .build()?,
        DrinkBuilder::new()
            .base(Tea)
            .condiments([Condiment::Milk, Condiment::Syrup])
            .build()?,
        DrinkBuilder::new().base(Tea).build()?,
    ])
}

pub fn order_line(drink: &dyn Beverage) -> String {
    format!("{} costs {}", drink.description(), drink.cost())
}

pub fn cafe_lines() -> Result<Vec<String>, PatternError> {
    Ok(cafe_orders()?
        .iter()
        .map(|drink| order_line(&**drink))
        .collect())
}

/// Write the whole demonstration to `out`, factories first
pub fn run<W: Write>(out: &mut W) -> Result<(), PatternError> {
    info!("running factory demo");
    for line in factory_lines() {
        writeln!(out, "{}", line)?;
    }

    info!("running decorator demo");
    for line in cafe_lines()? {
        writeln!(out, "{}", line)?;
    }

    out.flush()?;
    Ok(())
}
