//! Factory Method and Decorator demonstrations.
//!
//! Character creation lives in [`hero`], beverage decoration in [`cafe`];
//! [`showcase`] strings them together into the console demo.

pub mod showcase;

pub use cafe;
pub use error;
pub use hero;
